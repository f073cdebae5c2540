//! Decoder: token stream back to text.
//!
//! Per-token resolution is strictly ordered: word table, then suffix table,
//! then hex fallback. A code living in both tables therefore always decodes
//! as a word. Tokens that resolve to nothing are skipped but surfaced as
//! warnings rather than silently dropped.

use thiserror::Error;

use crate::codec::token::{TokenStream, FALLBACK_MARKER};
use crate::dictionary::Dictionary;
use crate::progress::ProgressSink;

/// A token the decoder could not turn into text. Recoverable: the token is
/// skipped and decoding continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    #[error("invalid hex token {token:?}: {reason}")]
    InvalidHex { token: String, reason: String },

    #[error("unknown token {token:?}")]
    UnknownToken { token: String },
}

/// Decoded text plus the warnings gathered along the way.
#[derive(Debug, Clone, Default)]
pub struct DecodeOutput {
    pub text: String,
    pub warnings: Vec<DecodeWarning>,
}

/// Decode a token stream. Reports progress after each token.
pub fn decode_stream(
    stream: &TokenStream,
    dict: &Dictionary,
    progress: &dyn ProgressSink,
) -> DecodeOutput {
    let total = stream.len();
    let mut out = String::new();
    let mut warnings = Vec::new();

    for (i, token) in stream.tokens().iter().enumerate() {
        if let Some(word) = dict.word_for_code(token) {
            out.push_str(word);
            out.push(' ');
        } else if let Some(suffix) = dict.suffix_for_code(token) {
            // Merge onto the previous word: drop the space that ended it.
            if out.ends_with(' ') {
                out.pop();
            }
            out.push_str(suffix);
            out.push(' ');
        } else if let Some(hex_body) = token.strip_suffix(FALLBACK_MARKER) {
            match decode_fallback(hex_body) {
                Ok(text) => {
                    out.push_str(&text);
                    out.push(' ');
                }
                Err(reason) => {
                    tracing::warn!("invalid hex token {token:?}: {reason}");
                    warnings.push(DecodeWarning::InvalidHex {
                        token: token.clone(),
                        reason,
                    });
                }
            }
        } else {
            tracing::warn!("unknown token {token:?}");
            warnings.push(DecodeWarning::UnknownToken {
                token: token.clone(),
            });
        }
        progress.report(i + 1, total);
    }

    DecodeOutput {
        text: normalize_spaces(&out),
        warnings,
    }
}

fn decode_fallback(hex_body: &str) -> Result<String, String> {
    let bytes = hex::decode(hex_body).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Trim and collapse runs of the space character. Other whitespace inside a
/// decoded word (e.g. a tab restored from a hex token) is left alone.
fn normalize_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
