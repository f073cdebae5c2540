//! Encoder: whitespace-delimited words to a token stream.
//!
//! Each word is resolved by greedy longest-prefix match against the word
//! table; a remainder is matched against the suffix table, and anything still
//! unknown is emitted as a hex fallback token so the stream stays reversible
//! for arbitrary input.

use crate::codec::token::{fallback_token, TokenStream};
use crate::dictionary::Dictionary;
use crate::progress::ProgressSink;

/// Encode a whole document. Line breaks are treated as ordinary separators;
/// words are runs of non-space characters. Reports progress after each word.
pub fn encode_text(text: &str, dict: &Dictionary, progress: &dyn ProgressSink) -> TokenStream {
    let joined = text.lines().collect::<Vec<_>>().join(" ");
    let words: Vec<&str> = joined
        .trim()
        .split(' ')
        .filter(|w| !w.is_empty())
        .collect();

    let total = words.len();
    let mut stream = TokenStream::new();
    for (i, word) in words.iter().enumerate() {
        encode_word(word, dict, &mut stream);
        progress.report(i + 1, total);
    }
    stream
}

/// Emit the token(s) for one word, per the longest-prefix algorithm:
/// whole-word code, prefix code + suffix code, prefix code + hex remainder,
/// or a hex fallback for the entire word.
fn encode_word(word: &str, dict: &Dictionary, stream: &mut TokenStream) {
    let Some((prefix, code)) = dict.longest_prefix(word) else {
        stream.push(fallback_token(word));
        return;
    };

    stream.push(code.to_string());
    let remainder = &word[prefix.len()..];
    if remainder.is_empty() {
        return;
    }
    match dict.code_for_suffix(remainder) {
        Some(suffix_code) => stream.push(suffix_code.to_string()),
        None => stream.push(fallback_token(remainder)),
    }
}
