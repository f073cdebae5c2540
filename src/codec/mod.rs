//! Codec: encoder, decoder, and token stream format.

pub mod decoder;
pub mod encoder;
pub mod token;

use std::fs;
use std::path::Path;

use crate::dictionary::Dictionary;
use crate::error::{CodecError, Result};
use crate::progress::ProgressSink;

pub use decoder::{decode_stream, DecodeOutput, DecodeWarning};
pub use encoder::encode_text;
pub use token::{fallback_token, TokenStream, FALLBACK_MARKER};

/// Encode `input` with the mapping at `mapping`, writing one line of
/// serialized tokens to `output`.
pub fn encode_file(
    input: &Path,
    mapping: &Path,
    output: &Path,
    progress: &dyn ProgressSink,
) -> Result<()> {
    let dict = Dictionary::load(mapping)?;
    let text = read_file(input)?;
    let stream = encode_text(&text, &dict, progress);
    write_line(output, &stream.to_line())?;
    tracing::info!("encoded {} token(s) to {}", stream.len(), output.display());
    Ok(())
}

/// Decode `input` with the mapping at `mapping`, writing one line of text to
/// `output`. Warnings for unresolved tokens are returned alongside success.
pub fn decode_file(
    input: &Path,
    mapping: &Path,
    output: &Path,
    progress: &dyn ProgressSink,
) -> Result<DecodeOutput> {
    let dict = Dictionary::load(mapping)?;
    let raw = read_file(input)?;
    let out = decode_stream(&TokenStream::parse(&raw), &dict, progress);
    write_line(output, &out.text)?;
    tracing::info!(
        "decoded {} byte(s) to {} ({} warning(s))",
        out.text.len(),
        output.display(),
        out.warnings.len()
    );
    Ok(out)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CodecError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_line(path: &Path, line: &str) -> Result<()> {
    fs::write(path, format!("{line}\n")).map_err(|source| CodecError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
