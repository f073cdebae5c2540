//! # word-codec
//!
//! Reversible dictionary-based word encoding. Text is split into
//! whitespace-delimited words; each word is replaced by a dictionary code via
//! greedy longest-prefix match, an optional suffix code, or a hex fallback
//! token that guarantees any input round-trips exactly.

pub mod codec;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod progress;

pub use codec::{
    decode_file, decode_stream, encode_file, encode_text, fallback_token, DecodeOutput,
    DecodeWarning, TokenStream,
};
pub use config::{Settings, SETTINGS_FILE};
pub use dictionary::Dictionary;
pub use error::{CodecError, Result};
pub use progress::{NoProgress, ProgressSink};
