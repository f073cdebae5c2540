use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("settings error: {0}")]
    Settings(String),

    #[error("decoding left {0} token(s) unresolved")]
    Unresolved(usize),
}

pub type Result<T> = std::result::Result<T, CodecError>;
