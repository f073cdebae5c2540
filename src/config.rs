//! Persisted settings: last-used file paths and behavior toggles.
//!
//! Loaded once at process start and handed to the menu shell; the codec never
//! reads settings directly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "word-codec.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Remember the last selected mapping/input/output paths across runs.
    pub persist_paths: bool,
    /// After encoding, immediately decode the result (and vice versa) as a
    /// round-trip check.
    pub auto_reprocess: bool,
    pub mapping_file: String,
    pub input_file: String,
    pub output_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            persist_paths: true,
            auto_reprocess: false,
            mapping_file: String::new(),
            input_file: String::new(),
            output_file: String::new(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| CodecError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content)
            .map_err(|e| CodecError::Settings(format!("invalid {}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CodecError::Settings(e.to_string()))?;
        fs::write(path, content).map_err(|source| CodecError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
