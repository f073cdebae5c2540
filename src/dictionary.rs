//! Dictionary Loader
//!
//! Parses mapping data (`word,code` / `@@suffix,code` lines) into paired
//! lookup tables so both encoding and decoding stay O(1) per lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CodecError, Result};

/// Marker that distinguishes suffix entries from word entries.
pub const SUFFIX_MARKER: &str = "@@";

/// A loaded mapping file, indexed in both directions.
///
/// Word entries map whole tokens; suffix entries (marked `@@` in the source)
/// merge onto a preceding word. Codes are opaque strings; the loader does not
/// validate that they are unique or avoid the hex-fallback shape — that is a
/// contract placed on the dictionary author.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    word_to_code: HashMap<String, String>,
    code_to_word: HashMap<String, String>,
    /// Keyed with the `@@` marker intact, matching the encoder's lookup key.
    suffix_to_code: HashMap<String, String>,
    /// Suffix text stored without the marker.
    code_to_suffix: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mapping file. Fails only if the file cannot be read; malformed
    /// lines are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CodecError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse mapping data. Lines that do not split into exactly two
    /// comma-separated fields are discarded; both fields are trimmed.
    /// On duplicate keys the last line wins.
    pub fn parse(content: &str) -> Self {
        let mut dict = Self::new();
        for line in content.lines() {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 2 {
                if !line.trim().is_empty() {
                    tracing::debug!("skipping malformed mapping line: {line:?}");
                }
                continue;
            }
            dict.insert(fields[0].trim(), fields[1].trim());
        }
        dict
    }

    fn insert(&mut self, key: &str, code: &str) {
        if let Some(suffix) = key.strip_prefix(SUFFIX_MARKER) {
            self.suffix_to_code.insert(key.to_string(), code.to_string());
            self.code_to_suffix.insert(code.to_string(), suffix.to_string());
        } else {
            self.word_to_code.insert(key.to_string(), code.to_string());
            self.code_to_word.insert(code.to_string(), key.to_string());
        }
    }

    /// Code for a whole word, if the word is known.
    pub fn code_for_word(&self, word: &str) -> Option<&str> {
        self.word_to_code.get(word).map(|s| s.as_str())
    }

    /// Word for a code. Takes priority over `suffix_for_code` at decode time.
    pub fn word_for_code(&self, code: &str) -> Option<&str> {
        self.code_to_word.get(code).map(|s| s.as_str())
    }

    /// Code for a word remainder, looked up as `"@@" + remainder`.
    pub fn code_for_suffix(&self, remainder: &str) -> Option<&str> {
        self.suffix_to_code
            .get(&format!("{SUFFIX_MARKER}{remainder}"))
            .map(|s| s.as_str())
    }

    /// Suffix text (without the marker) for a code.
    pub fn suffix_for_code(&self, code: &str) -> Option<&str> {
        self.code_to_suffix.get(code).map(|s| s.as_str())
    }

    /// Greedy longest-prefix match: scans prefix lengths from the whole word
    /// down to one character (on char boundaries) and returns the first word
    /// entry hit, as `(prefix, code)`.
    pub fn longest_prefix<'a>(&self, word: &'a str) -> Option<(&'a str, &str)> {
        if word.is_empty() {
            return None;
        }
        let mut ends: Vec<usize> = word.char_indices().skip(1).map(|(i, _)| i).collect();
        ends.push(word.len());
        for &end in ends.iter().rev() {
            let prefix = &word[..end];
            if let Some(code) = self.word_to_code.get(prefix) {
                return Some((prefix, code));
            }
        }
        None
    }

    pub fn word_count(&self) -> usize {
        self.word_to_code.len()
    }

    pub fn suffix_count(&self) -> usize {
        self.suffix_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_code.is_empty() && self.suffix_to_code.is_empty()
    }
}
