//! Integration tests for the file-level codec entry points.
//!
//! These drive encode/decode through real files, the way the CLI does.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use word_codec::{decode_file, encode_file, Dictionary, NoProgress, Settings};

/// Writes `content` into `name` under `dir` and returns the full path.
fn create_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Encodes `text` to a file and decodes it back, returning the decoded text.
fn round_trip(mapping: &str, text: &str) -> String {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mapping_path = create_file(temp_dir.path(), "mapping.csv", mapping);
    let input_path = create_file(temp_dir.path(), "input.txt", text);
    let encoded_path = temp_dir.path().join("encoded.txt");
    let decoded_path = temp_dir.path().join("decoded.txt");

    encode_file(&input_path, &mapping_path, &encoded_path, &NoProgress)
        .expect("Failed to encode");
    let out = decode_file(&encoded_path, &mapping_path, &decoded_path, &NoProgress)
        .expect("Failed to decode");
    assert!(
        out.warnings.is_empty(),
        "unexpected decode warnings: {:?}",
        out.warnings
    );

    fs::read_to_string(&decoded_path)
        .expect("Failed to read decoded file")
        .trim_end()
        .to_string()
}

// ============================================================================
// Round-trip law
// ============================================================================

mod round_trip_law {
    use super::*;

    const MAPPING: &str = "the,1\ncat,2\nsat,3\nrun,10\n@@ning,20\n@@s,21\n";

    #[test]
    fn test_known_words() {
        assert_eq!(round_trip(MAPPING, "the cat sat"), "the cat sat");
    }

    #[test]
    fn test_suffix_words() {
        assert_eq!(round_trip(MAPPING, "running cats"), "running cats");
    }

    #[test]
    fn test_unknown_words_via_fallback() {
        assert_eq!(
            round_trip(MAPPING, "the zebra jumped"),
            "the zebra jumped"
        );
    }

    #[test]
    fn test_multibyte_words_via_fallback() {
        assert_eq!(round_trip(MAPPING, "café 日本語"), "café 日本語");
    }

    #[test]
    fn test_whitespace_normalized() {
        assert_eq!(
            round_trip(MAPPING, "the   cat\nsat  \n"),
            "the cat sat"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(round_trip(MAPPING, ""), "");
    }

    #[test]
    fn test_empty_dictionary_everything_falls_back() {
        assert_eq!(round_trip("", "anything goes here"), "anything goes here");
    }
}

// ============================================================================
// Encoded file format
// ============================================================================

mod encoded_format {
    use super::*;

    #[test]
    fn test_encoded_file_is_bracketed_single_line() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mapping = create_file(temp_dir.path(), "mapping.csv", "run,10\n@@ning,20\n");
        let input = create_file(temp_dir.path(), "input.txt", "running");
        let encoded = temp_dir.path().join("encoded.txt");

        encode_file(&input, &mapping, &encoded, &NoProgress).expect("Failed to encode");

        let content = fs::read_to_string(&encoded).expect("Failed to read encoded file");
        assert_eq!(content, "[10,20]\n");
    }

    #[test]
    fn test_empty_input_serializes_as_empty_brackets() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mapping = create_file(temp_dir.path(), "mapping.csv", "run,10\n");
        let input = create_file(temp_dir.path(), "input.txt", "");
        let encoded = temp_dir.path().join("encoded.txt");

        encode_file(&input, &mapping, &encoded, &NoProgress).expect("Failed to encode");

        assert_eq!(
            fs::read_to_string(&encoded).expect("Failed to read encoded file"),
            "[]\n"
        );
    }

    #[test]
    fn test_fallback_token_shape() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mapping = create_file(temp_dir.path(), "mapping.csv", "");
        let input = create_file(temp_dir.path(), "input.txt", "xyz");
        let encoded = temp_dir.path().join("encoded.txt");

        encode_file(&input, &mapping, &encoded, &NoProgress).expect("Failed to encode");

        assert_eq!(
            fs::read_to_string(&encoded).expect("Failed to read encoded file"),
            "[78797ax]\n"
        );
    }
}

// ============================================================================
// Decode diagnostics
// ============================================================================

mod decode_diagnostics {
    use super::*;

    #[test]
    fn test_invalid_hex_token_skipped_and_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mapping = create_file(temp_dir.path(), "mapping.csv", "cat,1\n");
        let encoded = create_file(temp_dir.path(), "encoded.txt", "[zzx,1]");
        let decoded = temp_dir.path().join("decoded.txt");

        let out =
            decode_file(&encoded, &mapping, &decoded, &NoProgress).expect("Failed to decode");

        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.text, "cat");
        assert_eq!(
            fs::read_to_string(&decoded).expect("Failed to read decoded file"),
            "cat\n"
        );
    }

    #[test]
    fn test_missing_mapping_file_is_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let encoded = create_file(temp_dir.path(), "encoded.txt", "[1]");
        let decoded = temp_dir.path().join("decoded.txt");

        let result = decode_file(
            &encoded,
            &temp_dir.path().join("missing.csv"),
            &decoded,
            &NoProgress,
        );

        assert!(result.is_err());
        assert!(!decoded.exists());
    }

    #[test]
    fn test_missing_input_file_is_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mapping = create_file(temp_dir.path(), "mapping.csv", "cat,1\n");
        let output = temp_dir.path().join("out.txt");

        let result = encode_file(
            &temp_dir.path().join("missing.txt"),
            &mapping,
            &output,
            &NoProgress,
        );

        assert!(result.is_err());
    }
}

// ============================================================================
// Dictionary reuse across documents
// ============================================================================

mod dictionary_reuse {
    use super::*;
    use word_codec::{decode_stream, encode_text};

    #[test]
    fn test_one_dictionary_many_documents() {
        let dict = Dictionary::parse("the,1\ncat,2\n@@s,21\n");

        for text in ["the cat", "cats", "the unknown"] {
            let stream = encode_text(text, &dict, &NoProgress);
            let out = decode_stream(&stream, &dict, &NoProgress);
            assert_eq!(out.text, text);
        }
    }
}

// ============================================================================
// Settings persistence
// ============================================================================

mod settings_persistence {
    use super::*;

    #[test]
    fn test_paths_survive_reload() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("word-codec.toml");

        let mut settings = Settings::default();
        settings.mapping_file = "mapping.csv".into();
        settings.input_file = "input.txt".into();
        settings.save(&path).expect("Failed to save settings");

        let reloaded = Settings::load(&path).expect("Failed to load settings");
        assert_eq!(reloaded.mapping_file, "mapping.csv");
        assert_eq!(reloaded.input_file, "input.txt");
        assert!(reloaded.persist_paths);
    }
}
