use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use word_codec::{
    decode_file, decode_stream, encode_file, CodecError, Dictionary, NoProgress, ProgressSink,
    TokenStream, SETTINGS_FILE,
};

#[derive(Parser)]
#[command(name = "word-codec")]
#[command(about = "CLI tool for reversible dictionary-based word encoding")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Encode a text file with a mapping dictionary
    word-codec encode mapping.csv input.txt encoded.txt

    # Decode it back
    word-codec decode mapping.csv encoded.txt decoded.txt

    # Encode and verify the round trip in one go
    word-codec encode mapping.csv input.txt encoded.txt --verify

    # Treat unresolved tokens as a hard error
    word-codec decode mapping.csv encoded.txt decoded.txt --strict

    # Inspect a mapping file
    word-codec stats mapping.csv --format json

    # Run the interactive menu
    word-codec menu
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the settings file
    #[arg(long, default_value = SETTINGS_FILE)]
    pub settings: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a text file into a token stream
    Encode {
        /// Mapping file (word,code / @@suffix,code lines)
        mapping: PathBuf,

        /// Text file to encode
        input: PathBuf,

        /// Destination for the encoded token stream
        output: PathBuf,

        /// Suppress the progress bar
        #[arg(long)]
        no_progress: bool,

        /// Decode the result in memory and compare against the input
        #[arg(long)]
        verify: bool,
    },

    /// Decode a token stream back into text
    Decode {
        /// Mapping file (word,code / @@suffix,code lines)
        mapping: PathBuf,

        /// Token stream file to decode
        input: PathBuf,

        /// Destination for the decoded text
        output: PathBuf,

        /// Suppress the progress bar
        #[arg(long)]
        no_progress: bool,

        /// Fail when any token cannot be resolved
        #[arg(long)]
        strict: bool,
    },

    /// Show entry counts for a mapping file
    Stats {
        /// Mapping file to inspect
        mapping: PathBuf,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run the interactive menu
    Menu,
}

pub fn encode(
    mapping: &Path,
    input: &Path,
    output: &Path,
    show_progress: bool,
    verify: bool,
) -> anyhow::Result<()> {
    with_progress(show_progress, |sink| {
        encode_file(input, mapping, output, sink)
    })?;
    println!("Encoding complete. Output written to: {}", output.display());

    if verify {
        let dict = Dictionary::load(mapping)?;
        let original = fs::read_to_string(input)?;
        let encoded = fs::read_to_string(output)?;
        let decoded = decode_stream(&TokenStream::parse(&encoded), &dict, &NoProgress);
        if decoded.text != normalize(&original) {
            anyhow::bail!("round-trip verification failed for {}", input.display());
        }
        println!("Round trip verified.");
    }
    Ok(())
}

pub fn decode(
    mapping: &Path,
    input: &Path,
    output: &Path,
    show_progress: bool,
    strict: bool,
) -> anyhow::Result<()> {
    let out = with_progress(show_progress, |sink| {
        decode_file(input, mapping, output, sink)
    })?;
    println!("Decoding complete. Output written to: {}", output.display());

    if !out.warnings.is_empty() {
        eprintln!("{} token(s) could not be resolved:", out.warnings.len());
        for warning in &out.warnings {
            eprintln!("  {warning}");
        }
        if strict {
            return Err(CodecError::Unresolved(out.warnings.len()).into());
        }
    }
    Ok(())
}

pub fn stats(mapping: &Path, format: &str) -> anyhow::Result<()> {
    let dict = Dictionary::load(mapping)?;
    match format {
        "json" => {
            let value = serde_json::json!({
                "words": dict.word_count(),
                "suffixes": dict.suffix_count(),
                "total": dict.word_count() + dict.suffix_count(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            println!("Mapping file: {}", mapping.display());
            println!("  Word entries:   {}", dict.word_count());
            println!("  Suffix entries: {}", dict.suffix_count());
            println!(
                "  Total:          {}",
                dict.word_count() + dict.suffix_count()
            );
        }
    }
    Ok(())
}

/// Run `f` with a progress sink: a console bar, or a null sink when disabled.
pub(crate) fn with_progress<T>(
    show: bool,
    f: impl FnOnce(&dyn ProgressSink) -> word_codec::Result<T>,
) -> word_codec::Result<T> {
    if !show {
        return f(&NoProgress);
    }
    let bar = progress_bar();
    let sink = |processed: usize, total: usize| {
        if bar.length() != Some(total as u64) {
            bar.set_length(total as u64);
        }
        bar.set_position(processed as u64);
    };
    let result = f(&sink);
    bar.finish_and_clear();
    result
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("[{bar:50}] {percent:>3}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("██░"),
    );
    bar
}

/// Same whitespace normalization the codec applies end to end: line breaks
/// become spaces, runs of spaces collapse.
fn normalize(text: &str) -> String {
    text.lines()
        .collect::<Vec<_>>()
        .join(" ")
        .split(' ')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
