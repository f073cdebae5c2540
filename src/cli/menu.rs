//! Interactive menu shell.
//!
//! An explicit finite-state loop around the codec: the menu gathers file
//! paths, persists them via [`Settings`], and invokes encode/decode. The
//! codec itself never touches this module's state.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use word_codec::{decode_file, encode_file, Settings};

use super::commands::with_progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Main,
    SelectMapping,
    SelectInput,
    SelectOutput,
    ConfigureSettings,
    Encoding,
    Decoding,
    Exit,
}

const DEFAULT_OUTPUT: &str = "./out.txt";

pub fn run_menu(settings_path: &Path) -> anyhow::Result<()> {
    let mut settings = Settings::load(settings_path)?;

    let mut mapping = String::new();
    let mut input = String::new();
    let mut output = String::new();
    if settings.persist_paths {
        mapping = settings.mapping_file.clone();
        input = settings.input_file.clone();
        output = settings.output_file.clone();
    }

    let mut state = MenuState::Main;
    while state != MenuState::Exit {
        state = match state {
            MenuState::Main => main_menu(&mapping, &input, &output)?,
            MenuState::SelectMapping => {
                if let Some(path) = pick_file(settings_path, "Select a mapping file:")? {
                    mapping = path;
                    settings.mapping_file = mapping.clone();
                    persist(&settings, settings_path)?;
                    println!("Mapping file: {mapping}");
                }
                MenuState::Main
            }
            MenuState::SelectInput => {
                if let Some(path) = pick_file(settings_path, "Select an input file:")? {
                    input = path;
                    settings.input_file = input.clone();
                    persist(&settings, settings_path)?;
                    println!("Input file: {input}");
                }
                MenuState::Main
            }
            MenuState::SelectOutput => {
                let path = pick_file(
                    settings_path,
                    "Select an output file, or press Enter for the default (./out.txt):",
                )?
                .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
                output = path;
                settings.output_file = output.clone();
                persist(&settings, settings_path)?;
                println!("Output file: {output}");
                MenuState::Main
            }
            MenuState::ConfigureSettings => {
                configure_settings(&mut settings, settings_path)?;
                MenuState::Main
            }
            MenuState::Encoding => {
                run_encode(&mapping, &input, &output, &settings)?;
                MenuState::Main
            }
            MenuState::Decoding => {
                run_decode(&mapping, &input, &output, &settings)?;
                MenuState::Main
            }
            MenuState::Exit => MenuState::Exit,
        };
    }

    println!("Goodbye.");
    Ok(())
}

fn main_menu(mapping: &str, input: &str, output: &str) -> anyhow::Result<MenuState> {
    println!();
    println!("************************************************************");
    println!("*                       word-codec                         *");
    println!("*             Encoding Words with Suffixes                 *");
    println!("************************************************************");
    println!("(1) Specify Mapping File{}", current(mapping));
    println!("(2) Specify Text File to Encode/Decode{}", current(input));
    println!("(3) Specify Output File{}", current(output));
    println!("(4) Configure Settings");
    println!("(5) Encode Text File");
    println!("(6) Decode Text File");
    println!("(7) Quit");

    let choice = prompt("Select Option [1-7]: ")?;
    Ok(match choice.as_str() {
        "1" => MenuState::SelectMapping,
        "2" => MenuState::SelectInput,
        "3" => MenuState::SelectOutput,
        "4" => MenuState::ConfigureSettings,
        "5" => MenuState::Encoding,
        "6" => MenuState::Decoding,
        "7" => MenuState::Exit,
        _ => {
            println!("Invalid selection. Please try again.");
            MenuState::Main
        }
    })
}

fn run_encode(mapping: &str, input: &str, output: &str, settings: &Settings) -> anyhow::Result<()> {
    if mapping.is_empty() || input.is_empty() || output.is_empty() {
        println!("Please specify mapping, input, and output files (options 1-3) first.");
        return Ok(());
    }
    with_progress(true, |sink| {
        encode_file(Path::new(input), Path::new(mapping), Path::new(output), sink)
    })?;
    println!("Encoding complete. Output written to: {output}");

    if settings.auto_reprocess {
        println!("Auto re-processing enabled: decoding the output file...");
        let check = "autodec.txt";
        with_progress(true, |sink| {
            decode_file(Path::new(output), Path::new(mapping), Path::new(check), sink)
        })?;
        println!("Re-processed file created: {check}");
    }
    Ok(())
}

fn run_decode(mapping: &str, input: &str, output: &str, settings: &Settings) -> anyhow::Result<()> {
    if mapping.is_empty() || input.is_empty() || output.is_empty() {
        println!("Please specify mapping, input, and output files (options 1-3) first.");
        return Ok(());
    }
    let out = with_progress(true, |sink| {
        decode_file(Path::new(input), Path::new(mapping), Path::new(output), sink)
    })?;
    if !out.warnings.is_empty() {
        println!("{} token(s) could not be resolved.", out.warnings.len());
    }
    println!("Decoding complete. Output written to: {output}");

    if settings.auto_reprocess {
        println!("Auto re-processing enabled: re-encoding the output file...");
        let check = "autoenc.txt";
        with_progress(true, |sink| {
            encode_file(Path::new(output), Path::new(mapping), Path::new(check), sink)
        })?;
        println!("Re-processed file created: {check}");
    }
    Ok(())
}

fn configure_settings(settings: &mut Settings, settings_path: &Path) -> anyhow::Result<()> {
    println!("Current settings:");
    println!(
        "1. Path persistence (remember selected files): {}",
        on_off(settings.persist_paths)
    );
    println!(
        "2. Auto re-processing (round-trip check after each run): {}",
        on_off(settings.auto_reprocess)
    );

    let choice = prompt("Toggle a setting [1-2] or press Enter to go back: ")?;
    match choice.as_str() {
        "1" => {
            settings.persist_paths = !settings.persist_paths;
            settings.save(settings_path)?;
            println!("Path persistence: {}", on_off(settings.persist_paths));
        }
        "2" => {
            settings.auto_reprocess = !settings.auto_reprocess;
            settings.save(settings_path)?;
            println!("Auto re-processing: {}", on_off(settings.auto_reprocess));
        }
        _ => println!("No changes made."),
    }
    Ok(())
}

/// List regular files in the working directory and let the user pick one by
/// number. Returns `None` when the selection is empty or invalid.
fn pick_file(settings_path: &Path, message: &str) -> anyhow::Result<Option<String>> {
    let files = list_files(Path::new("."), settings_path)?;
    if files.is_empty() {
        println!("No files found in the current directory.");
        return Ok(None);
    }

    println!("Files in the current directory:");
    for (i, file) in files.iter().enumerate() {
        println!("{} - {}", i + 1, file.display());
    }

    let choice = prompt(&format!("{message} "))?;
    if choice.is_empty() {
        return Ok(None);
    }
    match choice.parse::<usize>() {
        Ok(n) if n >= 1 && n <= files.len() => {
            Ok(Some(files[n - 1].display().to_string()))
        }
        _ => {
            println!("Invalid selection. Please try again.");
            Ok(None)
        }
    }
}

fn list_files(dir: &Path, settings_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(dir).max_depth(Some(1)).build();
    for entry in walker.flatten() {
        let path = entry.path();
        if path.is_file() && path.file_name() != settings_path.file_name() {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn persist(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    if settings.persist_paths {
        settings.save(path)?;
    }
    Ok(())
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn current(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" [{path}]")
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "enabled"
    } else {
        "disabled"
    }
}
