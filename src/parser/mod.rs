pub mod json_lines;
pub mod plaintext;

use crate::input::RawInput;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub const ARG_SOURCE: &str = "<arg>";
pub const STDIN_SOURCE: &str = "<stdin>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One text input per line
    Plain,
    /// One JSON value per line
    Json,
}

impl InputFormat {
    /// Detect input format from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" | "jsonl" | "ndjson" => InputFormat::Json,
            _ => InputFormat::Plain,
        }
    }
}

/// One value to convert, with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub source: String,
    pub line: usize,
    pub text: String, // Original line, for diagnostics
    pub input: RawInput,
}

/// Parse a block of text in the given format
pub fn parse(source: &str, content: &str, format: InputFormat) -> Result<Vec<InputRecord>> {
    match format {
        InputFormat::Plain => Ok(plaintext::parse(source, content)),
        InputFormat::Json => json_lines::parse(source, content),
    }
}

/// Parse a file; `force_json` overrides extension detection
pub fn parse_file(path: &Path, force_json: bool) -> Result<Vec<InputRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let format = if force_json {
        InputFormat::Json
    } else {
        InputFormat::from_path(path)
    };

    parse(&path.display().to_string(), &content, format)
}

/// Each argument is a single input, even when it contains newlines
pub fn parse_args(args: &[String], format: InputFormat) -> Result<Vec<InputRecord>> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| -> Result<InputRecord> {
            let input = match format {
                InputFormat::Plain => RawInput::from(arg),
                InputFormat::Json => json_lines::parse_value(arg)
                    .with_context(|| format!("Invalid JSON in argument {}", i + 1))?,
            };
            Ok(InputRecord {
                source: ARG_SOURCE.to_string(),
                line: i + 1,
                text: arg.clone(),
                input,
            })
        })
        .collect()
}

pub fn parse_stdin(format: InputFormat) -> Result<Vec<InputRecord>> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;

    parse(STDIN_SOURCE, &content, format)
}
