use crate::input::RawInput;
use crate::parser::InputRecord;
use anyhow::{Context, Result};
use serde_json::Value;

/// Every non-blank line holds one JSON value
pub fn parse(source: &str, content: &str) -> Result<Vec<InputRecord>> {
    let mut records = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;
        if line.trim().is_empty() {
            continue;
        }

        let input = parse_value(line)
            .with_context(|| format!("Invalid JSON at {}:{}", source, line_num))?;

        records.push(InputRecord {
            source: source.to_string(),
            line: line_num,
            text: line.to_string(),
            input,
        });
    }

    Ok(records)
}

pub fn parse_value(text: &str) -> Result<RawInput> {
    let value: Value = serde_json::from_str(text)?;
    Ok(RawInput::from(value))
}
