use crate::cli::Conversion;
use crate::pipeline::sanitizer::Token;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    source: &'a str,
    line: usize,
    input: &'a str,
    style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [Token]>,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    total: usize,
    failed: usize,
    conversions: Vec<JsonConversion<'a>>,
}

pub fn print_conversions(
    conversions: &[Conversion],
    colored_output: bool,
    show_style: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_conversions(conversions, colored_output, show_style);
            Ok(())
        }
        OutputFormat::Json => print_json_conversions(conversions),
    }
}

fn print_text_conversions(conversions: &[Conversion], colored_output: bool, show_style: bool) {
    for conversion in conversions {
        match &conversion.outcome {
            Ok(output) => println!(
                "{}",
                format_line(conversion, output, colored_output, show_style)
            ),
            Err(err) => {
                let location = format!("{}:{}", conversion.source, conversion.line);
                if colored_output {
                    eprintln!(
                        "{} {} {}",
                        "error:".red().bold(),
                        location.blue().bold(),
                        err
                    );
                } else {
                    eprintln!("error: {} {}", location, err);
                }
            }
        }
    }
}

fn format_line(
    conversion: &Conversion,
    output: &str,
    colored_output: bool,
    show_style: bool,
) -> String {
    let mut line = String::new();

    if show_style {
        let label = format!("{}:", conversion.style);
        if colored_output {
            line.push_str(&format!("{:<7}", label).cyan().to_string());
        } else {
            line.push_str(&format!("{:<7}", label));
        }
        line.push(' ');
    }

    line.push_str(output);

    if let Some(tokens) = &conversion.tokens {
        let listed = tokens
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let listed = format!("[{}]", listed);
        line.push_str("  ");
        if colored_output {
            line.push_str(&listed.dimmed().to_string());
        } else {
            line.push_str(&listed);
        }
    }

    line
}

fn print_json_conversions(conversions: &[Conversion]) -> Result<()> {
    let json_conversions: Vec<JsonConversion<'_>> = conversions
        .iter()
        .map(|c| JsonConversion {
            source: &c.source,
            line: c.line,
            input: &c.text,
            style: c.style.to_string(),
            output: c.outcome.as_deref().ok(),
            error: c.outcome.as_ref().err().map(|e| e.to_string()),
            tokens: c.tokens.as_deref(),
        })
        .collect();

    let output = JsonOutput {
        total: conversions.len(),
        failed: crate::cli::failure_count(conversions),
        conversions: json_conversions,
    };

    let rendered =
        serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
    println!("{}", rendered);
    Ok(())
}

pub fn print_summary(failed: usize, total: usize, colored: bool) {
    if failed == 0 {
        return;
    }

    let input_word = if total == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} failed",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            total,
            input_word
        );
    } else {
        eprintln!("✗ {} of {} {} failed", failed, total, input_word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::renderer::Style;
    use crate::pipeline::sanitizer::sanitize;

    fn conversion(tokens: bool) -> Conversion {
        Conversion {
            source: "<arg>".to_string(),
            line: 1,
            text: "Hello World".to_string(),
            style: Style::Kebab,
            outcome: Ok("hello-world".to_string()),
            tokens: tokens.then(|| sanitize(&["hello", "world"])),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_line_plain() {
        assert_eq!(
            format_line(&conversion(false), "hello-world", false, false),
            "hello-world"
        );
        assert_eq!(
            format_line(&conversion(true), "hello-world", false, true),
            "kebab:  hello-world  [hello, world]"
        );
    }
}
