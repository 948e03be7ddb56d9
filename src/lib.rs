pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod parser;
pub mod pipeline;

pub use config::Config;
pub use error::CaseError;
pub use input::RawInput;
pub use pipeline::renderer::Style;
pub use pipeline::sanitizer::{Token, TokenSequence};
pub use pipeline::{convert, Options};

/// Convert to lowerCamelCase (`convertThisString`).
pub fn to_camel_case(
    input: impl Into<RawInput>,
    options: Option<Options>,
) -> Result<String, CaseError> {
    convert(&input.into(), Style::Camel, &options.unwrap_or_default())
}

/// Convert to kebab-case (`convert-this-string`).
pub fn to_kebab_case(
    input: impl Into<RawInput>,
    options: Option<Options>,
) -> Result<String, CaseError> {
    convert(&input.into(), Style::Kebab, &options.unwrap_or_default())
}

/// Convert to dot.case (`convert.this.string`).
pub fn to_dot_case(
    input: impl Into<RawInput>,
    options: Option<Options>,
) -> Result<String, CaseError> {
    convert(&input.into(), Style::Dot, &options.unwrap_or_default())
}

/// Convert to snake_case (`convert_this_string`).
pub fn to_snake_case(
    input: impl Into<RawInput>,
    options: Option<Options>,
) -> Result<String, CaseError> {
    convert(&input.into(), Style::Snake, &options.unwrap_or_default())
}
