pub mod normalizer;
pub mod renderer;
pub mod sanitizer;
pub mod tokenizer;

use crate::error::CaseError;
use crate::input::RawInput;
use rayon::prelude::*;
use renderer::Style;
use sanitizer::TokenSequence;
use serde::{Deserialize, Serialize};

/// Per-call conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Reject inputs that are neither text nor numbers instead of coercing them.
    #[serde(default)]
    pub strict: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Run normalization, tokenizing and sanitizing, stopping short of rendering.
///
/// Every style renders exactly this sequence, so two styles applied to the
/// same input always agree on the number of words.
pub fn tokens(input: &RawInput, options: &Options) -> Result<TokenSequence, CaseError> {
    let Some(normalized) = normalizer::normalize(input, options)? else {
        return Ok(TokenSequence::new());
    };

    let segments = tokenizer::tokenize(&normalized);
    let tokens = sanitizer::sanitize(&segments);

    tracing::debug!(
        input_len = normalized.as_str().len(),
        tokens = tokens.len(),
        "sanitized input"
    );

    Ok(tokens)
}

/// Convert one input to the given style.
pub fn convert(input: &RawInput, style: Style, options: &Options) -> Result<String, CaseError> {
    let tokens = tokens(input, options)?;
    Ok(renderer::render(&tokens, style))
}

/// Convert many inputs in parallel. Results keep the order of `inputs`.
pub fn convert_batch(
    inputs: &[RawInput],
    style: Style,
    options: &Options,
) -> Vec<Result<String, CaseError>> {
    inputs
        .par_iter()
        .map(|input| convert(input, style, options))
        .collect()
}
