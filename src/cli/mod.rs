pub mod output;

use crate::error::CaseError;
use crate::parser::InputRecord;
use crate::pipeline::{self, renderer::Style, sanitizer::TokenSequence, Options};
use rayon::prelude::*;

/// Outcome of rendering one record in one style.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub source: String,
    pub line: usize,
    pub text: String,
    pub style: Style,
    pub outcome: Result<String, CaseError>,
    pub tokens: Option<TokenSequence>,
}

/// Convert every record in every requested style.
///
/// Results are grouped by record, then by style in the order given.
pub fn run_conversions(
    records: &[InputRecord],
    styles: &[Style],
    options: &Options,
    with_tokens: bool,
) -> Vec<Conversion> {
    records
        .par_iter()
        .flat_map_iter(|record| {
            let tokens = if with_tokens {
                pipeline::tokens(&record.input, options).ok()
            } else {
                None
            };

            styles.iter().map(move |&style| Conversion {
                source: record.source.clone(),
                line: record.line,
                text: record.text.clone(),
                style,
                outcome: pipeline::convert(&record.input, style, options),
                tokens: tokens.clone(),
            })
        })
        .collect()
}

pub fn failure_count(conversions: &[Conversion]) -> usize {
    conversions.iter().filter(|c| c.outcome.is_err()).count()
}
