use crate::error::CaseError;
use crate::input::{value_kind, RawInput};
use crate::pipeline::Options;
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// NFKC-normalized, trimmed, non-empty text ready for tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedString(String);

impl NormalizedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate and coerce raw input into normalized text.
///
/// `Ok(None)` means the pipeline ends here with an empty result: the input
/// was absent, or nothing was left after trimming.
pub fn normalize(
    input: &RawInput,
    options: &Options,
) -> Result<Option<NormalizedString>, CaseError> {
    let text: Cow<'_, str> = match input {
        RawInput::Absent | RawInput::Other(Value::Null) => {
            tracing::trace!("absent input, short-circuiting");
            return Ok(None);
        }
        RawInput::Text(s) | RawInput::Other(Value::String(s)) => Cow::Borrowed(s.as_str()),
        RawInput::Number(n) | RawInput::Other(Value::Number(n)) => Cow::Owned(number_text(n)),
        RawInput::Other(value) => {
            if options.strict {
                return Err(CaseError::InvalidInputType {
                    kind: value_kind(value),
                });
            }
            Cow::Owned(coerce_value(value))
        }
    };

    let normalized: String = text.nfkc().collect();
    let trimmed = normalized.trim();

    if trimmed.is_empty() {
        tracing::trace!("input empty after trimming, short-circuiting");
        return Ok(None);
    }

    Ok(Some(NormalizedString(trimmed.to_string())))
}

fn number_text(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else {
        // f64's Display drops a trailing ".0"
        number
            .as_f64()
            .map_or_else(|| number.to_string(), |f| f.to_string())
    }
}

/// Booleans print as `true`/`false`; arrays and objects as compact JSON text.
fn coerce_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
