use crate::pipeline::sanitizer::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target identifier style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// lowerCamelCase
    #[default]
    Camel,
    /// kebab-case
    Kebab,
    /// dot.case
    Dot,
    /// snake_case
    Snake,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Camel, Style::Kebab, Style::Dot, Style::Snake];

    /// Character placed between tokens, if the style uses one.
    pub fn separator(self) -> Option<char> {
        match self {
            Style::Camel => None,
            Style::Kebab => Some('-'),
            Style::Dot => Some('.'),
            Style::Snake => Some('_'),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Style::Camel),
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            "dot" | "dot.case" => Ok(Style::Dot),
            "snake" | "snake_case" => Ok(Style::Snake),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Camel => write!(f, "camel"),
            Style::Kebab => write!(f, "kebab"),
            Style::Dot => write!(f, "dot"),
            Style::Snake => write!(f, "snake"),
        }
    }
}

/// Render a token sequence in the given style.
///
/// The output buffer is sized once up front; tokens are never empty, so a
/// plain join cannot produce leading, trailing or doubled separators.
pub fn render(tokens: &[Token], style: Style) -> String {
    let capacity = tokens.iter().map(|t| t.len() + 1).sum::<usize>();
    let mut result = String::with_capacity(capacity);

    match style.separator() {
        Some(separator) => {
            for (i, token) in tokens.iter().enumerate() {
                if i > 0 {
                    result.push(separator);
                }
                result.push_str(token);
            }
        }
        None => {
            for (i, token) in tokens.iter().enumerate() {
                if i == 0 {
                    result.push_str(token);
                    continue;
                }
                let mut chars = token.chars();
                if let Some(first) = chars.next() {
                    result.extend(first.to_uppercase());
                    result.push_str(chars.as_str());
                }
            }
        }
    }

    result
}
