use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\p{L}\p{N}]").unwrap();
}

/// A non-empty, lowercase run of Unicode letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Clean a raw segment into a token, or `None` if nothing survives.
    pub fn new(segment: &str) -> Option<Self> {
        // Lowercase before stripping: some lowercase mappings emit a
        // combining mark ("İ" -> "i\u{307}") that must not reach a token.
        let lowered = segment.to_lowercase();
        let cleaned = NON_WORD.replace_all(&lowered, "");

        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned.into_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered tokens in render order. Never holds an empty token.
pub type TokenSequence = Vec<Token>;

/// Strip every non letter/digit character from each segment and lowercase
/// what remains, dropping segments that end up empty.
pub fn sanitize<S: AsRef<str>>(segments: &[S]) -> TokenSequence {
    segments
        .iter()
        .filter_map(|segment| Token::new(segment.as_ref()))
        .collect()
}
