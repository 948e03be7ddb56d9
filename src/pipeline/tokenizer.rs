use crate::pipeline::normalizer::NormalizedString;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // lowercase or digit followed by uppercase: convertThis, version2Update
    static ref CASE_TRANSITION: Regex = Regex::new(r"([\p{Ll}\p{N}])(\p{Lu})").unwrap();
    // uppercase run followed by a capitalized word: XMLHttp
    static ref ACRONYM_TRANSITION: Regex = Regex::new(r"(\p{Lu}+)(\p{Lu}\p{Ll})").unwrap();
    // anything that is not a letter, digit or combining mark
    static ref SEPARATORS: Regex = Regex::new(r"[^\p{L}\p{N}\p{M}]+").unwrap();
}

/// Split normalized text into raw word segments.
///
/// Case transitions are turned into separators first, so the final split
/// only has to deal with one kind of boundary. Combining marks stay glued
/// to their segment; the sanitizer drops them afterwards.
pub fn tokenize(input: &NormalizedString) -> Vec<String> {
    let split_camel = CASE_TRANSITION.replace_all(input.as_str(), "$1 $2");
    let split_acronyms = ACRONYM_TRANSITION.replace_all(&split_camel, "$1 $2");

    let segments: Vec<String> = SEPARATORS
        .split(&split_acronyms)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    tracing::trace!(segments = segments.len(), "tokenized");
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::normalizer::normalize;
    use crate::pipeline::Options;
    use crate::RawInput;

    fn split(input: &str) -> Vec<String> {
        let normalized = normalize(&RawInput::from(input), &Options::default())
            .unwrap()
            .expect("test input must not be blank");
        tokenize(&normalized)
    }

    #[test]
    fn test_camel_case_splitting() {
        assert_eq!(split("convertThisString"), vec!["convert", "This", "String"]);
        assert_eq!(split("BrewCoffee"), vec!["Brew", "Coffee"]);
    }

    #[test]
    fn test_acronym_splitting() {
        assert_eq!(split("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(split("parseHTMLDocument"), vec!["parse", "HTML", "Document"]);
        assert_eq!(split("ABC"), vec!["ABC"]);
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(split("snake_case_word"), vec!["snake", "case", "word"]);
        assert_eq!(split("kebab--case"), vec!["kebab", "case"]);
        assert_eq!(split("  --FOO_bar"), vec!["FOO", "bar"]);
        assert_eq!(split("a.b/c+d e"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(split("emoji 🙂 test"), vec!["emoji", "test"]);
        assert_eq!(split("x!@#$%^&*()y"), vec!["x", "y"]);
    }

    #[test]
    fn test_digits_and_acronyms() {
        assert_eq!(split("v2Version"), vec!["v2", "Version"]);
        assert_eq!(split("ID3Tag"), vec!["ID3", "Tag"]);
        assert_eq!(split("version2Update"), vec!["version2", "Update"]);
        assert_eq!(split("HTML5Parser"), vec!["HTML5", "Parser"]);
        assert_eq!(split("utf8Decoder"), vec!["utf8", "Decoder"]);
        assert_eq!(split("abc123"), vec!["abc123"]);
        assert_eq!(split("123 abc"), vec!["123", "abc"]);
    }

    #[test]
    fn test_non_latin_scripts() {
        assert_eq!(split("приветМир"), vec!["привет", "Мир"]);
        assert_eq!(split("日本語 テキスト"), vec!["日本語", "テキスト"]);
        assert_eq!(split("straße_ÄRGER"), vec!["straße", "ÄRGER"]);
    }

    #[test]
    fn test_combining_marks_stay_in_segment() {
        // Devanagari vowel signs are marks, not separators
        assert_eq!(split("हिन्दी शब्द"), vec!["हिन्दी", "शब्द"]);
    }

    #[test]
    fn test_only_separators() {
        assert!(split("--- ___ ...").is_empty());
        assert!(split("🙂🙂").is_empty());
    }
}
