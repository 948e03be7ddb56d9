//! Property-based tests for the conversion pipeline
//!
//! These check the guarantees every style shares:
//! - converting a style's own output is a no-op
//! - all styles render the same number of tokens
//! - separators never lead, trail or double up
//! - absent input always yields an empty string

use casefmt::pipeline::tokens;
use casefmt::{convert, Options, RawInput, Style};
use proptest::prelude::*;

/// Identifier-ish text mixing cases, digits, separators and a few non-ASCII letters
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]{1,12}",
        "[a-zA-Z0-9 _./+-]{0,30}",
        "[a-z]{1,6}([A-Z][a-z]{1,6}){0,4}",
        "[A-Z]{2,5}[A-Z][a-z]{1,5}",
        "[a-zA-Zéßäöü0-9 _-]{0,24}",
        "[а-яА-Я ]{0,16}",
    ]
}

/// Lowercase words of two or more characters. camelCase output is only
/// guaranteed stable for these: "a b c" renders "aBC", which reads back as
/// the words "a" and "bc".
fn camel_words_strategy() -> impl Strategy<Value = String> {
    "[a-zäöüé0-9]{2,8}([ _.-][a-zäöüé0-9]{2,8}){0,4}"
}

fn separated_style_strategy() -> impl Strategy<Value = Style> {
    prop::sample::select(vec![Style::Kebab, Style::Dot, Style::Snake])
}

fn style_strategy() -> impl Strategy<Value = Style> {
    prop::sample::select(Style::ALL.to_vec())
}

fn run(input: &str, style: Style) -> String {
    convert(&RawInput::from(input), style, &Options::default()).unwrap()
}

proptest! {
    #[test]
    fn separated_styles_are_idempotent(
        input in identifier_strategy(),
        style in separated_style_strategy(),
    ) {
        let once = run(&input, style);
        let twice = run(&once, style);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn camel_case_is_idempotent(input in camel_words_strategy()) {
        let once = run(&input, Style::Camel);
        let twice = run(&once, Style::Camel);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn token_count_matches_across_styles(input in identifier_strategy()) {
        let expected = tokens(&RawInput::from(input.as_str()), &Options::default())
            .unwrap()
            .len();

        for style in [Style::Kebab, Style::Dot, Style::Snake] {
            let output = run(&input, style);
            let rendered = if output.is_empty() {
                0
            } else {
                output.split(style.separator().unwrap()).count()
            };
            prop_assert_eq!(rendered, expected);
        }

        let camel = run(&input, Style::Camel);
        prop_assert_eq!(camel.is_empty(), expected == 0);
    }

    #[test]
    fn separators_are_well_formed(input in "\\PC{0,40}", style in style_strategy()) {
        let output = run(&input, style);
        if let Some(separator) = style.separator() {
            let doubled: String = [separator, separator].iter().collect();
            prop_assert!(!output.starts_with(separator));
            prop_assert!(!output.ends_with(separator));
            prop_assert!(!output.contains(&doubled));
        }
    }

    #[test]
    fn non_strict_mode_never_fails(input in "\\PC{0,40}", style in style_strategy()) {
        prop_assert!(convert(&RawInput::from(input), style, &Options::default()).is_ok());
    }

    #[test]
    fn strict_mode_rejects_booleans(value in any::<bool>(), style in style_strategy()) {
        prop_assert!(convert(&RawInput::from(value), style, &Options::strict()).is_err());
    }
}

#[test]
fn absent_input_is_empty_for_every_style() {
    for style in Style::ALL {
        assert_eq!(convert(&RawInput::Absent, style, &Options::default()).unwrap(), "");
        assert_eq!(convert(&RawInput::Absent, style, &Options::strict()).unwrap(), "");
    }
}
