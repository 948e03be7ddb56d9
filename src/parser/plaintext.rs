use crate::input::RawInput;
use crate::parser::InputRecord;

/// Every line is one text input; blank lines are kept and convert to ""
pub fn parse(source: &str, content: &str) -> Vec<InputRecord> {
    content
        .lines()
        .enumerate()
        .map(|(line_num, line)| InputRecord {
            source: source.to_string(),
            line: line_num + 1,
            text: line.to_string(),
            input: RawInput::from(line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_parsing() {
        let content = "Hello World\nconvertThisString\r\n\nlast";
        let records = parse("<test>", content);

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].input, RawInput::Text("Hello World".to_string()));
        assert_eq!(records[1].text, "convertThisString");
        assert_eq!(records[2].text, "");
        assert_eq!(records[3].line, 4);
    }

    #[test]
    fn test_empty_content() {
        assert!(parse("<test>", "").is_empty());
    }
}
