use thiserror::Error;

/// Failure raised by the conversion pipeline.
///
/// Only strict mode can produce one: every other input, however odd,
/// converts to some (possibly empty) string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("input must be a string or number (got {kind})")]
    InvalidInputType { kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_kind() {
        let err = CaseError::InvalidInputType { kind: "boolean" };
        assert_eq!(
            err.to_string(),
            "input must be a string or number (got boolean)"
        );
    }
}
