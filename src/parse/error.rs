use thiserror::Error;

/// Errors produced when parsing a rule string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed rule '{segment}': operator '{operator}' appears {occurrences} times, expected once")]
    MalformedRule {
        segment: String,
        operator: &'static str,
        occurrences: usize,
    },

    #[error("rule nests deeper than the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_rule_display() {
        let err = ParseError::MalformedRule {
            segment: "a > 1 > 2".into(),
            operator: ">",
            occurrences: 2,
        };
        assert_eq!(
            err.to_string(),
            "malformed rule 'a > 1 > 2': operator '>' appears 2 times, expected once"
        );
    }

    #[test]
    fn depth_exceeded_display() {
        let err = ParseError::DepthExceeded { limit: 4 };
        assert_eq!(
            err.to_string(),
            "rule nests deeper than the maximum depth of 4"
        );
    }
}
