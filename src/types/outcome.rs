use std::fmt;

use serde_json::Value as JsonValue;

/// Result of evaluating a tree: a boolean from logical or comparison nodes, or
/// the raw literal of a `VALUE` node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Bool(bool),
    Scalar(Option<String>),
}

impl Outcome {
    /// Truthiness used by `AND`/`OR` short-circuiting. Empty and missing
    /// literals are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Outcome::Bool(b) => *b,
            Outcome::Scalar(Some(s)) => !s.is_empty(),
            Outcome::Scalar(None) => false,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Outcome::Bool(b) => Some(*b),
            Outcome::Scalar(_) => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Outcome::Bool(b) => JsonValue::Bool(*b),
            Outcome::Scalar(Some(s)) => JsonValue::String(s.clone()),
            Outcome::Scalar(None) => JsonValue::Null,
        }
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self {
        Outcome::Bool(b)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bool(b) => write!(f, "{b}"),
            Outcome::Scalar(Some(s)) => write!(f, "\"{s}\""),
            Outcome::Scalar(None) => write!(f, "null"),
        }
    }
}
