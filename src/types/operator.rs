use std::fmt;
use std::str::FromStr;

use serde_json::Value as JsonValue;

use super::error::{CombineError, EvalError};
use super::node::NodeType;

/// Comparison operators recognised by the parser, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gt,
    Lt,
    Eq,
}

/// Logical operators joining two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl CompareOp {
    /// Priority order used when scanning a segment for an operator.
    pub const SCAN_ORDER: [CompareOp; 3] = [CompareOp::Gt, CompareOp::Lt, CompareOp::Eq];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Eq => "==",
        }
    }

    #[must_use]
    pub fn node_type(self) -> NodeType {
        match self {
            CompareOp::Gt => NodeType::Gt,
            CompareOp::Lt => NodeType::Lt,
            CompareOp::Eq => NodeType::Eq,
        }
    }

    /// Compare a record field against a rule literal.
    ///
    /// `>` and `<` parse the literal as `f64` and only match numeric fields.
    /// `==` is a plain string equality with no numeric coercion, so a numeric
    /// field never equals a literal.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NumericParse`] if an ordering comparison is given a
    /// literal that is not a number.
    pub fn apply(self, field: &JsonValue, literal: &str) -> Result<bool, EvalError> {
        match self {
            CompareOp::Eq => Ok(field.as_str() == Some(literal)),
            CompareOp::Gt | CompareOp::Lt => {
                let bound = parse_number(literal)?;
                Ok(field.as_f64().is_some_and(|v| match self {
                    CompareOp::Gt => v > bound,
                    _ => v < bound,
                }))
            }
        }
    }
}

fn parse_number(literal: &str) -> Result<f64, EvalError> {
    literal
        .trim()
        .parse::<f64>()
        .map_err(|source| EvalError::NumericParse {
            literal: literal.to_owned(),
            source,
        })
}

impl LogicalOp {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }

    #[must_use]
    pub fn node_type(self) -> NodeType {
        match self {
            LogicalOp::And => NodeType::And,
            LogicalOp::Or => NodeType::Or,
        }
    }
}

impl FromStr for LogicalOp {
    type Err = CombineError;

    /// Case-insensitive: `"and"`, `"And"` and `"AND"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(LogicalOp::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(LogicalOp::Or)
        } else {
            Err(CombineError::InvalidOperator {
                operator: s.to_owned(),
            })
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
