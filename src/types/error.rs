use std::num::ParseFloatError;

use thiserror::Error;

/// Errors raised while evaluating a tree against a [`Context`](crate::Context).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("cannot parse '{literal}' as a number: {source}")]
    NumericParse {
        literal: String,
        source: ParseFloatError,
    },

    #[error("unknown rule type '{node_type}'")]
    UnknownRuleType { node_type: String },

    #[error("'{node_type}' node is missing its operand")]
    MissingOperand { node_type: String },

    #[error("tree exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

/// Errors raised when joining two trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombineError {
    #[error("invalid operator '{operator}'; expected 'AND' or 'OR'")]
    InvalidOperator { operator: String },

    #[error("combined tree would exceed the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}
