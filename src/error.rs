use thiserror::Error;

use crate::parse::ParseError;
use crate::record::RecordError;
use crate::{CombineError, EvalError};

/// Unified error type covering every tree operation.
///
/// Each variant forwards the message of the operation that failed, so callers
/// can report it to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Combine(#[from] CombineError),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{combine, deserialize, evaluate, parse, Context, Outcome};

    fn combined_outcome(a: &str, b: &str, op: &str, ctx: &Context) -> Result<Outcome, RuleError> {
        let node = combine(parse(a)?, parse(b)?, op)?;
        Ok(evaluate(&node, ctx)?)
    }

    #[test]
    fn question_mark_converts_each_kind() {
        let ctx = Context::new().set("x", 2);
        assert_eq!(
            combined_outcome("x > 1", "x < 3", "and", &ctx),
            Ok(Outcome::Bool(true))
        );
        assert!(matches!(
            combined_outcome("x > 1 > 0", "x < 3", "and", &ctx),
            Err(RuleError::Parse(_))
        ));
        assert!(matches!(
            combined_outcome("x > 1", "x < 3", "nand", &ctx),
            Err(RuleError::Combine(_))
        ));
        assert!(matches!(
            combined_outcome("x > one", "x < 3", "or", &ctx),
            Err(RuleError::Eval(_))
        ));
    }

    #[test]
    fn messages_are_forwarded() {
        let err = RuleError::from(deserialize(&json!(null)).unwrap_err());
        assert_eq!(
            err.to_string(),
            "malformed record: expected an object, got null"
        );
    }
}
