//! Rule strings parsed into binary expression trees.
//!
//! A rule such as `age > 30 AND department == Sales` is parsed into a tree of
//! [`Node`]s, which can be written to and read from a JSON record, evaluated
//! against a flat [`Context`] of field values, and joined with other trees
//! under `AND`/`OR`.
//!
//! ```
//! use ruletree::{combine, evaluate, parse, Context, Outcome};
//!
//! let seniors = parse("age > 60").unwrap();
//! let sales = parse("department == Sales").unwrap();
//! let rule = combine(seniors, sales, "or").unwrap();
//!
//! let ctx = Context::new().set("age", 35).set("department", "Sales");
//! assert_eq!(evaluate(&rule, &ctx).unwrap(), Outcome::Bool(true));
//! ```

mod combine;
mod engine;
mod error;
mod evaluate;
mod ids;
mod parse;
mod record;
mod types;

pub use combine::combine;
pub use engine::{Engine, DEFAULT_MAX_DEPTH};
pub use error::RuleError;
pub use evaluate::evaluate;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use parse::{parse, ParseError};
pub use record::{deserialize, serialize, RecordError};
pub use types::{
    ChildSlot, CombineError, CompareOp, Context, EvalError, LogicalOp, Node, NodeType, Outcome,
};
