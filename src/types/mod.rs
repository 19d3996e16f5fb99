mod context;
mod error;
mod node;
mod operator;
mod outcome;

pub use context::Context;
pub use error::{CombineError, EvalError};
pub use node::{ChildSlot, Node, NodeType};
pub use operator::{CompareOp, LogicalOp};
pub use outcome::Outcome;
