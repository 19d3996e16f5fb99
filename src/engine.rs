use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::instrument;

use crate::combine::combine_with;
use crate::evaluate::evaluate_with_limit;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::parse::{ParseError, RuleParser};
use crate::record::{self, RecordError, RecordReader};
use crate::{CombineError, Context, EvalError, Node, Outcome};

/// Maximum [`Node::height`] accepted by the parser, the record reader, the
/// evaluator and the combiner unless an [`Engine`] is configured otherwise.
///
/// All four count the same way, `VALUE` literals included, so a tree accepted
/// by one is accepted by the others. Kept below `serde_json`'s own nesting
/// limit so every accepted tree can be written out and read back as JSON text.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configured entry point for all tree operations.
///
/// Holds the identifier generator used for new nodes and the depth ceiling.
/// Cheap to clone and safe to share between threads.
///
/// # Example
///
/// ```
/// use ruletree::{Context, Engine, Outcome, SequentialIds};
///
/// let engine = Engine::new().with_id_generator(SequentialIds::new());
/// let rule = engine.parse("age > 30 AND department == Sales").unwrap();
/// assert_eq!(rule.id(), "n5");
///
/// let ctx = Context::new().set("age", 35).set("department", "Sales");
/// assert_eq!(engine.evaluate(&rule, &ctx).unwrap(), Outcome::Bool(true));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    ids: Arc<dyn IdGenerator>,
    max_depth: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            ids: Arc::new(UuidGenerator),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier generator (UUIDv4 by default).
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Set the depth ceiling for parsing, deserialization, evaluation and
    /// combination.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse a rule string. See [`parse`](crate::parse()).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for malformed or overly deep rules.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn parse(&self, rule: &str) -> Result<Node, ParseError> {
        RuleParser::new(self.ids.as_ref(), self.max_depth).parse(rule)
    }

    /// Serialize a tree to its record form.
    #[must_use]
    pub fn serialize(&self, node: &Node) -> JsonValue {
        record::serialize(node)
    }

    /// Rebuild a tree from a record. See [`deserialize`](crate::deserialize()).
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] for malformed or overly deep records.
    pub fn deserialize(&self, record: &JsonValue) -> Result<Node, RecordError> {
        RecordReader::new(self.ids.as_ref(), self.max_depth).read(record)
    }

    /// Evaluate a tree. See [`evaluate`](crate::evaluate()).
    ///
    /// # Errors
    ///
    /// Returns [`EvalError`] if the tree cannot be evaluated.
    pub fn evaluate(&self, node: &Node, ctx: &Context) -> Result<Outcome, EvalError> {
        evaluate_with_limit(node, ctx, self.max_depth)
    }

    /// Join two trees. See [`combine`](crate::combine()).
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::InvalidOperator`] for operators other than
    /// `AND`/`OR`, and [`CombineError::DepthExceeded`] if the joined tree
    /// would pass the depth ceiling.
    pub fn combine(&self, left: Node, right: Node, operator: &str) -> Result<Node, CombineError> {
        combine_with(left, right, operator, self.ids.as_ref(), self.max_depth)
    }
}
