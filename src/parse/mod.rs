mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub(crate) use parser::RuleParser;

use crate::engine::DEFAULT_MAX_DEPTH;
use crate::ids::UuidGenerator;
use crate::Node;

/// Parse a rule string into a tree with random identifiers.
///
/// The grammar has two levels: the string is split on `AND`, then on `OR`,
/// and each remaining segment is a single `>`, `<` or `==` comparison or a
/// free-text `CONDITION`. Parentheses are ordinary characters.
///
/// # Example
///
/// ```
/// use ruletree::{parse, NodeType};
///
/// let rule = parse("age > 30 AND department == Sales").unwrap();
/// assert_eq!(rule.node_type(), &NodeType::And);
/// ```
///
/// # Errors
///
/// Returns [`ParseError::MalformedRule`] if a segment contains its comparison
/// operator more than once, and [`ParseError::DepthExceeded`] if the rule has
/// more clauses than the default depth ceiling allows.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    RuleParser::new(&UuidGenerator, DEFAULT_MAX_DEPTH).parse(input)
}
