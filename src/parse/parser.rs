use tracing::trace;

use crate::ids::IdGenerator;
use crate::{CompareOp, LogicalOp, Node};

use super::error::ParseError;
use super::grammar::split_on;

/// Recursive-descent parser over the two-level rule grammar.
///
/// Children are built before their parent, so identifiers are handed out
/// bottom-up.
pub(crate) struct RuleParser<'a> {
    ids: &'a dyn IdGenerator,
    max_depth: usize,
}

impl<'a> RuleParser<'a> {
    pub(crate) fn new(ids: &'a dyn IdGenerator, max_depth: usize) -> Self {
        Self { ids, max_depth }
    }

    pub(crate) fn parse(&self, input: &str) -> Result<Node, ParseError> {
        self.rule(input, 0)
    }

    fn rule(&self, input: &str, depth: usize) -> Result<Node, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        trace!(depth, segment = input, "parsing segment");

        // AND is split before OR, so it ends up at the root whenever both
        // keywords appear.
        for op in [LogicalOp::And, LogicalOp::Or] {
            if let Some(node) = self.logical(input, op, depth)? {
                return Ok(node);
            }
        }

        match CompareOp::SCAN_ORDER
            .into_iter()
            .find(|op| input.contains(op.symbol()))
        {
            Some(op) => self.comparison(input, op, depth),
            None => Ok(Node::condition(self.ids.next_id(), input.trim())),
        }
    }

    fn logical(
        &self,
        input: &str,
        op: LogicalOp,
        depth: usize,
    ) -> Result<Option<Node>, ParseError> {
        let parts = split_on(input, op.keyword());
        let [first, rest @ ..] = parts.as_slice() else {
            return Ok(None);
        };
        if rest.is_empty() {
            return Ok(None);
        }

        let left = self.rule(first.trim(), depth + 1)?;
        let joined = rest.join(&format!(" {} ", op.keyword()));
        let right = self.rule(joined.trim(), depth + 1)?;
        Ok(Some(Node::branch(
            self.ids.next_id(),
            op.node_type(),
            left,
            right,
        )))
    }

    fn comparison(&self, input: &str, op: CompareOp, depth: usize) -> Result<Node, ParseError> {
        let parts = split_on(input, op.symbol());
        let [field, literal] = parts.as_slice() else {
            return Err(ParseError::MalformedRule {
                segment: input.to_owned(),
                operator: op.symbol(),
                occurrences: parts.len() - 1,
            });
        };
        // The literal sits one level below the comparison.
        if depth + 1 > self.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let literal = Node::literal(self.ids.next_id(), literal.trim());
        Ok(Node::comparison(
            self.ids.next_id(),
            op.node_type(),
            field.trim(),
            literal,
        ))
    }
}
