use tracing::debug;

use crate::engine::DEFAULT_MAX_DEPTH;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::{CombineError, LogicalOp, Node};

/// Join two trees under `AND` or `OR` (case-insensitive).
///
/// The trees are moved into the new root as-is; nothing is evaluated or
/// simplified. The root gets a fresh random identifier.
///
/// # Errors
///
/// Returns [`CombineError::InvalidOperator`] for any operator other than
/// `AND`/`OR`, and [`CombineError::DepthExceeded`] if the joined tree would be
/// deeper than the default ceiling.
pub fn combine(left: Node, right: Node, operator: &str) -> Result<Node, CombineError> {
    combine_with(left, right, operator, &UuidGenerator, DEFAULT_MAX_DEPTH)
}

pub(crate) fn combine_with(
    left: Node,
    right: Node,
    operator: &str,
    ids: &dyn IdGenerator,
    max_depth: usize,
) -> Result<Node, CombineError> {
    let op = operator
        .parse::<LogicalOp>()
        .inspect_err(|e| debug!(error = %e, "rejected combination"))?;
    // The new root adds one level above the taller operand.
    if left.height().max(right.height()) + 1 > max_depth {
        debug!(
            left = left.height(),
            right = right.height(),
            max_depth,
            "rejected combination"
        );
        return Err(CombineError::DepthExceeded { limit: max_depth });
    }
    let node = Node::branch(ids.next_id(), op.node_type(), left, right);
    debug!(
        id = node.id(),
        op = %op,
        left = node.left().node().map(Node::id),
        right = node.right().node().map(Node::id),
        "combined rules"
    );
    Ok(node)
}
