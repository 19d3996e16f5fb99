use tracing::{debug, trace};

use crate::engine::DEFAULT_MAX_DEPTH;
use crate::{ChildSlot, CompareOp, Context, EvalError, Node, NodeType, Outcome};

/// Evaluate a tree against a data record.
///
/// `AND`/`OR` short-circuit on the left operand. Comparisons against fields
/// missing from `ctx` are `false`. A `VALUE` node yields its literal.
///
/// # Errors
///
/// Returns [`EvalError::UnknownRuleType`] for `CONDITION` nodes and unknown
/// discriminants, [`EvalError::NumericParse`] for a `>`/`<` literal that is
/// not a number, [`EvalError::MissingOperand`] for structurally incomplete
/// nodes, and [`EvalError::DepthExceeded`] for trees deeper than the default
/// ceiling.
pub fn evaluate(node: &Node, ctx: &Context) -> Result<Outcome, EvalError> {
    evaluate_with_limit(node, ctx, DEFAULT_MAX_DEPTH)
}

pub(crate) fn evaluate_with_limit(
    node: &Node,
    ctx: &Context,
    max_depth: usize,
) -> Result<Outcome, EvalError> {
    // Recursion below is bounded by the stored height.
    let result = if node.height() > max_depth {
        Err(EvalError::DepthExceeded { limit: max_depth })
    } else {
        eval_node(node, ctx, 0)
    };
    match &result {
        Ok(outcome) => debug!(id = node.id(), %outcome, "evaluated rule"),
        Err(e) => debug!(id = node.id(), error = %e, "evaluation failed"),
    }
    result
}

fn eval_node(node: &Node, ctx: &Context, depth: usize) -> Result<Outcome, EvalError> {
    trace!(depth, id = node.id(), node_type = %node.node_type(), "evaluating node");

    match node.node_type() {
        NodeType::And => {
            let left = eval_node(operand(node, node.left())?, ctx, depth + 1)?;
            if !left.is_truthy() {
                return Ok(Outcome::Bool(false));
            }
            eval_node(operand(node, node.right())?, ctx, depth + 1)
        }
        NodeType::Or => {
            let left = eval_node(operand(node, node.left())?, ctx, depth + 1)?;
            if left.is_truthy() {
                return Ok(Outcome::Bool(true));
            }
            eval_node(operand(node, node.right())?, ctx, depth + 1)
        }
        NodeType::Gt => compare(node, ctx, CompareOp::Gt),
        NodeType::Lt => compare(node, ctx, CompareOp::Lt),
        NodeType::Eq => compare(node, ctx, CompareOp::Eq),
        NodeType::Value => Ok(Outcome::Scalar(node.value().map(str::to_owned))),
        NodeType::Condition | NodeType::Other(_) => Err(EvalError::UnknownRuleType {
            node_type: node.node_type().to_string(),
        }),
    }
}

fn operand<'a>(node: &Node, slot: &'a ChildSlot) -> Result<&'a Node, EvalError> {
    slot.node().ok_or_else(|| missing_operand(node))
}

fn missing_operand(node: &Node) -> EvalError {
    EvalError::MissingOperand {
        node_type: node.node_type().to_string(),
    }
}

fn compare(node: &Node, ctx: &Context, op: CompareOp) -> Result<Outcome, EvalError> {
    let Some(field) = node.value().and_then(|name| ctx.get(name)) else {
        return Ok(Outcome::Bool(false));
    };
    let literal = node
        .right()
        .node()
        .and_then(Node::value)
        .ok_or_else(|| missing_operand(node))?;
    op.apply(field, literal).map(Outcome::Bool)
}
