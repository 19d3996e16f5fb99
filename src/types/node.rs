use std::fmt;

use serde_json::Value as JsonValue;

/// Discriminant selecting how a [`Node`] is interpreted.
///
/// Deserialized records may carry a type outside the known set; it is kept
/// verbatim in [`NodeType::Other`] and only rejected when evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    And,
    Or,
    Gt,
    Lt,
    Eq,
    Condition,
    Value,
    Other(String),
}

impl NodeType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::And => "AND",
            NodeType::Or => "OR",
            NodeType::Gt => ">",
            NodeType::Lt => "<",
            NodeType::Eq => "==",
            NodeType::Condition => "CONDITION",
            NodeType::Value => "VALUE",
            NodeType::Other(tag) => tag,
        }
    }
}

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        match tag {
            "AND" => NodeType::And,
            "OR" => NodeType::Or,
            ">" => NodeType::Gt,
            "<" => NodeType::Lt,
            "==" => NodeType::Eq,
            "CONDITION" => NodeType::Condition,
            "VALUE" => NodeType::Value,
            other => NodeType::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of a node's `left` or `right` position.
///
/// Trees built by the parser only hold [`ChildSlot::Subtree`] or
/// [`ChildSlot::Empty`]; [`ChildSlot::Scalar`] carries raw record values through
/// deserialization unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChildSlot {
    #[default]
    Empty,
    Scalar(JsonValue),
    Subtree(Box<Node>),
}

impl ChildSlot {
    #[must_use]
    pub fn node(&self) -> Option<&Node> {
        match self {
            ChildSlot::Subtree(node) => Some(node),
            _ => None,
        }
    }

    fn height(&self) -> Option<usize> {
        self.node().map(Node::height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ChildSlot::Empty)
    }
}

impl From<Node> for ChildSlot {
    fn from(node: Node) -> Self {
        ChildSlot::Subtree(Box::new(node))
    }
}

/// A single node of a rule tree. Owns its children; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    node_type: NodeType,
    value: Option<String>,
    left: ChildSlot,
    right: ChildSlot,
    height: usize,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        node_type: NodeType,
        value: Option<String>,
        left: ChildSlot,
        right: ChildSlot,
    ) -> Self {
        let height = left.height().max(right.height()).map_or(0, |h| h + 1);
        Self {
            id: id.into(),
            node_type,
            value,
            left,
            right,
            height,
        }
    }

    /// An `AND`/`OR` node joining two subtrees.
    pub fn branch(id: impl Into<String>, node_type: NodeType, left: Node, right: Node) -> Self {
        Self::new(id, node_type, None, left.into(), right.into())
    }

    /// A comparison node; `literal` must be a `VALUE` node.
    pub fn comparison(
        id: impl Into<String>,
        node_type: NodeType,
        field: impl Into<String>,
        literal: Node,
    ) -> Self {
        Self::new(
            id,
            node_type,
            Some(field.into()),
            ChildSlot::Empty,
            literal.into(),
        )
    }

    pub fn literal(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeType::Value,
            Some(value.into()),
            ChildSlot::Empty,
            ChildSlot::Empty,
        )
    }

    pub fn condition(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeType::Condition,
            Some(text.into()),
            ChildSlot::Empty,
            ChildSlot::Empty,
        )
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn left(&self) -> &ChildSlot {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &ChildSlot {
        &self.right
    }

    /// Number of edges on the longest path down to a leaf, `VALUE` literals
    /// included. A lone leaf has height 0.
    ///
    /// This is the measure every depth ceiling is checked against.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for ChildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildSlot::Empty => Ok(()),
            ChildSlot::Scalar(JsonValue::String(s)) => f.write_str(s),
            ChildSlot::Scalar(v) => write!(f, "{v}"),
            ChildSlot::Subtree(node) => write!(f, "{node}"),
        }
    }
}

/// Renders the tree back to rule text. Logical nodes are not parenthesized,
/// mirroring the grammar, which has no grouping.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value().unwrap_or_default();
        match &self.node_type {
            NodeType::And | NodeType::Or => {
                write!(f, "{} {} {}", self.left, self.node_type, self.right)
            }
            NodeType::Gt | NodeType::Lt | NodeType::Eq => {
                write!(f, "{value} {} {}", self.node_type, self.right)
            }
            NodeType::Condition | NodeType::Value => f.write_str(value),
            NodeType::Other(tag) => write!(f, "<{tag}>"),
        }
    }
}
