//! Conversion between rule trees and their portable record form.
//!
//! ## Record Format
//!
//! ```text
//! {
//!   "id":    <string>,
//!   "type":  <string>,                 AND | OR | > | < | == | CONDITION | VALUE
//!   "value": <string | null>,
//!   "left":  <record | scalar | null>,
//!   "right": <record | scalar | null>
//! }
//! ```
//!
//! A nested object in `left`/`right` is always read as a child record; any
//! other value is carried through unchanged as a [`ChildSlot::Scalar`]. The
//! `type` tag is not validated here; unknown tags surface when evaluated.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value as JsonValue};
use thiserror::Error;
use tracing::{debug, trace};

use crate::engine::DEFAULT_MAX_DEPTH;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::{ChildSlot, Node, NodeType};

const ID: &str = "id";
const TYPE: &str = "type";
const VALUE: &str = "value";
const LEFT: &str = "left";
const RIGHT: &str = "right";

/// Errors that can occur when reading a tree from a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("malformed record: expected an object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("malformed record: missing field '{field}'")]
    MissingField { field: &'static str },

    #[error("malformed record: field '{field}' must be a string, got {found}")]
    InvalidField {
        field: &'static str,
        found: &'static str,
    },

    #[error("record nests deeper than the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

/// Serialize a tree into its nested record form.
#[must_use]
pub fn serialize(node: &Node) -> JsonValue {
    json!({
        ID: node.id(),
        TYPE: node.node_type().as_str(),
        VALUE: node.value(),
        LEFT: slot_to_json(node.left()),
        RIGHT: slot_to_json(node.right()),
    })
}

fn slot_to_json(slot: &ChildSlot) -> JsonValue {
    match slot {
        ChildSlot::Empty => JsonValue::Null,
        ChildSlot::Scalar(value) => value.clone(),
        ChildSlot::Subtree(node) => serialize(node),
    }
}

/// Rebuild a tree from a record, generating random identifiers for records
/// without an `id`.
///
/// # Errors
///
/// Returns [`RecordError`] if the record, or any nested record, is not an
/// object, lacks a string `type`, carries a non-string `id` or `value`, or nests
/// deeper than the default depth ceiling.
pub fn deserialize(record: &JsonValue) -> Result<Node, RecordError> {
    RecordReader::new(&UuidGenerator, DEFAULT_MAX_DEPTH).read(record)
}

pub(crate) struct RecordReader<'a> {
    ids: &'a dyn IdGenerator,
    max_depth: usize,
}

impl<'a> RecordReader<'a> {
    pub(crate) fn new(ids: &'a dyn IdGenerator, max_depth: usize) -> Self {
        Self { ids, max_depth }
    }

    pub(crate) fn read(&self, record: &JsonValue) -> Result<Node, RecordError> {
        self.node(record, 0).inspect_err(|e| debug!(error = %e, "rejected record"))
    }

    fn node(&self, record: &JsonValue, depth: usize) -> Result<Node, RecordError> {
        if depth > self.max_depth {
            return Err(RecordError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        let JsonValue::Object(map) = record else {
            return Err(RecordError::NotAnObject {
                found: kind(record),
            });
        };

        let node_type = match map.get(TYPE) {
            Some(JsonValue::String(tag)) => NodeType::from(tag.as_str()),
            Some(other) => {
                return Err(RecordError::InvalidField {
                    field: TYPE,
                    found: kind(other),
                })
            }
            None => return Err(RecordError::MissingField { field: TYPE }),
        };
        let id = optional_string(map, ID)?.unwrap_or_else(|| self.ids.next_id());
        let value = optional_string(map, VALUE)?;
        trace!(depth, id = %id, node_type = %node_type, "reading record");

        let left = self.slot(map.get(LEFT), depth)?;
        let right = self.slot(map.get(RIGHT), depth)?;
        Ok(Node::new(id, node_type, value, left, right))
    }

    fn slot(&self, field: Option<&JsonValue>, depth: usize) -> Result<ChildSlot, RecordError> {
        Ok(match field {
            None | Some(JsonValue::Null) => ChildSlot::Empty,
            Some(nested @ JsonValue::Object(_)) => self.node(nested, depth + 1)?.into(),
            Some(scalar) => ChildSlot::Scalar(scalar.clone()),
        })
    }
}

/// `null` and a missing key are both treated as absent.
fn optional_string(
    map: &Map<String, JsonValue>,
    field: &'static str,
) -> Result<Option<String>, RecordError> {
    match map.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(RecordError::InvalidField {
            field,
            found: kind(other),
        }),
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = JsonValue::deserialize(deserializer)?;
        deserialize(&record).map_err(D::Error::custom)
    }
}
