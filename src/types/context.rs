use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Data record a tree is evaluated against: a flat mapping of field names to
/// JSON values.
///
/// Field names are matched verbatim; there is no path navigation, so
/// `"user.age"` is a single key. A field holding `null` is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    data: HashMap<String, JsonValue>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<JsonValue>) -> Self {
        self.insert(field, value.into());
        self
    }

    /// Insert a field (mutable reference version).
    pub fn insert(&mut self, field: &str, value: JsonValue) {
        self.data.insert(field.to_owned(), value);
    }

    /// Look up a field. Returns `None` for missing fields and for `null`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.data.get(field).filter(|v| !v.is_null())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Map<String, JsonValue>> for Context {
    fn from(map: Map<String, JsonValue>) -> Self {
        map.into_iter().collect()
    }
}

impl FromIterator<(String, JsonValue)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn set_and_get() {
        let ctx = Context::new().set("age", 25).set("name", "alice");
        assert_eq!(ctx.get("age"), Some(&json!(25)));
        assert_eq!(ctx.get("name"), Some(&json!("alice")));
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn get_missing_returns_none() {
        let ctx = Context::new().set("age", 25);
        assert_eq!(ctx.get("salary"), None);
    }

    #[test]
    fn null_is_absent() {
        let ctx = Context::new().set("age", JsonValue::Null);
        assert_eq!(ctx.get("age"), None);
        assert!(!ctx.is_empty());
    }

    #[test]
    fn dotted_names_are_flat_keys() {
        let ctx = Context::new().set("user.age", 30);
        assert_eq!(ctx.get("user.age"), Some(&json!(30)));
        assert_eq!(ctx.get("user"), None);
    }

    #[test]
    fn overwrite_value() {
        let ctx = Context::new().set("score", 10).set("score", 20);
        assert_eq!(ctx.get("score"), Some(&json!(20)));
    }

    #[test]
    fn deserializes_from_json_object() {
        let ctx: Context =
            serde_json::from_value(json!({"age": 30, "department": "Sales"})).unwrap();
        assert_eq!(ctx.get("department"), Some(&json!("Sales")));
        assert_eq!(ctx.get("age"), Some(&json!(30)));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(serde_json::from_value::<Context>(json!([1, 2])).is_err());
    }

    #[test]
    fn from_json_map() {
        let JsonValue::Object(map) = json!({"x": 1}) else {
            unreachable!()
        };
        let ctx = Context::from(map);
        assert_eq!(ctx.get("x"), Some(&json!(1)));
    }

    #[test]
    fn empty_context() {
        let ctx = Context::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get("anything"), None);
    }
}
