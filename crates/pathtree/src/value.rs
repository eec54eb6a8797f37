//! Scalar-or-tree values and the JSON bridge.

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::tree::Tree;

/// A value stored in a [`Tree`]: a scalar leaf or a nested tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent/unset leaf.
    Null,
    /// Boolean leaf.
    Bool(bool),
    /// Integer leaf.
    Int(i64),
    /// Floating-point leaf.
    Float(f64),
    /// String leaf.
    String(String),
    /// Nested tree.
    Tree(Tree),
}

impl Value {
    /// Returns `true` if this value is a nested tree.
    pub fn is_tree(&self) -> bool {
        matches!(self, Value::Tree(_))
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the nested tree, if any.
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Value::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Mutably borrow the nested tree, if any.
    pub fn as_tree_mut(&mut self) -> Option<&mut Tree> {
        match self {
            Value::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Consume the value, yielding the nested tree if there is one.
    pub fn into_tree(self) -> Option<Tree> {
        match self {
            Value::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Borrow the string leaf, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Copy out the integer leaf, if any.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Copy out the float leaf; integer leaves widen losslessly.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Copy out the boolean leaf, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Resolve a dot-delimited path against this value.
    ///
    /// Returns `None` immediately when the receiver is not a tree. The empty
    /// path denotes the whole value, so `get_path("")` on a tree returns the
    /// receiver itself. Any missing segment along the way is `None`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let tree = self.as_tree()?;
        if path.is_empty() {
            return Some(self);
        }
        tree.get(path)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        Value::Tree(tree)
    }
}

/// JSON objects become trees (numeric-looking keys normalize per
/// [`Key::from_segment`]); JSON arrays become trees keyed `0..n`.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            Json::String(s) => Value::String(s),
            Json::Array(items) => {
                let mut tree = Tree::new();
                for (i, item) in items.into_iter().enumerate() {
                    tree.insert(Key::Int(i as i64), Value::from(item));
                }
                Value::Tree(tree)
            }
            Json::Object(entries) => {
                let mut tree = Tree::new();
                for (k, v) in entries {
                    tree.insert(Key::from_segment(&k), Value::from(v));
                }
                Value::Tree(tree)
            }
        }
    }
}

/// Integer keys render as decimal strings; non-finite floats degrade to
/// `null` (JSON has no representation for them).
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(n) => Json::from(n),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::Tree(tree) => Json::Object(
                tree.into_iter()
                    .map(|(k, v)| (k.to_string(), Json::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tree(json: serde_json::Value) -> Tree {
        Value::from(json).into_tree().expect("object fixture")
    }

    #[test]
    fn json_objects_become_trees() {
        let t = tree(json!({"foo": "bar", "bim": {"bam": "boom"}}));
        assert_eq!(t.get("foo"), Some(&Value::String("bar".into())));
        assert_eq!(t.get("bim.bam"), Some(&Value::String("boom".into())));
    }

    #[test]
    fn numeric_json_keys_normalize_to_int() {
        let t = tree(json!({"1": 2}));
        assert!(t.contains_key(&Key::Int(1)));
        assert!(!t.contains_key(&Key::Str("1".into())));
    }

    #[test]
    fn json_arrays_become_integer_keyed_trees() {
        let t = tree(json!({"items": ["a", "b"]}));
        assert_eq!(t.get("items.0"), Some(&Value::String("a".into())));
        assert_eq!(t.get("items.1"), Some(&Value::String("b".into())));
        assert_eq!(t.get("items.2"), None);
    }

    #[test]
    fn get_path_empty_returns_whole_tree() {
        let v = Value::from(json!({"a": 1}));
        assert_eq!(v.get_path(""), Some(&v));
        assert_eq!(v.get_path("a"), Some(&Value::Int(1)));
    }

    #[test]
    fn get_path_on_scalar_is_none() {
        let v = Value::Int(3);
        assert_eq!(v.get_path(""), None);
        assert_eq!(v.get_path("a"), None);
    }

    #[test]
    fn round_trips_through_json() {
        let fixture = json!({
            "name": "svc",
            "enabled": true,
            "ratio": 0.5,
            "limits": {"depth": 4, "tags": ["x", "y"]}
        });
        let v = Value::from(fixture);
        let json = serde_json::Value::from(v.clone());
        assert_eq!(Value::from(json), v);
    }

    #[test]
    fn untagged_serde_matches_json_bridge() {
        let v = Value::from(json!({"a": {"b": 1}, "c": null}));
        let serialized = serde_json::to_value(&v).expect("serialize");
        let reparsed: Value = serde_json::from_value(serialized).expect("deserialize");
        assert_eq!(reparsed, v);
    }
}
