//! The tree engine: dotted reads, auto-vivifying writes, deep merge, and
//! best-effort removal.

use std::collections::btree_map::{self, BTreeMap, Entry};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::key::Key;
use crate::value::Value;

/// How [`Tree::set_with`] treats an intermediate segment that already holds
/// a non-tree value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace the colliding value with an empty tree and keep descending.
    ///
    /// This is the compatibility behavior: writing `"a.b"` while `a` holds a
    /// scalar silently destroys the scalar.
    #[default]
    Overwrite,
    /// Stop at the collision and report [`WriteError::TypeConflict`].
    Reject,
}

/// Errors surfaced by the fallible write path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    /// The empty path addresses the whole tree and cannot be written to.
    #[error("empty path is not writable")]
    EmptyPath,

    /// An intermediate segment holds a non-tree value and the policy is
    /// [`WritePolicy::Reject`].
    #[error("segment `{segment}` of `{path}` holds a non-tree value")]
    TypeConflict {
        /// The full path being written.
        path: String,
        /// The segment where the collision occurred.
        segment: String,
    },
}

/// A nested mapping from [`Key`]s to [`Value`]s, addressed by dot-delimited
/// paths.
///
/// See the crate docs for path syntax and failure semantics. The caller owns
/// the tree; every method borrows it for the duration of one call only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree(BTreeMap<Key, Value>);

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Tree(BTreeMap::new())
    }

    /// Number of entries at this level (not recursive).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries at this level.
    pub fn iter(&self) -> btree_map::Iter<'_, Key, Value> {
        self.0.iter()
    }

    /// Insert a value under an atomic key at this level, returning the
    /// previous value if any.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Atomic single-key existence check. Integer keys are matched as-is,
    /// never split on dots.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.contains_key(key)
    }

    /// Walk a dotted path, returning `true` only if every segment resolved.
    ///
    /// Returns `false` the moment a segment is absent or the cursor is not a
    /// tree.
    pub fn contains_path(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Resolve a dotted path to the value it addresses.
    ///
    /// The empty path is treated as the (almost always absent) empty-string
    /// key; use [`Value::get_path`] when "empty path means the whole tree"
    /// semantics are needed.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last()?;

        let mut cursor = self;
        for segment in parents {
            cursor = cursor.0.get(&Key::from_segment(segment))?.as_tree()?;
        }
        cursor.0.get(&Key::from_segment(last))
    }

    /// Resolve a dotted path, falling back to `default` when any segment is
    /// missing. Never mutates the tree.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// Write a value at a dotted path, creating intermediate levels as
    /// needed ([`WritePolicy::Overwrite`]). The empty path is a silent
    /// no-op.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        // Overwrite never reports a conflict; only EmptyPath is swallowed.
        let _ = self.set_with(path, value.into(), WritePolicy::Overwrite);
    }

    /// Write several `(path, value)` pairs in iteration order.
    pub fn set_many<I, S, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        for (path, value) in entries {
            self.set(path.as_ref(), value);
        }
    }

    /// Write a value at a dotted path under an explicit collision policy.
    ///
    /// Missing intermediate levels are created under either policy. An
    /// intermediate that holds a non-tree value is replaced by an empty tree
    /// under [`WritePolicy::Overwrite`], or aborts the write with
    /// [`WriteError::TypeConflict`] under [`WritePolicy::Reject`] (levels
    /// auto-created before the collision remain). The final segment is
    /// assigned unconditionally, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// [`WriteError::EmptyPath`] for the empty path;
    /// [`WriteError::TypeConflict`] as described above.
    pub fn set_with(
        &mut self,
        path: &str,
        value: Value,
        policy: WritePolicy,
    ) -> Result<(), WriteError> {
        if path.is_empty() {
            return Err(WriteError::EmptyPath);
        }
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(WriteError::EmptyPath);
        };

        let mut cursor = self;
        for segment in parents {
            let slot = cursor
                .0
                .entry(Key::from_segment(segment))
                .or_insert_with(|| Value::Tree(Tree::new()));
            if !slot.is_tree() {
                if policy == WritePolicy::Reject {
                    return Err(WriteError::TypeConflict {
                        path: path.to_owned(),
                        segment: (*segment).to_owned(),
                    });
                }
                *slot = Value::Tree(Tree::new());
            }
            let Value::Tree(next) = slot else {
                // Normalised to a tree just above.
                unreachable!()
            };
            cursor = next;
        }
        cursor.0.insert(Key::from_segment(last), value);
        Ok(())
    }

    /// Recursively merge `source` into `self`.
    ///
    /// Where both sides hold trees under the same key the merge recurses
    /// (union of keys); any other pairing replaces the target value
    /// outright — scalars are never combined.
    pub fn merge(&mut self, source: Tree) {
        for (key, incoming) in source.0 {
            match self.0.entry(key) {
                Entry::Occupied(mut occupied) => match (occupied.get_mut(), incoming) {
                    (Value::Tree(target), Value::Tree(subtree)) => target.merge(subtree),
                    (slot, incoming) => *slot = incoming,
                },
                Entry::Vacant(vacant) => {
                    vacant.insert(incoming);
                }
            }
        }
    }

    /// Merge several sources left to right; the last source wins on
    /// conflicting scalar leaves.
    pub fn merge_all(&mut self, sources: impl IntoIterator<Item = Tree>) {
        for source in sources {
            self.merge(source);
        }
    }

    /// Remove the entry a dotted path addresses, best-effort.
    ///
    /// If any intermediate segment is missing or holds a non-tree value the
    /// call returns silently — deletion never errors. The final entry is
    /// removed only if it exists; the removed value is returned.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last()?;

        let mut cursor = self;
        for segment in parents {
            cursor = cursor
                .0
                .get_mut(&Key::from_segment(segment))?
                .as_tree_mut()?;
        }
        cursor.0.remove(&Key::from_segment(last))
    }

    /// Remove several paths, each best-effort; a failure to resolve one path
    /// never affects the others.
    pub fn remove_all<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            self.remove(path.as_ref());
        }
    }

    /// Remove an atomic key at this level. Integer keys are matched as-is,
    /// never split on dots.
    pub fn remove_key(&mut self, key: &Key) -> Option<Value> {
        self.0.remove(key)
    }
}

impl IntoIterator for Tree {
    type Item = (Key, Value);
    type IntoIter = btree_map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a Key, &'a Value);
    type IntoIter = btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Tree(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
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
    fn existence_and_read() {
        let t = tree(json!({"foo": "bar", "bim": {"bam": "boom"}}));

        assert!(t.contains_path("bim.bam"));
        assert!(!t.contains_path("bim.boom"));
        assert!(!t.contains_path("boom.bim"));
        assert_eq!(t.get("bim.bam"), Some(&Value::String("boom".into())));
        assert_eq!(t.get("missing"), None);
        assert_eq!(
            t.get_or("missing", &Value::String("d".into())),
            &Value::String("d".into())
        );
        assert_eq!(
            t.get_or("bim.bam", &Value::String("x".into())),
            &Value::String("boom".into())
        );
    }

    #[test]
    fn read_through_scalar_is_none() {
        let t = tree(json!({"a": 1}));
        assert_eq!(t.get("a.b"), None);
        assert!(!t.contains_path("a.b"));
    }

    #[test]
    fn integer_keys_are_atomic() {
        let t = tree(json!({"1": 2, "foo": "bar"}));
        assert!(t.contains_key(&Key::Int(1)));
        assert!(!t.contains_key(&Key::Str("baz".into())));
        assert_eq!(t.get("1"), Some(&Value::Int(2)));
    }

    #[test]
    fn set_auto_vivifies_from_empty() {
        let mut t = Tree::new();
        t.set("a.b.c", 1);
        assert_eq!(t, tree(json!({"a": {"b": {"c": 1}}})));
    }

    #[test]
    fn set_overwrites_scalar_intermediate() {
        let mut t = tree(json!({"a": 1}));
        t.set("a.b", 2);
        assert_eq!(t, tree(json!({"a": {"b": 2}})));
    }

    #[test]
    fn set_replaces_final_value() {
        let mut t = tree(json!({"a": {"b": 1}}));
        t.set("a.b", "two");
        assert_eq!(t.get("a.b"), Some(&Value::String("two".into())));
    }

    #[test]
    fn set_with_reject_reports_conflict() {
        let mut t = tree(json!({"a": 1}));
        let err = t
            .set_with("a.b.c", Value::Int(2), WritePolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            WriteError::TypeConflict {
                path: "a.b.c".into(),
                segment: "a".into(),
            }
        );
        // The colliding scalar survives.
        assert_eq!(t, tree(json!({"a": 1})));
    }

    #[test]
    fn set_with_reject_still_creates_missing_levels() {
        let mut t = Tree::new();
        t.set_with("a.b", Value::Int(1), WritePolicy::Reject)
            .expect("no collision on a fresh tree");
        assert_eq!(t, tree(json!({"a": {"b": 1}})));
    }

    #[test]
    fn empty_path_is_rejected_for_writes() {
        let mut t = Tree::new();
        t.set("", 1);
        assert!(t.is_empty());
        assert_eq!(
            t.set_with("", Value::Int(1), WritePolicy::Overwrite),
            Err(WriteError::EmptyPath)
        );
    }

    #[test]
    fn set_many_applies_each_path() {
        let mut t = Tree::new();
        t.set_many([("key1", Value::from("value1")), ("a.b.c", Value::from("d"))]);
        assert_eq!(t.get("key1"), Some(&Value::String("value1".into())));
        assert_eq!(t.get("a.b.c"), Some(&Value::String("d".into())));
    }

    #[test]
    fn merge_unions_trees_and_replaces_scalars() {
        let mut t = tree(json!({"a": 1, "b": {"x": 1}}));
        t.merge(tree(json!({"b": {"y": 2}, "c": 3})));
        assert_eq!(t, tree(json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3})));
    }

    #[test]
    fn merge_scalar_over_tree_replaces() {
        let mut t = tree(json!({"b": {"x": 1}}));
        t.merge(tree(json!({"b": 7})));
        assert_eq!(t, tree(json!({"b": 7})));
    }

    #[test]
    fn merge_tree_over_scalar_replaces() {
        let mut t = tree(json!({"b": 7}));
        t.merge(tree(json!({"b": {"x": 1}})));
        assert_eq!(t, tree(json!({"b": {"x": 1}})));
    }

    #[test]
    fn merge_all_applies_left_to_right() {
        let mut t = tree(json!({"k": 1}));
        t.merge_all([tree(json!({"k": 2, "n": {"a": 1}})), tree(json!({"k": 3}))]);
        assert_eq!(t.get("k"), Some(&Value::Int(3)));
        assert_eq!(t.get("n.a"), Some(&Value::Int(1)));
    }

    #[test]
    fn remove_is_best_effort() {
        let mut t = tree(json!({"a": {"b": 1}}));
        assert_eq!(t.remove("a.x.y"), None);
        assert_eq!(t, tree(json!({"a": {"b": 1}})));

        assert_eq!(t.remove("a.b"), Some(Value::Int(1)));
        assert_eq!(t, tree(json!({"a": {}})));
    }

    #[test]
    fn remove_through_scalar_is_a_no_op() {
        let mut t = tree(json!({"a": 1}));
        assert_eq!(t.remove("a.b.c"), None);
        assert_eq!(t, tree(json!({"a": 1})));
    }

    #[test]
    fn remove_all_continues_past_dead_paths() {
        let mut t = tree(json!({"a": {"b": 1, "c": 2}, "d": 3}));
        t.remove_all(["a.x.y", "a.b", "d"]);
        assert_eq!(t, tree(json!({"a": {"c": 2}})));
    }

    #[test]
    fn remove_key_matches_integer_keys_atomically() {
        let mut t = tree(json!({"1": "one", "a": 2}));
        assert_eq!(t.remove_key(&Key::Int(1)), Some(Value::String("one".into())));
        assert_eq!(t.remove_key(&Key::Int(1)), None);
        assert_eq!(t, tree(json!({"a": 2})));
    }
}
