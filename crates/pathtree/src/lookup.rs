//! Single-key existence checks for containers that are not literal trees.

use std::collections::{BTreeMap, HashMap};

use crate::key::Key;
use crate::tree::Tree;

/// A container that can answer "is this key present?" for a single key.
///
/// This is the seam for foreign containers: anything that exposes a has-key
/// capability can participate in existence checks without being a [`Tree`].
/// Dotted-path traversal is deliberately not part of the trait — it belongs
/// to [`Tree::contains_path`] alone, so foreign containers are only ever
/// probed with atomic keys.
pub trait KeyLookup {
    /// Returns `true` if `key` is present in the container.
    fn contains_key(&self, key: &Key) -> bool;
}

/// Check a single key against any [`KeyLookup`] container.
pub fn key_exists<C: KeyLookup + ?Sized>(container: &C, key: &Key) -> bool {
    container.contains_key(key)
}

impl KeyLookup for Tree {
    fn contains_key(&self, key: &Key) -> bool {
        Tree::contains_key(self, key)
    }
}

// String-keyed std maps: integer keys probe their decimal rendering, the
// same coercion the tree applies when parsing path segments.
impl<V> KeyLookup for HashMap<String, V> {
    fn contains_key(&self, key: &Key) -> bool {
        match key {
            Key::Str(s) => HashMap::contains_key(self, s),
            Key::Int(n) => HashMap::contains_key(self, &n.to_string()),
        }
    }
}

impl<V> KeyLookup for BTreeMap<String, V> {
    fn contains_key(&self, key: &Key) -> bool {
        match key {
            Key::Str(s) => BTreeMap::contains_key(self, s),
            Key::Int(n) => BTreeMap::contains_key(self, &n.to_string()),
        }
    }
}
