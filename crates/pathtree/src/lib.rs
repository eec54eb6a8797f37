//! Dot-path access to nested key-value trees.
//!
//! A [`Tree`] is a recursively nested mapping from [`Key`]s (integer or
//! string) to [`Value`]s, where a value is either a scalar or another tree.
//! Locations inside a tree are addressed with dot-delimited path strings:
//!
//! ```
//! use pathtree::{Tree, Value};
//!
//! let mut tree = Tree::new();
//! tree.set("server.listen.port", Value::Int(8443));
//!
//! assert_eq!(tree.get("server.listen.port"), Some(&Value::Int(8443)));
//! assert!(tree.contains_path("server.listen"));
//!
//! let removed = tree.remove("server.listen.port");
//! assert_eq!(removed, Some(Value::Int(8443)));
//! assert_eq!(tree.get("server.listen.port"), None);
//! ```
//!
//! # Path syntax
//!
//! Paths are split on `'.'` with no escaping mechanism: a literal key that
//! itself contains a dot cannot be addressed through the path interface.
//! Integer keys bypass path splitting entirely and are matched atomically
//! through the [`Key`]-taking methods.
//!
//! # Failure semantics
//!
//! Reads and removals never error. A missing path reads back as `None` (or
//! the caller-supplied default) and removal of a missing path is a silent
//! no-op, aborting that path only. The single fallible surface is
//! [`Tree::set_with`] under [`WritePolicy::Reject`].
//!
//! # Module invariants
//!
//! - **No interior mutability, no I/O.** Every operation borrows the tree
//!   passed by the caller and returns before the call ends; sharing a tree
//!   across threads is the caller's concern.
//! - Trees are acyclic: they are built top-down from literals, JSON values,
//!   or merges.

pub mod key;
pub mod lookup;
pub mod tree;
pub mod value;

pub use key::Key;
pub use lookup::{key_exists, KeyLookup};
pub use tree::{Tree, WriteError, WritePolicy};
pub use value::Value;
