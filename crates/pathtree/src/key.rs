//! Integer/string map keys with numeric-segment normalization.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A single tree key: either an integer or a string.
///
/// Keys that are canonical decimal integers coalesce to [`Key::Int`] so that
/// the path segment `"1"` and the integer key `1` address the same slot.
/// "Canonical" means the text round-trips through `i64` formatting: `"01"`,
/// `"+1"`, and `" 1"` all stay string keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Integer key, matched atomically (never split on dots).
    Int(i64),
    /// String key.
    Str(String),
}

impl Key {
    /// Build a key from one path segment, normalizing canonical decimal
    /// integers to [`Key::Int`].
    pub fn from_segment(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(n) if n.to_string() == segment => Key::Int(n),
            _ => Key::Str(segment.to_owned()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::from_segment(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::from_segment(&s)
    }
}

// Keys serialize as strings so a tree is representable as a plain JSON
// object; integer keys render in decimal and are recovered on the way back
// in via `from_segment`.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> de::Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer map key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
                Ok(Key::from_segment(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
                Ok(Key::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
                i64::try_from(v)
                    .map(Key::Int)
                    .map_err(|_| E::custom("integer key out of i64 range"))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
