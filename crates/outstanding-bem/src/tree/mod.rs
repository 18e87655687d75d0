//! Style trees: nested, ordered style configuration.
//!
//! A [`StyleTree`] maps keys to [`StyleValue`]s. A value is either a
//! [`Primitive`] property value or another tree. The same key space holds
//! style properties (`color`), element sub-trees (`title`) and modifier
//! sub-trees (`&active`); which is which is decided when the tree is
//! resolved against a selector.
//!
//! Trees compose with [`StyleTree::merge`], a recursive merge in which
//! nested trees merge key by key and everything else is overwritten by the
//! later tree.

mod convert;
mod value;

use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub use value::{Primitive, StyleValue};

pub(crate) use convert::value_kind;

/// Prefix marking a key as a modifier.
pub const MODIFIER_PREFIX: char = '&';

/// Returns true when `key` names a modifier (`&active`).
pub fn is_modifier_key(key: &str) -> bool {
    key.starts_with(MODIFIER_PREFIX)
}

/// A nested style configuration, preserving insertion order.
///
/// # Example
///
/// ```rust
/// use outstanding_bem::StyleTree;
///
/// let tree = StyleTree::new()
///     .add("padding", 8)
///     .add("title", StyleTree::new().add("fontSize", 18))
///     .add("&featured", StyleTree::new().add("borderColor", "gold"));
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.get_tree("title").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    entries: IndexMap<String, StyleValue>,
}

impl StyleTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated tree for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Inserts an entry, returning the previous value under `key`.
    pub fn insert<V: Into<StyleValue>>(
        &mut self,
        key: impl Into<String>,
        value: V,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Returns the nested tree under `key`.
    ///
    /// Missing keys and keys holding a primitive both yield `None`.
    pub fn get_tree(&self, key: &str) -> Option<&StyleTree> {
        self.entries.get(key).and_then(StyleValue::as_tree)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the tree's own property values, skipping nested trees.
    pub fn primitives(&self) -> impl Iterator<Item = (&str, &Primitive)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_primitive().map(|p| (key.as_str(), p)))
    }

    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deep-merges `other` into this tree.
    ///
    /// When both sides hold a nested tree under the same key the trees are
    /// merged recursively. In every other case the entry from `other` wins.
    /// New keys are appended in `other`'s order.
    pub fn merge(&mut self, other: &StyleTree) {
        for (key, theirs) in &other.entries {
            match (self.entries.get_mut(key), theirs) {
                (Some(StyleValue::Nested(mine)), StyleValue::Nested(theirs)) => mine.merge(theirs),
                _ => {
                    self.entries.insert(key.clone(), theirs.clone());
                }
            }
        }
    }

    /// Consuming form of [`merge`](Self::merge).
    pub fn merged(mut self, other: &StyleTree) -> Self {
        self.merge(other);
        self
    }
}

impl<'a> IntoIterator for &'a StyleTree {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Serialize for StyleTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        StyleTree::try_from(value).map_err(de::Error::custom)
    }
}
