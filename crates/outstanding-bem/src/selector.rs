//! Selectors and their normalization.
//!
//! A [`Selector`] names the part of a component being rendered. It comes in
//! four shapes (block, single key, key sequence, modifier map) and is
//! reduced by [`normalize`] to a canonical [`Normalized`] pair of element
//! keys and active modifiers. Nothing downstream sees the original shape.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SelectorError;
use crate::tree::{is_modifier_key, value_kind};

/// Which part of a component a resolution targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    /// The block itself.
    #[default]
    Block,
    /// A single element key, or a modifier key when prefixed with `&`.
    Key(String),
    /// Several keys, classified one by one.
    Keys(Vec<String>),
    /// Keys toggled on or off.
    Map(ModifierMap),
}

/// An ordered mapping of element or modifier keys to whether they apply.
///
/// # Example
///
/// ```rust
/// use outstanding_bem::{resolve, ModifierMap, StyleProps, StyleTree};
///
/// let props = StyleProps::new()
///     .class_name("button")
///     .style(StyleTree::new().add("&disabled", StyleTree::new().add("opacity", 0.5)));
///
/// let disabled = true;
/// let resolved = resolve(&props, ModifierMap::new().set("&disabled", disabled));
/// assert_eq!(resolved.class_name(), Some("button button--disabled"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierMap {
    entries: IndexMap<String, bool>,
}

impl ModifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `key` applies, returning the updated map for chaining.
    pub fn set(mut self, key: &str, active: bool) -> Self {
        self.entries.insert(key.to_string(), active);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, active: bool) -> Option<bool> {
        self.entries.insert(key.into(), active)
    }

    /// Iterates over the keys that apply, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, active)| **active)
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ModifierMap {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ModifierMap {
    fn from(entries: [(&str, bool); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<&str> for Selector {
    fn from(key: &str) -> Self {
        Selector::Key(key.to_string())
    }
}

impl From<String> for Selector {
    fn from(key: String) -> Self {
        Selector::Key(key)
    }
}

impl From<Vec<String>> for Selector {
    fn from(keys: Vec<String>) -> Self {
        Selector::Keys(keys)
    }
}

impl From<Vec<&str>> for Selector {
    fn from(keys: Vec<&str>) -> Self {
        Selector::Keys(keys.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Selector {
    fn from(keys: &[&str]) -> Self {
        Selector::Keys(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Selector {
    fn from(keys: [&str; N]) -> Self {
        Selector::Keys(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl From<ModifierMap> for Selector {
    fn from(map: ModifierMap) -> Self {
        Selector::Map(map)
    }
}

impl<T: Into<Selector>> From<Option<T>> for Selector {
    fn from(selector: Option<T>) -> Self {
        selector.map_or(Selector::Block, Into::into)
    }
}

impl TryFrom<&Value> for Selector {
    type Error = SelectorError;

    /// Converts a dynamic selector.
    ///
    /// `null` is the block, a string is a key, an array must hold only
    /// strings, and an object is a modifier map whose values are tested for
    /// truthiness (`false`, `0`, `NaN`, `""` and `null` are falsy).
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Selector::Block),
            Value::String(key) => Ok(Selector::Key(key.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(key) => Ok(key.clone()),
                    other => Err(SelectorError::NonStringEntry {
                        index,
                        kind: value_kind(other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Selector::Keys),
            Value::Object(map) => Ok(Selector::Map(
                map.iter().map(|(key, v)| (key.as_str(), is_truthy(v))).collect(),
            )),
            other => Err(SelectorError::UnsupportedShape {
                kind: value_kind(other),
            }),
        }
    }
}

impl TryFrom<Value> for Selector {
    type Error = SelectorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Selector::try_from(&value)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A selector reduced to element keys and active modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Element keys in selector order. Repeats are kept.
    pub elements: Vec<String>,
    /// Active modifier keys, `&` prefix included, first occurrence order.
    pub modifiers: Vec<String>,
}

impl Normalized {
    fn push(&mut self, key: &str) {
        if is_modifier_key(key) {
            if !self.modifiers.iter().any(|m| m == key) {
                self.modifiers.push(key.to_string());
            }
        } else {
            self.elements.push(key.to_string());
        }
    }

    /// True for block resolution: no element keys selected.
    pub fn is_block(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Reduces a selector to its canonical form.
pub fn normalize(selector: &Selector) -> Normalized {
    let mut normalized = Normalized::default();
    match selector {
        Selector::Block => {}
        Selector::Key(key) => normalized.push(key),
        Selector::Keys(keys) => keys.iter().for_each(|key| normalized.push(key)),
        Selector::Map(map) => map.active().for_each(|key| normalized.push(key)),
    }
    normalized
}
