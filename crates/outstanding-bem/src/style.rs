//! Style derivation: layering a style tree into a flat style mapping.
//!
//! Layers apply from lowest to highest precedence:
//!
//! 1. the default style bound by chaining
//! 2. the tree's own properties (block resolution only)
//! 3. the sub-tree of each selected element, in selector order
//! 4. the sub-tree of each active modifier, in activation order; for
//!    element resolution the modifier's sub-tree for each element
//!
//! Each layer contributes only its own property values. Nested trees are
//! never copied into the result.

use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::Serialize;

use crate::tree::{Primitive, StyleTree, StyleValue};

/// A flat style mapping ready to apply to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    properties: IndexMap<String, Primitive>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&Primitive> {
        self.properties.get(property)
    }

    pub fn iter(&self) -> Iter<'_, String, Primitive> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Overwrites properties with the primitive entries of `layer`.
    fn apply(&mut self, layer: &StyleTree) {
        for (property, value) in layer.primitives() {
            self.properties.insert(property.to_string(), value.clone());
        }
    }
}

impl<'a> IntoIterator for &'a ResolvedStyle {
    type Item = (&'a String, &'a Primitive);
    type IntoIter = Iter<'a, String, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl From<ResolvedStyle> for StyleTree {
    fn from(style: ResolvedStyle) -> Self {
        style
            .properties
            .into_iter()
            .map(|(property, value)| (property, StyleValue::Primitive(value)))
            .collect()
    }
}

/// Picks the sub-trees of `tree` that take part in a resolution, lowest
/// precedence first. Chaining builds a child's tree from these same layers.
pub(crate) fn selected_layers<'a, E, M>(
    tree: &'a StyleTree,
    elements: &[E],
    modifiers: &[M],
) -> Vec<&'a StyleTree>
where
    E: AsRef<str>,
    M: AsRef<str>,
{
    let mut layers = Vec::new();

    if elements.is_empty() {
        layers.push(tree);
        layers.extend(modifiers.iter().filter_map(|m| tree.get_tree(m.as_ref())));
    } else {
        layers.extend(elements.iter().filter_map(|e| tree.get_tree(e.as_ref())));
        for modifier in modifiers {
            if let Some(scoped) = tree.get_tree(modifier.as_ref()) {
                layers.extend(elements.iter().filter_map(|e| scoped.get_tree(e.as_ref())));
            }
        }
    }

    layers
}

/// Computes the flat style for a node.
///
/// A missing `tree` or `default_style` counts as empty; selected keys that
/// are missing, or that hold a plain value instead of a sub-tree, are
/// skipped.
///
/// # Example
///
/// ```rust
/// use outstanding_bem::{derive_style, Primitive, StyleTree};
///
/// let tree = StyleTree::new()
///     .add("title", StyleTree::new().add("color", "black").add("fontSize", 18))
///     .add("&featured", StyleTree::new().add("title", StyleTree::new().add("color", "gold")));
///
/// let style = derive_style(Some(&tree), &["title"], &["&featured"], None);
/// assert_eq!(style.get("color"), Some(&Primitive::from("gold")));
/// assert_eq!(style.get("fontSize"), Some(&Primitive::from(18)));
/// ```
pub fn derive_style<E, M>(
    tree: Option<&StyleTree>,
    elements: &[E],
    modifiers: &[M],
    default_style: Option<&StyleTree>,
) -> ResolvedStyle
where
    E: AsRef<str>,
    M: AsRef<str>,
{
    let mut style = ResolvedStyle::new();
    if let Some(default_style) = default_style {
        style.apply(default_style);
    }
    if let Some(tree) = tree {
        for layer in selected_layers(tree, elements, modifiers) {
            style.apply(layer);
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn card() -> StyleTree {
        StyleTree::new()
            .add("padding", 8)
            .add("color", "black")
            .add("title", StyleTree::new().add("color", "navy").add("fontSize", 18))
            .add("body", StyleTree::new().add("color", "gray").add("lineHeight", 1.4))
            .add(
                "&featured",
                StyleTree::new()
                    .add("color", "gold")
                    .add("title", StyleTree::new().add("color", "orange")),
            )
            .add("&compact", StyleTree::new().add("padding", 2).add("color", "teal"))
    }

    fn text(s: &str) -> Option<Primitive> {
        Some(Primitive::from(s))
    }

    #[test]
    fn test_block_takes_own_primitives_only() {
        let style = derive_style(Some(&card()), &NONE, &NONE, None);
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("padding"), Some(&Primitive::from(8)));
        assert!(style.get("title").is_none());
    }

    #[test]
    fn test_element_does_not_inherit_block_properties() {
        let style = derive_style(Some(&card()), &["title"], &NONE, None);
        assert_eq!(style.get("color").cloned(), text("navy"));
        assert!(style.get("padding").is_none());
    }

    #[test]
    fn test_later_element_wins() {
        let style = derive_style(Some(&card()), &["title", "body"], &NONE, None);
        assert_eq!(style.get("color").cloned(), text("gray"));
        assert_eq!(style.get("fontSize"), Some(&Primitive::from(18)));

        let style = derive_style(Some(&card()), &["body", "title"], &NONE, None);
        assert_eq!(style.get("color").cloned(), text("navy"));
    }

    #[test]
    fn test_block_modifier_overrides_block() {
        let style = derive_style(Some(&card()), &NONE, &["&featured"], None);
        assert_eq!(style.get("color").cloned(), text("gold"));
        assert_eq!(style.get("padding"), Some(&Primitive::from(8)));
    }

    #[test]
    fn test_later_modifier_wins() {
        let style = derive_style(Some(&card()), &NONE, &["&featured", "&compact"], None);
        assert_eq!(style.get("color").cloned(), text("teal"));

        let style = derive_style(Some(&card()), &NONE, &["&compact", "&featured"], None);
        assert_eq!(style.get("color").cloned(), text("gold"));
        assert_eq!(style.get("padding"), Some(&Primitive::from(2)));
    }

    #[test]
    fn test_element_modifier_uses_scoped_subtree() {
        let style = derive_style(Some(&card()), &["title"], &["&featured"], None);
        assert_eq!(style.get("color").cloned(), text("orange"));

        // &compact has no title sub-tree, so its block values stay out
        let style = derive_style(Some(&card()), &["title"], &["&compact"], None);
        assert_eq!(style.get("color").cloned(), text("navy"));
        assert!(style.get("padding").is_none());
    }

    #[test]
    fn test_default_is_lowest_layer() {
        let default = StyleTree::new().add("color", "red").add("margin", 4);
        let style = derive_style(Some(&card()), &["title"], &NONE, Some(&default));
        assert_eq!(style.get("color").cloned(), text("navy"));
        assert_eq!(style.get("margin"), Some(&Primitive::from(4)));
    }

    #[test]
    fn test_nested_default_entries_are_ignored() {
        let default = StyleTree::new().add("title", StyleTree::new().add("color", "red"));
        let style = derive_style(None, &NONE, &NONE, Some(&default));
        assert!(style.is_empty());
    }

    #[test]
    fn test_missing_inputs_resolve_empty() {
        assert!(derive_style(None, &["title"], &["&x"], None).is_empty());
        assert!(derive_style(Some(&card()), &["missing"], &NONE, None).is_empty());
        // a key holding a plain value is not an element
        assert!(derive_style(Some(&card()), &["color"], &NONE, None).is_empty());
    }

    #[test]
    fn test_resolved_style_into_tree() {
        let style = derive_style(Some(&card()), &NONE, &NONE, None);
        let tree = StyleTree::from(style);
        assert_eq!(tree, StyleTree::new().add("padding", 8).add("color", "black"));
    }

    #[test]
    fn test_serializes_flat() {
        let style = derive_style(Some(&card()), &["body"], &NONE, None);
        assert_eq!(
            serde_json::to_string(&style).unwrap(),
            r#"{"color":"gray","lineHeight":1.4}"#
        );
    }
}
