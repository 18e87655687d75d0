//! Conversion from untyped documents into style trees.

use serde_json::{Map, Value};

use super::{Primitive, StyleTree, StyleValue};
use crate::error::StyleTreeError;

/// Short human name for the shape of a JSON value, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for StyleTree {
    type Error = StyleTreeError;

    /// Converts a JSON object into a style tree.
    ///
    /// Null entries are skipped. Arrays and booleans have no meaning as
    /// style values and are rejected with the dotted path of the entry.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => tree_from_map(map, ""),
            other => Err(StyleTreeError::NotAMapping {
                kind: value_kind(&other),
            }),
        }
    }
}

fn tree_from_map(map: Map<String, Value>, prefix: &str) -> Result<StyleTree, StyleTreeError> {
    let mut tree = StyleTree::new();
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        let entry = match value {
            Value::Null => continue,
            Value::String(s) => StyleValue::Primitive(Primitive::Text(s)),
            Value::Number(n) => match n.as_f64() {
                Some(n) => StyleValue::Primitive(Primitive::Number(n)),
                None => {
                    return Err(StyleTreeError::UnsupportedValue {
                        path,
                        kind: "number",
                    })
                }
            },
            Value::Object(nested) => StyleValue::Nested(tree_from_map(nested, &path)?),
            other => {
                return Err(StyleTreeError::UnsupportedValue {
                    path,
                    kind: value_kind(&other),
                })
            }
        };
        tree.insert(key, entry);
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_converts_nested_object() {
        let tree = StyleTree::try_from(json!({
            "padding": 4,
            "title": { "color": "red" },
            "&active": { "padding": 6 }
        }))
        .unwrap();

        assert_eq!(tree.get("padding"), Some(&StyleValue::from(4)));
        assert_eq!(
            tree.get_tree("title").and_then(|t| t.get("color")),
            Some(&StyleValue::from("red"))
        );
        assert!(tree.get_tree("&active").is_some());
    }

    #[test]
    fn test_null_entries_are_skipped() {
        let tree = StyleTree::try_from(json!({ "color": null, "margin": 0 })).unwrap();
        assert!(!tree.contains_key("color"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = StyleTree::try_from(json!("red")).unwrap_err();
        assert_eq!(err, StyleTreeError::NotAMapping { kind: "string" });
    }

    #[test]
    fn test_rejects_array_with_path() {
        let err = StyleTree::try_from(json!({ "title": { "&hot": { "margin": [1, 2] } } }))
            .unwrap_err();
        assert_eq!(
            err,
            StyleTreeError::UnsupportedValue {
                path: "title.&hot.margin".to_string(),
                kind: "array",
            }
        );
    }

    #[test]
    fn test_rejects_boolean() {
        let err = StyleTree::try_from(json!({ "visible": true })).unwrap_err();
        assert_eq!(
            err,
            StyleTreeError::UnsupportedValue {
                path: "visible".to_string(),
                kind: "boolean",
            }
        );
    }
}
