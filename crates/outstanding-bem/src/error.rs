//! Errors raised at the dynamic boundaries of the engine.
//!
//! Resolution itself never fails. These errors come from converting
//! untyped documents (JSON values, YAML files) into selectors, style trees
//! and style sheets.

use std::path::PathBuf;

use thiserror::Error;

/// A dynamic selector value did not have one of the supported shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The value is neither null, a string, an array of strings nor an object.
    #[error("unsupported selector shape: expected null, string, array or object, found {kind}")]
    UnsupportedShape { kind: &'static str },
    /// An array selector contained something other than a string.
    #[error("selector entry {index} is {kind}, expected a string")]
    NonStringEntry { index: usize, kind: &'static str },
}

/// A document could not be turned into a [`StyleTree`](crate::StyleTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleTreeError {
    /// The root of a style tree must be a mapping.
    #[error("style tree must be a mapping, found {kind}")]
    NotAMapping { kind: &'static str },
    /// A value that cannot appear in a style tree (array or boolean).
    #[error("unsupported {kind} value at '{path}'")]
    UnsupportedValue { path: String, kind: &'static str },
}

/// Errors from loading a [`StyleSheet`](crate::StyleSheet).
#[derive(Debug, Error)]
pub enum SheetError {
    /// The sheet file could not be read.
    #[error("failed to read style sheet '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid YAML.
    #[error("invalid YAML style sheet: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The document is not valid JSON.
    #[error("invalid JSON style sheet: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed but a component entry is malformed.
    #[error("component '{component}': {source}")]
    Component {
        component: String,
        #[source]
        source: StyleTreeError,
    },
    /// A component entry is not a mapping of `className`/`style`.
    #[error("component '{component}' must be a mapping with 'className' and/or 'style'")]
    InvalidComponent { component: String },
    /// The document root is not a mapping of component names.
    #[error("style sheet must be a mapping of component names, found {kind}")]
    NotAMapping { kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_shape_display() {
        let err = SelectorError::UnsupportedShape { kind: "number" };
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_non_string_entry_display() {
        let err = SelectorError::NonStringEntry {
            index: 2,
            kind: "object",
        };
        let msg = err.to_string();
        assert!(msg.contains("entry 2"));
        assert!(msg.contains("object"));
    }

    #[test]
    fn test_unsupported_value_display_includes_path() {
        let err = StyleTreeError::UnsupportedValue {
            path: "title.margin".to_string(),
            kind: "array",
        };
        assert_eq!(err.to_string(), "unsupported array value at 'title.margin'");
    }

    #[test]
    fn test_component_error_wraps_tree_error() {
        let err = SheetError::Component {
            component: "card".to_string(),
            source: StyleTreeError::NotAMapping { kind: "string" },
        };
        let msg = err.to_string();
        assert!(msg.contains("card"));
        assert!(msg.contains("string"));
    }
}
