//! Style sheets: named component props loaded from YAML or JSON.
//!
//! A sheet maps component names to their [`StyleProps`]:
//!
//! ```yaml
//! product-card:
//!   className: product-card
//!   style:
//!     padding: 8
//!     title: { fontSize: 18 }
//!     "&featured":
//!       borderColor: gold
//!       title: { color: gold }
//! ```
//!
//! Sheets compose with [`StyleSheet::merge`]: a later sheet replaces class
//! names it sets and deep-merges its style trees over the earlier ones, so a
//! user sheet only needs to list what it overrides.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::SheetError;
use crate::styler::{StyleProps, Styler};
use crate::tree::{value_kind, StyleTree};

/// Named component style props.
///
/// # Example
///
/// ```rust
/// use outstanding_bem::StyleSheet;
///
/// let sheet = StyleSheet::from_yaml(r#"
/// card:
///   className: card
///   style:
///     title: { color: navy }
/// "#).unwrap();
///
/// let card = sheet.styler("card").unwrap();
/// assert_eq!(card.resolve("title").class_name(), Some("card__title"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    components: IndexMap<String, StyleProps>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component, returning the updated sheet for chaining.
    pub fn add(mut self, name: &str, props: StyleProps) -> Self {
        self.components.insert(name.to_string(), props);
        self
    }

    /// Parses a sheet from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, SheetError> {
        let value: Value = serde_yaml::from_str(source)?;
        let sheet = Self::from_value(value)?;
        log::debug!("loaded YAML style sheet with {} components", sheet.len());
        Ok(sheet)
    }

    /// Parses a sheet from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, SheetError> {
        let value: Value = serde_json::from_str(source)?;
        let sheet = Self::from_value(value)?;
        log::debug!("loaded JSON style sheet with {} components", sheet.len());
        Ok(sheet)
    }

    /// Reads a sheet from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("reading style sheet from {}", path.display());

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(&source),
            _ => Self::from_yaml(&source),
        }
    }

    /// Builds a sheet from an already parsed document.
    pub fn from_value(value: Value) -> Result<Self, SheetError> {
        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                return Err(SheetError::NotAMapping {
                    kind: value_kind(&other),
                })
            }
        };

        let mut components = IndexMap::with_capacity(entries.len());
        for (name, entry) in entries {
            let props = props_from_value(&name, entry)?;
            components.insert(name, props);
        }
        Ok(Self { components })
    }

    pub fn get(&self, name: &str) -> Option<&StyleProps> {
        self.components.get(name)
    }

    /// Returns a styler for the named component.
    pub fn styler(&self, name: &str) -> Option<Styler> {
        self.get(name).map(Styler::new)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Layers `other` over this sheet.
    ///
    /// Components only in `other` are added. For components in both, a
    /// class name set in `other` replaces this one and style trees are
    /// deep-merged with `other` winning.
    pub fn merge(&mut self, other: &StyleSheet) {
        for (name, theirs) in &other.components {
            let Some(mine) = self.components.get_mut(name) else {
                self.components.insert(name.clone(), theirs.clone());
                continue;
            };
            if theirs.class_name.is_some() {
                mine.class_name = theirs.class_name.clone();
            }
            match (&mut mine.style, &theirs.style) {
                (Some(style), Some(overrides)) => style.merge(overrides),
                (None, Some(overrides)) => mine.style = Some(overrides.clone()),
                (_, None) => {}
            }
        }
    }
}

fn props_from_value(name: &str, entry: Value) -> Result<StyleProps, SheetError> {
    let Value::Object(mut fields) = entry else {
        return Err(SheetError::InvalidComponent {
            component: name.to_string(),
        });
    };

    let class_name = match fields.remove("className") {
        None | Some(Value::Null) => None,
        Some(Value::String(class_name)) => Some(class_name),
        Some(_) => {
            return Err(SheetError::InvalidComponent {
                component: name.to_string(),
            })
        }
    };

    let style = match fields.remove("style") {
        None | Some(Value::Null) => None,
        Some(style) => Some(StyleTree::try_from(style).map_err(|source| SheetError::Component {
            component: name.to_string(),
            source,
        })?),
    };

    if !fields.is_empty() {
        return Err(SheetError::InvalidComponent {
            component: name.to_string(),
        });
    }

    Ok(StyleProps { class_name, style })
}

impl TryFrom<Map<String, Value>> for StyleSheet {
    type Error = SheetError;

    fn try_from(entries: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_value(Value::Object(entries))
    }
}
