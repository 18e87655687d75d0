//! Values stored in a style tree.

use std::fmt;

use serde::{Serialize, Serializer};

use super::StyleTree;

/// A single style property value such as `12` or `"red"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Number(f64),
    Text(String),
}

impl Primitive {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Primitive::Number(n) => Some(*n),
            Primitive::Text(_) => None,
        }
    }

    /// Returns the string value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::Number(_) => None,
            Primitive::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(n) => write!(f, "{}", n),
            Primitive::Text(s) => f.write_str(s),
        }
    }
}

// Integral numbers serialize as integers so `12` does not come back as `12.0`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Primitive::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Primitive::Number(n) => serializer.serialize_f64(*n),
            Primitive::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// An entry of a [`StyleTree`]: either a property value or a nested tree.
///
/// Whether a nested tree describes an element or a modifier is decided by
/// its key and by the selector used at resolution time, not by the type.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Primitive(Primitive),
    Nested(StyleTree),
}

impl StyleValue {
    /// Returns the primitive, if this entry is one.
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            StyleValue::Primitive(p) => Some(p),
            StyleValue::Nested(_) => None,
        }
    }

    /// Returns the nested tree, if this entry is one.
    pub fn as_tree(&self) -> Option<&StyleTree> {
        match self {
            StyleValue::Primitive(_) => None,
            StyleValue::Nested(tree) => Some(tree),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Primitive(p) => p.serialize(serializer),
            StyleValue::Nested(tree) => tree.serialize(serializer),
        }
    }
}

impl From<Primitive> for StyleValue {
    fn from(value: Primitive) -> Self {
        StyleValue::Primitive(value)
    }
}

impl From<StyleTree> for StyleValue {
    fn from(value: StyleTree) -> Self {
        StyleValue::Nested(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Text(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::Text(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Primitive {
                fn from(value: $ty) -> Self {
                    Primitive::Number(value as f64)
                }
            }
        )*
    };
}

number_from!(f32, i32, i64, u32, u64);

macro_rules! style_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    StyleValue::Primitive(Primitive::from(value))
                }
            }
        )*
    };
}

style_value_from!(&str, String, f64, f32, i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_trailing_zero() {
        assert_eq!(Primitive::from(12).to_string(), "12");
        assert_eq!(Primitive::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_integral_number_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Primitive::from(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&Primitive::from(0.25)).unwrap(), "0.25");
        assert_eq!(
            serde_json::to_string(&Primitive::from("red")).unwrap(),
            "\"red\""
        );
    }

    #[test]
    fn test_accessors() {
        let num = StyleValue::from(3);
        assert_eq!(num.as_primitive().and_then(Primitive::as_number), Some(3.0));
        assert!(num.as_tree().is_none());

        let text = StyleValue::from("red");
        assert_eq!(text.as_primitive().and_then(Primitive::as_str), Some("red"));
        assert_eq!(text.as_primitive().and_then(Primitive::as_number), None);
        assert_eq!(num.as_primitive().and_then(Primitive::as_str), None);

        let nested = StyleValue::from(StyleTree::new().add("color", "red"));
        assert!(nested.as_primitive().is_none());
        assert_eq!(nested.as_tree().map(StyleTree::len), Some(1));
    }
}
