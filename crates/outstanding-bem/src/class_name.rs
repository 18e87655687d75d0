//! BEM class name derivation.

use crate::tree::MODIFIER_PREFIX;

/// Separator between a block and an element: `card__title`.
pub const ELEMENT_SEPARATOR: &str = "__";

/// Separator between a block and a modifier: `card--featured`.
pub const MODIFIER_SEPARATOR: &str = "--";

/// Computes the class name for a node.
///
/// Without a `base` there is no class name at all (`None`, not an empty
/// string). For block resolution (no elements) the result is the base
/// followed by one `base--modifier` token per modifier. Otherwise it is one
/// `base__element` token per element in order, and modifiers contribute
/// nothing: an element that needs a modifier class resolves it through its
/// own chained call.
///
/// # Example
///
/// ```rust
/// use outstanding_bem::derive_class_name;
///
/// let none: [&str; 0] = [];
/// assert_eq!(
///     derive_class_name(Some("card"), &none, &["&featured"]).as_deref(),
///     Some("card card--featured")
/// );
/// assert_eq!(
///     derive_class_name(Some("card"), &["title", "body"], &["&featured"]).as_deref(),
///     Some("card__title card__body")
/// );
/// assert_eq!(derive_class_name(None, &["title"], &none), None);
/// ```
pub fn derive_class_name<E, M>(
    base: Option<&str>,
    elements: &[E],
    modifiers: &[M],
) -> Option<String>
where
    E: AsRef<str>,
    M: AsRef<str>,
{
    let base = base?;

    let tokens: Vec<String> = if elements.is_empty() {
        std::iter::once(base.to_string())
            .chain(modifiers.iter().map(|modifier| {
                let name = modifier.as_ref();
                let name = name.strip_prefix(MODIFIER_PREFIX).unwrap_or(name);
                format!("{}{}{}", base, MODIFIER_SEPARATOR, name)
            }))
            .collect()
    } else {
        elements
            .iter()
            .map(|element| format!("{}{}{}", base, ELEMENT_SEPARATOR, element.as_ref()))
            .collect()
    };

    Some(tokens.join(" "))
}
