//! Resolution entry points and chaining.
//!
//! [`resolve`] is the one-shot entry point: component props plus a selector
//! in, a [`Resolved`] class name and style out.
//!
//! For nested components use a [`Styler`], the same entry point with a
//! bound default style. [`Styler::scope`] resolves a node and returns a
//! [`Scope`], which carries the result together with a child styler bound
//! to it:
//!
//! - the child's default style is the style just resolved
//! - the child's class name base is the class name just resolved
//! - the child's style tree is the merge of the sub-trees the node was
//!   resolved from, so the node's own elements and modifiers stay reachable
//!
//! ```rust
//! use outstanding_bem::{scope, Selector, StyleProps, StyleTree};
//!
//! let props = StyleProps::new().class_name("card").style(
//!     StyleTree::new().add(
//!         "header",
//!         StyleTree::new()
//!             .add("padding", 4)
//!             .add("title", StyleTree::new().add("fontSize", 18)),
//!     ),
//! );
//!
//! let header = scope(&props, "header");
//! assert_eq!(header.class_name(), Some("card__header"));
//!
//! let title = header.resolve_child("title");
//! assert_eq!(title.class_name(), Some("card__header__title"));
//! assert_eq!(title.style().len(), 2);
//!
//! // Resolving the child at its own block reproduces the parent node.
//! assert_eq!(header.resolve_child(Selector::Block).style(), header.style());
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::class_name::derive_class_name;
use crate::selector::{normalize, Normalized, Selector};
use crate::style::{derive_style, selected_layers, ResolvedStyle};
use crate::tree::StyleTree;

/// Style configuration handed to a component by its caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    /// Block name. `None` disables class names entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleTree>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block name, returning the updated props for chaining.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the style tree, returning the updated props for chaining.
    pub fn style(mut self, style: StyleTree) -> Self {
        self.style = Some(style);
        self
    }
}

/// The class name and style computed for one node.
///
/// Serializes as `{"className": ..., "style": {...}}`, omitting
/// `className` when there is none so that no class attribute is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,
    style: ResolvedStyle,
}

impl Resolved {
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// Splits into the class name and style.
    pub fn into_parts(self) -> (Option<String>, ResolvedStyle) {
        (self.class_name, self.style)
    }
}

/// Resolves `props` for the node named by `selector`.
///
/// ```rust
/// use outstanding_bem::{resolve, StyleProps, StyleTree};
///
/// let props = StyleProps::new()
///     .class_name("card")
///     .style(StyleTree::new().add("title", StyleTree::new().add("color", "navy")));
///
/// let title = resolve(&props, "title");
/// assert_eq!(title.class_name(), Some("card__title"));
/// assert_eq!(title.style().get("color").map(ToString::to_string).as_deref(), Some("navy"));
/// ```
pub fn resolve(props: &StyleProps, selector: impl Into<Selector>) -> Resolved {
    let selector = selector.into();
    resolve_normalized(
        props.class_name.as_deref(),
        props.style.as_ref(),
        None,
        &normalize(&selector),
        &selector,
    )
}

/// Resolves `props` for the node named by `selector`, keeping a child
/// [`Styler`] for its descendants.
pub fn scope(props: &StyleProps, selector: impl Into<Selector>) -> Scope {
    Styler::new(props).scope(selector)
}

fn resolve_normalized(
    base: Option<&str>,
    tree: Option<&StyleTree>,
    default_style: Option<&StyleTree>,
    normalized: &Normalized,
    selector: &Selector,
) -> Resolved {
    let class_name = derive_class_name(base, &normalized.elements, &normalized.modifiers);
    let style = derive_style(tree, &normalized.elements, &normalized.modifiers, default_style);
    log::trace!(
        "resolved {:?} against base {:?}: class {:?}, {} style properties",
        selector,
        base,
        class_name,
        style.len()
    );
    Resolved { class_name, style }
}

/// A resolution entry point with a bound class name base, style tree and
/// default style.
///
/// Stylers are immutable. Cloning one is cheap, and it can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Styler {
    class_name: Option<String>,
    style: Arc<StyleTree>,
    default_style: Arc<StyleTree>,
}

impl Styler {
    /// Creates a styler for a component's props, with no default style.
    pub fn new(props: &StyleProps) -> Self {
        Self {
            class_name: props.class_name.clone(),
            style: Arc::new(props.style.clone().unwrap_or_default()),
            default_style: Arc::default(),
        }
    }

    /// Binds `default_style` as the lowest precedence layer of every
    /// resolution through this styler.
    pub fn with_default_style(mut self, default_style: StyleTree) -> Self {
        self.default_style = Arc::new(default_style);
        self
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn style_tree(&self) -> &StyleTree {
        &self.style
    }

    pub fn default_style(&self) -> &StyleTree {
        &self.default_style
    }

    /// Resolves the node named by `selector`.
    pub fn resolve(&self, selector: impl Into<Selector>) -> Resolved {
        let selector = selector.into();
        self.resolve_selector(&normalize(&selector), &selector)
    }

    /// Resolves the node named by `selector` and binds a child styler to
    /// the result.
    pub fn scope(&self, selector: impl Into<Selector>) -> Scope {
        let selector = selector.into();
        let normalized = normalize(&selector);
        let resolved = self.resolve_selector(&normalized, &selector);

        let subtree = selected_layers(&self.style, &normalized.elements, &normalized.modifiers)
            .into_iter()
            .fold(StyleTree::new(), |acc, layer| acc.merged(layer));

        let child = Styler {
            class_name: resolved.class_name.clone(),
            style: Arc::new(subtree),
            default_style: Arc::new(StyleTree::from(resolved.style.clone())),
        };

        Scope { resolved, child }
    }

    fn resolve_selector(&self, normalized: &Normalized, selector: &Selector) -> Resolved {
        resolve_normalized(
            self.class_name.as_deref(),
            Some(self.style.as_ref()),
            Some(self.default_style.as_ref()),
            normalized,
            selector,
        )
    }
}

impl From<&StyleProps> for Styler {
    fn from(props: &StyleProps) -> Self {
        Styler::new(props)
    }
}

/// A resolved node together with the styler for its descendants.
#[derive(Debug, Clone)]
pub struct Scope {
    resolved: Resolved,
    child: Styler,
}

impl Scope {
    pub fn class_name(&self) -> Option<&str> {
        self.resolved.class_name()
    }

    pub fn style(&self) -> &ResolvedStyle {
        self.resolved.style()
    }

    pub fn resolved(&self) -> &Resolved {
        &self.resolved
    }

    pub fn into_resolved(self) -> Resolved {
        self.resolved
    }

    /// The styler bound to this node, for resolving its descendants.
    pub fn styler(&self) -> &Styler {
        &self.child
    }

    /// Resolves a descendant and keeps chaining.
    pub fn resolve_child(&self, selector: impl Into<Selector>) -> Scope {
        self.child.scope(selector)
    }
}
