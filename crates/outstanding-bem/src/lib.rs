//! # Outstanding BEM - class names and styles for nested components
//!
//! Components receive their look from the outside: a block class name and a
//! nested style tree. While rendering, each node asks the engine for its
//! class name and its flat style, naming itself with a selector.
//!
//! ```rust
//! use outstanding_bem::{resolve, ModifierMap, StyleProps, StyleTree};
//!
//! let props = StyleProps::new().class_name("card").style(
//!     StyleTree::new()
//!         .add("padding", 8)
//!         .add("title", StyleTree::new().add("fontSize", 18).add("color", "navy"))
//!         .add(
//!             "&featured",
//!             StyleTree::new()
//!                 .add("borderColor", "gold")
//!                 .add("title", StyleTree::new().add("color", "gold")),
//!         ),
//! );
//!
//! let featured = true;
//! let root = resolve(&props, ModifierMap::new().set("&featured", featured));
//! assert_eq!(root.class_name(), Some("card card--featured"));
//!
//! let title = resolve(&props, ["title", "&featured"]);
//! assert_eq!(title.class_name(), Some("card__title"));
//! assert_eq!(title.style().get("color").map(|c| c.to_string()).as_deref(), Some("gold"));
//! ```
//!
//! ## Selectors
//!
//! | Selector                      | Meaning                                   |
//! |-------------------------------|-------------------------------------------|
//! | `Selector::Block`             | the block itself                          |
//! | `"title"`                     | one element                               |
//! | `"&featured"`                 | the block with a modifier                 |
//! | `["title", "&featured"]`      | elements and modifiers, in order          |
//! | `ModifierMap`                 | keys switched on or off by a flag         |
//!
//! Keys prefixed with `&` are modifiers, everything else is an element.
//!
//! ## Class names
//!
//! The block resolves to `block` plus one `block--modifier` per active
//! modifier. Elements resolve to one `block__element` per element and carry
//! no modifier classes. Without a block name there is no class name at all.
//!
//! ## Styles
//!
//! Layers merge from lowest to highest precedence: the bound default style,
//! the block's own properties (block resolution only), each selected
//! element's sub-tree, then each active modifier's sub-tree. See
//! [`derive_style`].
//!
//! ## Chaining
//!
//! [`scope`] and [`Styler::scope`] return a [`Scope`] whose
//! [`resolve_child`](Scope::resolve_child) resolves descendants with the
//! node's style as default and the node's class name as block name.
//!
//! ## Style sheets
//!
//! [`StyleSheet`] loads named component props from YAML or JSON, see the
//! [`sheet`] module.

pub mod class_name;
pub mod error;
pub mod selector;
pub mod sheet;
pub mod style;
pub mod styler;
pub mod tree;

pub use class_name::{derive_class_name, ELEMENT_SEPARATOR, MODIFIER_SEPARATOR};
pub use error::{SelectorError, SheetError, StyleTreeError};
pub use selector::{normalize, ModifierMap, Normalized, Selector};
pub use sheet::StyleSheet;
pub use style::{derive_style, ResolvedStyle};
pub use styler::{resolve, scope, Resolved, Scope, StyleProps, Styler};
pub use tree::{is_modifier_key, Primitive, StyleTree, StyleValue, MODIFIER_PREFIX};
