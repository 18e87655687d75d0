//! Snapshot tests for the class name ordering and attribute output.
//!
//! Consumers snapshot the rendered attributes, so token order and the shape
//! of the serialized output are part of the contract.

use insta::assert_snapshot;
use outstanding_bem::{
    derive_class_name, resolve, scope, ModifierMap, Resolved, Selector, StyleProps, StyleTree,
};

fn product_card() -> StyleProps {
    StyleProps::new().class_name("product-card").style(
        StyleTree::new()
            .add("display", "flex")
            .add("padding", 8)
            .add("title", StyleTree::new().add("fontSize", 18).add("color", "#222"))
            .add(
                "price",
                StyleTree::new()
                    .add("fontWeight", "bold")
                    .add("&sale", StyleTree::new().add("color", "crimson")),
            )
            .add(
                "&featured",
                StyleTree::new()
                    .add("borderColor", "gold")
                    .add("title", StyleTree::new().add("color", "goldenrod")),
            )
            .add("&disabled", StyleTree::new().add("opacity", 0.5)),
    )
}

fn attributes(resolved: &Resolved) -> String {
    serde_json::to_string(resolved).unwrap()
}

#[test]
fn test_class_name_token_order() {
    let none: [&str; 0] = [];
    assert_snapshot!(
        derive_class_name(Some("block"), &["x", "y"], &["&mod"]).unwrap(),
        @"block__x block__y"
    );
    assert_snapshot!(
        derive_class_name(Some("block"), &none, &["&disabled"]).unwrap(),
        @"block block--disabled"
    );
}

#[test]
fn test_block_attributes() {
    assert_snapshot!(
        attributes(&resolve(&product_card(), Selector::Block)),
        @r#"{"className":"product-card","style":{"display":"flex","padding":8}}"#
    );
}

#[test]
fn test_block_with_modifiers_attributes() {
    let selector = ModifierMap::new()
        .set("&featured", true)
        .set("&disabled", true)
        .set("&sale", false);
    assert_snapshot!(
        attributes(&resolve(&product_card(), selector)),
        @r#"{"className":"product-card product-card--featured product-card--disabled","style":{"display":"flex","padding":8,"borderColor":"gold","opacity":0.5}}"#
    );
}

#[test]
fn test_element_with_modifier_attributes() {
    assert_snapshot!(
        attributes(&resolve(&product_card(), ["title", "&featured"])),
        @r##"{"className":"product-card__title","style":{"fontSize":18,"color":"goldenrod"}}"##
    );
}

#[test]
fn test_chained_element_modifier_attributes() {
    let price = scope(&product_card(), "price").resolve_child("&sale");
    assert_snapshot!(
        attributes(price.resolved()),
        @r#"{"className":"product-card__price product-card__price--sale","style":{"fontWeight":"bold","color":"crimson"}}"#
    );
}

#[test]
fn test_no_class_name_attribute_without_base() {
    let props = StyleProps::new().style(StyleTree::new().add("margin", 0));
    assert_snapshot!(attributes(&resolve(&props, "&disabled")), @r#"{"style":{"margin":0}}"#);
}
