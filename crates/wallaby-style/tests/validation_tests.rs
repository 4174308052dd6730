//! Integration tests for the validating entry points.

use serde_json::json;
use wallaby_style::{
    Node, Style, StyleError, StyleInput, map_style_prop, style_record, try_compute_inline_style,
    try_map_style_prop, try_map_style_tree,
};

#[test]
fn test_valid_input_matches_permissive_result() {
    let style = StyleInput::List(vec![
        StyleInput::Record(style_record! { "flex" => 1 }),
        StyleInput::Record(style_record! {
            "transform" => vec![style_record! { "translateX" => 10 }],
        }),
    ]);
    let node = Node::new("View").with_style(style.clone());

    let strict = try_map_style_prop(node.clone()).unwrap();
    assert_eq!(strict, map_style_prop(node));
    assert_eq!(
        try_compute_inline_style(style).unwrap(),
        "flex: 1; transform: translateX(10px)"
    );
}

#[test]
fn test_strict_rejects_multi_key_descriptor() {
    let node = Node::new("View").with_style(style_record! {
        "transform" => vec![style_record! { "translateX" => 1, "translateY" => 2 }],
    });
    let err = try_map_style_prop(node).unwrap_err();
    assert!(matches!(err, StyleError::TransformDescriptor { index: 0, functions: 2 }));
}

#[test]
fn test_permissive_renders_multi_key_descriptor() {
    let node = Node::new("View").with_style(style_record! {
        "transform" => vec![style_record! { "translateX" => 1, "translateY" => 2 }],
    });
    let mapped = map_style_prop(node);
    assert_eq!(
        mapped.style().and_then(Style::as_inline),
        Some("transform: translateX(1px) translateY(2px)")
    );
}

#[test]
fn test_strict_rejects_overridden_bad_entry() {
    // The bad value would be overridden when merged, but validation sees it.
    let style = StyleInput::List(vec![
        StyleInput::Record(style_record! { "width" => f64::NAN }),
        StyleInput::Record(style_record! { "width" => 10 }),
    ]);
    assert!(matches!(
        try_compute_inline_style(style),
        Err(StyleError::NonFiniteNumber { key }) if key == "width"
    ));
}

#[test]
fn test_strict_passes_nodes_without_style() {
    let node = Node::new("View").with_prop("testID", json!("x"));
    assert_eq!(try_map_style_prop(node.clone()).unwrap(), node);
}

#[test]
fn test_strict_tree_reports_nested_error() {
    let node = Node::new("View")
        .with_style(style_record! { "flex" => 1 })
        .with_child(Node::new("Text").with_style(style_record! {
            "shadowOffset" => vec![style_record! { "width" => 1 }],
        }));
    let err = try_map_style_tree(node).unwrap_err();
    assert!(matches!(&err, StyleError::UnexpectedList { key } if key == "shadowOffset"));
    assert!(err.to_string().starts_with("malformed style input"));
}
