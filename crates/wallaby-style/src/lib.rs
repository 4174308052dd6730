//! Style-prop to inline CSS conversion for the Wallaby style mapper.
//!
//! # Scope
//!
//! A renderer node's `style` prop arrives as a JavaScript-like style record,
//! or a nested list of records with `null` placeholders. This crate turns it
//! into a single inline CSS string:
//!
//! 1. **Merge** ([`merge_styles`]) - flatten the input, last write wins
//! 2. **Transform expansion** ([`expand_transform`]) - `transform: [{ translateX: 10 }]`
//!    becomes `transform: "translateX(10px)"`
//! 3. **Case conversion** ([`convert_to_kebab_case`]) - `backgroundColor` becomes
//!    `background-color`
//! 4. **Unit conversion** ([`convert_to_px`]) - bare numbers become pixel lengths,
//!    except under `flex`
//! 5. **Serialization** ([`to_inline_style`]) - `key: value` pairs joined by `"; "`
//!
//! [`map_style_prop`] runs the whole pipeline on a [`Node`]; the `try_*`
//! variants validate the input first and report a [`StyleError`] instead of
//! falling back.
//!
//! # Not Supported
//!
//! - Units other than `px`
//! - Checking that keys are real CSS properties
//! - Parsing existing CSS strings (an inline `style` string is left as-is)

/// Kebab-case key conversion.
pub mod case;
/// Validation errors.
pub mod error;
/// Style list merging.
pub mod merge;
/// Renderer nodes.
pub mod node;
/// Inline CSS serialization.
pub mod serialize;
/// `transform` descriptor expansion.
pub mod transform;
/// Pixel unit conversion.
pub mod units;
/// Strict input validation.
pub mod validate;
/// Style values and records.
pub mod value;

pub use case::{convert_to_kebab_case, kebab_case};
pub use error::StyleError;
pub use merge::merge_styles;
pub use node::{Child, Node, Props, Style, parse_node};
pub use serialize::to_inline_style;
pub use transform::{TRANSFORM_KEY, expand_transform, transform_functions};
pub use units::{PX_UNIT, UNITLESS_KEY, convert_to_px, px_length};
pub use validate::validate_style_input;
pub use value::{StyleInput, StyleRecord, StyleValue, format_number};

use std::convert::Infallible;

#[cfg(feature = "pipeline-trace")]
fn trace_stage(stage: &str, style: &StyleRecord) {
    eprintln!("[PIPELINE] {stage}: {style:?}");
}

#[cfg(not(feature = "pipeline-trace"))]
#[inline]
const fn trace_stage(_stage: &str, _style: &StyleRecord) {}

/// Run a raw style input through every stage and return the inline CSS.
///
/// The stage order matters: transform expansion looks for the literal key
/// `transform`, so it runs before keys are rewritten to kebab-case.
#[must_use]
pub fn compute_inline_style(input: StyleInput) -> String {
    let style = merge_styles(input);
    trace_stage("merge", &style);

    let style = expand_transform(style);
    trace_stage("transform", &style);

    let style = convert_to_kebab_case(style);
    trace_stage("kebab-case", &style);

    let style = convert_to_px(style);
    trace_stage("px", &style);

    to_inline_style(&style)
}

/// [`compute_inline_style`], rejecting malformed input instead of falling back.
///
/// # Errors
///
/// Returns the [`StyleError`] from [`validate_style_input`].
pub fn try_compute_inline_style(input: StyleInput) -> Result<String, StyleError> {
    validate_style_input(&input)?;
    Ok(compute_inline_style(input))
}

/// Replace a node's raw style with the result of `convert`.
///
/// Nodes without props, without a style, with a falsy style, or with an
/// already-inline style are returned untouched.
fn replace_style<E>(
    mut node: Node,
    convert: impl FnOnce(StyleInput) -> Result<String, E>,
) -> Result<Node, E> {
    let Some(props) = node.props.as_mut() else {
        return Ok(node);
    };

    match props.style.take() {
        Some(style) if style.is_falsy() => props.style = Some(style),
        Some(Style::Raw(input)) => props.style = Some(Style::Inline(convert(input)?)),
        unchanged => props.style = unchanged,
    }
    Ok(node)
}

/// Convert `node.props.style` into an inline CSS string.
///
/// A node without a style is returned unchanged. Otherwise the style runs
/// through [`compute_inline_style`] and replaces the old value; the node's
/// other fields and props are moved over as they are.
///
/// ```
/// use wallaby_style::{Node, StyleInput, map_style_prop, style_record};
///
/// let node = Node::new("View").with_style(StyleInput::List(vec![
///     style_record! { "flex" => 1 }.into(),
///     style_record! {
///         "backgroundColor" => "white",
///         "transform" => vec![style_record! { "translateX" => 5 }],
///     }
///     .into(),
/// ]));
///
/// let node = map_style_prop(node);
/// assert_eq!(
///     node.style().and_then(|style| style.as_inline()),
///     Some("flex: 1; background-color: white; transform: translateX(5px)")
/// );
/// ```
#[must_use]
pub fn map_style_prop(node: Node) -> Node {
    let Ok(node) = replace_style(node, |input| {
        Ok::<_, Infallible>(compute_inline_style(input))
    });
    node
}

/// [`map_style_prop`], rejecting malformed input instead of falling back.
///
/// # Errors
///
/// Returns the [`StyleError`] from [`validate_style_input`].
pub fn try_map_style_prop(node: Node) -> Result<Node, StyleError> {
    replace_style(node, try_compute_inline_style)
}

/// Apply [`map_style_prop`] to `node` and every descendant, depth first.
#[must_use]
pub fn map_style_tree(node: Node) -> Node {
    let mut node = map_style_prop(node);
    node.children = node
        .children
        .into_iter()
        .map(|child| match child {
            Child::Node(inner) => Child::Node(Box::new(map_style_tree(*inner))),
            text @ Child::Text(_) => text,
        })
        .collect();
    node
}

/// [`map_style_tree`], stopping at the first malformed style.
///
/// # Errors
///
/// Returns the first [`StyleError`] found, in depth-first order.
pub fn try_map_style_tree(node: Node) -> Result<Node, StyleError> {
    let mut node = try_map_style_prop(node)?;
    node.children = node
        .children
        .into_iter()
        .map(|child| match child {
            Child::Node(inner) => Ok(Child::Node(Box::new(try_map_style_tree(*inner)?))),
            text @ Child::Text(_) => Ok(text),
        })
        .collect::<Result<_, StyleError>>()?;
    Ok(node)
}
