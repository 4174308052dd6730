//! Expansion of `transform` descriptor lists into CSS transform functions.
//!
//! `transform: [{ translateX: 10 }, { translateY: "10%" }]` becomes
//! `transform: "translateX(10px) translateY(10%)"`.

use wallaby_common::warning::warn_once;

use crate::units::convert_to_px;
use crate::value::{StyleRecord, StyleValue};

/// The reserved key whose list value holds transform descriptors.
pub const TRANSFORM_KEY: &str = "transform";

/// Component name used for pipeline warnings.
pub(crate) const WARNING_COMPONENT: &str = "style";

/// Warning for a `transform` that is not a list. The value is left out so
/// distinct inline transforms share one entry in the warning set.
const NON_LIST_TRANSFORM: &str = "`transform` is not a list; passing it through";

/// Render one descriptor's entries as `name(argument)`, space separated.
fn render_functions(descriptor: &StyleRecord) -> String {
    descriptor
        .iter()
        .map(|(name, argument)| format!("{name}({argument})"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render descriptors verbatim, without unit conversion.
pub(crate) fn render_descriptors(descriptors: &[StyleRecord]) -> String {
    descriptors
        .iter()
        .map(render_functions)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the CSS `transform` value from a descriptor list.
///
/// Each descriptor is unit-converted first, so `{ translateX: 10 }` renders
/// as `translateX(10px)` while `{ translateY: "10%" }` stays `translateY(10%)`.
/// Descriptors are expected to hold exactly one function; any other count
/// is rendered anyway (all entries, or nothing for an empty one) and warned
/// about.
#[must_use]
pub fn transform_functions(descriptors: Vec<StyleRecord>) -> String {
    descriptors
        .into_iter()
        .enumerate()
        .map(|(index, descriptor)| {
            if descriptor.len() != 1 {
                warn_once(
                    WARNING_COMPONENT,
                    &format!(
                        "transform descriptor {index} has {} functions, expected exactly one",
                        descriptor.len()
                    ),
                );
            }
            render_functions(&convert_to_px(descriptor))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace a list-valued `transform` entry with its CSS function string.
///
/// Every other key passes through unchanged, and so does a `transform` that
/// is not a list. Lists under other keys are left for serialization, which
/// renders them in the same function syntax.
#[must_use]
pub fn expand_transform(style: StyleRecord) -> StyleRecord {
    style
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                StyleValue::List(descriptors) if key == TRANSFORM_KEY => {
                    StyleValue::String(transform_functions(descriptors))
                }
                list @ StyleValue::List(_) => {
                    warn_once(
                        WARNING_COMPONENT,
                        &format!("`{key}` holds a list; only `{TRANSFORM_KEY}` expects one"),
                    );
                    list
                }
                other if key == TRANSFORM_KEY => {
                    warn_once(WARNING_COMPONENT, NON_LIST_TRANSFORM);
                    other
                }
                other => other,
            };
            (key, value)
        })
        .collect()
}
