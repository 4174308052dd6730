//! Numeric-to-length conversion.
//!
//! Only pixels are produced. A bare number is always read as a pixel count,
//! except under `flex`, which is a unitless factor.

use crate::value::{StyleRecord, StyleValue, format_number};

/// The one key whose numeric value never gains a unit.
pub const UNITLESS_KEY: &str = "flex";

/// The length unit appended to bare numbers.
pub const PX_UNIT: &str = "px";

/// Render `n` as a pixel length (`10` → `"10px"`).
#[must_use]
pub fn px_length(n: f64) -> String {
    format!("{}{PX_UNIT}", format_number(n))
}

/// Append `px` to every numeric value whose key is not `flex`.
///
/// Strings pass through untouched whatever their key, as do transform lists.
/// Zero and negative numbers convert like any other (`0px`, `-5px`).
#[must_use]
pub fn convert_to_px(style: StyleRecord) -> StyleRecord {
    style
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                StyleValue::Number(n) if key != UNITLESS_KEY => StyleValue::String(px_length(n)),
                other => other,
            };
            (key, value)
        })
        .collect()
}
