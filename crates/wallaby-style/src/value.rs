//! Style values, flat style records, and raw (unmerged) style inputs.
//!
//! These mirror the shapes a JavaScript renderer hands over in a `style`
//! prop: `{ flex: 1 }`, `[{ flex: 1 }, null, [{ color: "red" }]]`, and the
//! `transform: [{ translateX: 10 }]` list form.

use std::fmt;
use std::num::FpCategory;

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::transform::render_descriptors;

/// A flat, insertion-ordered mapping from style key to value.
///
/// Iteration order is the order keys were first inserted; overwriting a key
/// keeps its original position.
pub type StyleRecord = IndexMap<String, StyleValue>;

/// A single value in a [`StyleRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A bare number. Becomes a pixel length unless the key is `flex`.
    Number(f64),
    /// A string, emitted verbatim.
    String(String),
    /// Transform descriptors, e.g. `[{ translateX: 10 }, { rotate: "45deg" }]`.
    List(Vec<StyleRecord>),
}

impl StyleValue {
    /// Returns the string form if this value is already a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            Self::Number(_) | Self::List(_) => None,
        }
    }
}

/// Magnitudes at or above this print in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;

/// Nonzero magnitudes below this print in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Renders a number the way JavaScript string interpolation does.
///
/// Integral values drop the fractional part (`1`, not `1.0`), negative zero
/// prints as `0`, and the non-finite values print as `NaN`, `Infinity` and
/// `-Infinity`. Magnitudes of at least `1e21` or below `1e-6` switch to
/// exponent form with a signed exponent (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let text = if n.is_sign_positive() { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = n.abs();
    if magnitude == 0.0 || (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        // Adding positive zero turns -0.0 into 0.0.
        return (n + 0.0).to_string();
    }

    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => f.write_str(s),
            Self::List(descriptors) => f.write_str(&render_descriptors(descriptors)),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Vec<StyleRecord>> for StyleValue {
    fn from(value: Vec<StyleRecord>) -> Self {
        Self::List(value)
    }
}

/// A style prop before merging.
///
/// Either a single record or an arbitrarily nested list of records with
/// `null` placeholders, e.g. `[{ flex: 1 }, null, [{ color: "red" }]]`.
///
/// When read from JSON, the falsy scalars `false`, `0` and `""` become
/// [`StyleInput::Null`], so `[styles.base, isActive && styles.active]`
/// deserializes. Truthy scalars are rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum StyleInput {
    /// A `null`/`undefined` placeholder. Dropped during merging.
    #[default]
    Null,
    /// An already-flat record.
    Record(StyleRecord),
    /// An ordered list of inputs; later entries override earlier ones.
    List(Vec<StyleInput>),
}

impl StyleInput {
    /// Whether this is a `null` placeholder.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Every JSON shape a style input may take before falsy scalars are folded
/// into [`StyleInput::Null`].
#[derive(Deserialize)]
#[serde(untagged)]
enum InputRepr {
    Null,
    Record(StyleRecord),
    List(Vec<StyleInput>),
    Bool(bool),
    Number(f64),
    String(String),
}

impl TryFrom<InputRepr> for StyleInput {
    type Error = String;

    fn try_from(repr: InputRepr) -> Result<Self, Self::Error> {
        match repr {
            InputRepr::Record(record) => Ok(Self::Record(record)),
            InputRepr::List(items) => Ok(Self::List(items)),
            InputRepr::Null | InputRepr::Bool(false) => Ok(Self::Null),
            InputRepr::Number(n) if matches!(n.classify(), FpCategory::Zero | FpCategory::Nan) => {
                Ok(Self::Null)
            }
            InputRepr::String(s) if s.is_empty() => Ok(Self::Null),
            InputRepr::Bool(true) => Err("`true` is not a style".to_string()),
            InputRepr::Number(n) => Err(format!("`{}` is not a style", format_number(n))),
            InputRepr::String(s) => Err(format!("string `{s}` is not a style inside a list")),
        }
    }
}

impl<'de> Deserialize<'de> for StyleInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::try_from(InputRepr::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

impl From<StyleRecord> for StyleInput {
    fn from(record: StyleRecord) -> Self {
        Self::Record(record)
    }
}

impl From<Vec<StyleInput>> for StyleInput {
    fn from(items: Vec<StyleInput>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<StyleRecord>> for StyleInput {
    fn from(records: Vec<StyleRecord>) -> Self {
        Self::List(records.into_iter().map(Self::Record).collect())
    }
}

impl<T: Into<StyleInput>> From<Option<T>> for StyleInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Builds a [`StyleRecord`] from `key => value` pairs.
///
/// Values go through [`StyleValue::from`], so strings, integers, floats and
/// `Vec<StyleRecord>` transform lists are all accepted.
///
/// ```
/// use wallaby_style::{StyleValue, style_record};
///
/// let style = style_record! {
///     "flex" => 1,
///     "backgroundColor" => "white",
///     "transform" => vec![style_record! { "translateX" => 5 }],
/// };
/// assert_eq!(style["backgroundColor"], StyleValue::from("white"));
/// ```
#[macro_export]
macro_rules! style_record {
    () => {
        $crate::StyleRecord::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::StyleRecord::new();
        $(
            let _ = record.insert(($key).to_string(), $crate::StyleValue::from($value));
        )+
        record
    }};
}
