//! Inline CSS serialization.

use crate::value::StyleRecord;

/// Separator between declarations in an inline style.
pub const DECLARATION_SEPARATOR: &str = "; ";

/// Render a record as an inline `style` attribute value.
///
/// Declarations are written as `key: value` in record order and joined with
/// `"; "`. There is no trailing separator, and an empty record gives `""`.
#[must_use]
pub fn to_inline_style(style: &StyleRecord) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(DECLARATION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_record;

    #[test]
    fn test_serialize_pairs() {
        let style = style_record! { "color" => "red", "flex" => "2" };
        assert_eq!(to_inline_style(&style), "color: red; flex: 2");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(to_inline_style(&style_record! {}), "");
    }

    #[test]
    fn test_serialize_single_no_trailing_separator() {
        assert_eq!(to_inline_style(&style_record! { "color" => "red" }), "color: red");
    }

    #[test]
    fn test_serialize_numeric_flex() {
        let style = style_record! { "flex" => 1, "width" => "10px" };
        assert_eq!(to_inline_style(&style), "flex: 1; width: 10px");
    }

    #[test]
    fn test_serialize_preserves_order() {
        let style = style_record! { "z-index" => "2", "align-items" => "center", "color" => "red" };
        assert_eq!(to_inline_style(&style), "z-index: 2; align-items: center; color: red");
    }
}
