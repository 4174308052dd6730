//! `camelCase` to kebab-case key conversion.

use crate::value::StyleRecord;

/// Convert one key to kebab-case.
///
/// Every ASCII uppercase letter becomes `-` plus its lowercase form, so
/// `backgroundColor` becomes `background-color` and a leading capital gives
/// a vendor prefix (`WebkitTransform` becomes `-webkit-transform`).
#[must_use]
pub fn kebab_case(key: &str) -> String {
    let mut kebab = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    kebab
}

/// Rewrite every key of `style` to kebab-case, keeping values as they are.
///
/// If two keys land on the same kebab-case name, the later value is kept at
/// the earlier key's position.
#[must_use]
pub fn convert_to_kebab_case(style: StyleRecord) -> StyleRecord {
    style
        .into_iter()
        .map(|(key, value)| (kebab_case(&key), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_record;

    #[test]
    fn test_kebab_simple() {
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_kebab_leading_capital() {
        assert_eq!(kebab_case("WebkitTransform"), "-webkit-transform");
    }

    #[test]
    fn test_kebab_idempotent() {
        assert_eq!(kebab_case("background-color"), "background-color");
        assert_eq!(kebab_case(&kebab_case("marginTop")), "margin-top");
        assert_eq!(kebab_case("color"), "color");
    }

    #[test]
    fn test_kebab_non_ascii_untouched() {
        assert_eq!(kebab_case("ÉtatX"), "État-x");
    }

    #[test]
    fn test_convert_record_keeps_values() {
        let style = style_record! { "fontSize" => 32, "color" => "red" };
        assert_eq!(
            convert_to_kebab_case(style),
            style_record! { "font-size" => 32, "color" => "red" }
        );
    }

    #[test]
    fn test_colliding_keys() {
        let style = style_record! { "marginTop" => 1, "color" => "red", "margin-top" => 2 };
        let converted = convert_to_kebab_case(style);
        assert_eq!(converted, style_record! { "margin-top" => 2, "color" => "red" });
        assert_eq!(converted.get_index(0).map(|(key, _)| key.as_str()), Some("margin-top"));
    }
}
