//! Strict checking of raw style input before it enters the pipeline.

use crate::error::StyleError;
use crate::transform::TRANSFORM_KEY;
use crate::value::{StyleInput, StyleRecord, StyleValue};

/// Check that `input` only uses shapes the pipeline renders faithfully.
///
/// Every record reachable from `input` is checked, including ones a later
/// entry would override during merging.
///
/// # Errors
///
/// Returns the first problem found, in input order:
/// - [`StyleError::UnexpectedList`] for a list under any key but `transform`
///   (or nested inside a transform descriptor);
/// - [`StyleError::TransformDescriptor`] for a descriptor without exactly one key;
/// - [`StyleError::NonFiniteNumber`] for `NaN` or an infinity.
pub fn validate_style_input(input: &StyleInput) -> Result<(), StyleError> {
    match input {
        StyleInput::Null => Ok(()),
        StyleInput::Record(record) => validate_record(record),
        StyleInput::List(items) => items.iter().try_for_each(validate_style_input),
    }
}

fn validate_record(record: &StyleRecord) -> Result<(), StyleError> {
    for (key, value) in record {
        match value {
            StyleValue::List(descriptors) if key == TRANSFORM_KEY => {
                for (index, descriptor) in descriptors.iter().enumerate() {
                    if descriptor.len() != 1 {
                        return Err(StyleError::TransformDescriptor {
                            index,
                            functions: descriptor.len(),
                        });
                    }
                    validate_scalars(descriptor)?;
                }
            }
            StyleValue::List(_) => {
                return Err(StyleError::UnexpectedList { key: key.clone() });
            }
            StyleValue::Number(n) => check_finite(key, *n)?,
            StyleValue::String(_) => {}
        }
    }
    Ok(())
}

/// Transform arguments must be plain strings or finite numbers.
fn validate_scalars(descriptor: &StyleRecord) -> Result<(), StyleError> {
    for (key, value) in descriptor {
        match value {
            StyleValue::Number(n) => check_finite(key, *n)?,
            StyleValue::List(_) => return Err(StyleError::UnexpectedList { key: key.clone() }),
            StyleValue::String(_) => {}
        }
    }
    Ok(())
}

fn check_finite(key: &str, n: f64) -> Result<(), StyleError> {
    if n.is_finite() {
        Ok(())
    } else {
        Err(StyleError::NonFiniteNumber { key: key.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_record;

    #[test]
    fn test_valid_nested_input() {
        let input = StyleInput::List(vec![
            StyleInput::Record(style_record! { "flex" => 1 }),
            StyleInput::Null,
            StyleInput::List(vec![StyleInput::Record(style_record! {
                "transform" => vec![style_record! { "translateX" => 5 }],
            })]),
        ]);
        assert!(validate_style_input(&input).is_ok());
    }

    #[test]
    fn test_rejects_empty_descriptor() {
        let input = StyleInput::Record(style_record! {
            "transform" => vec![style_record! { "scale" => 2 }, style_record! {}],
        });
        assert!(matches!(
            validate_style_input(&input),
            Err(StyleError::TransformDescriptor { index: 1, functions: 0 })
        ));
    }

    #[test]
    fn test_rejects_list_under_other_key() {
        let input = StyleInput::Record(style_record! {
            "shadowOffset" => vec![style_record! { "width" => 1 }],
        });
        let err = validate_style_input(&input).unwrap_err();
        assert!(matches!(&err, StyleError::UnexpectedList { key } if key == "shadowOffset"));
        assert_eq!(
            err.to_string(),
            "malformed style input: `shadowOffset` holds a list, but only `transform` accepts one"
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let input = StyleInput::Record(style_record! { "width" => f64::NAN });
        assert!(matches!(
            validate_style_input(&input),
            Err(StyleError::NonFiniteNumber { key }) if key == "width"
        ));
    }

    #[test]
    fn test_rejects_non_finite_transform_argument() {
        let input = StyleInput::Record(style_record! {
            "transform" => vec![style_record! { "translateX" => f64::INFINITY }],
        });
        assert!(matches!(
            validate_style_input(&input),
            Err(StyleError::NonFiniteNumber { key }) if key == "translateX"
        ));
    }

    #[test]
    fn test_string_transform_is_valid() {
        let input = StyleInput::Record(style_record! { "transform" => "rotate(45deg)" });
        assert!(validate_style_input(&input).is_ok());
    }
}
