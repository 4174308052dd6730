//! Flattening of nested, sparse style inputs into a single record.

use crate::value::{StyleInput, StyleRecord};

/// Merge a raw style input into one flat [`StyleRecord`].
///
/// # Algorithm
///
/// STEP 1: A single record is already flat and is returned as-is. A bare
///         `null` contributes nothing.
///
/// STEP 2: For a list, drop the `null` placeholders.
///
/// STEP 3: Fold the remaining entries left to right onto an empty record,
///         merging nested lists first. A later key overwrites an earlier one
///         in place; keys the entry does not mention are left alone.
#[must_use]
pub fn merge_styles(input: StyleInput) -> StyleRecord {
    match input {
        StyleInput::Null => StyleRecord::new(),
        StyleInput::Record(record) => record,
        StyleInput::List(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .fold(StyleRecord::new(), |mut merged, item| {
                merged.extend(merge_styles(item));
                merged
            }),
    }
}
