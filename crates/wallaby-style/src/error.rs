//! Errors reported by the validating entry points.

use thiserror::Error;

/// A style prop that falls outside the shapes the pipeline understands.
///
/// Only the `try_*` entry points return this; the permissive pipeline
/// falls back to pass-through behavior instead.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A `transform` descriptor without exactly one function.
    #[error("malformed style input: transform descriptor {index} has {functions} functions, expected exactly one")]
    TransformDescriptor {
        /// Position of the descriptor in the `transform` list.
        index: usize,
        /// Number of keys the descriptor holds.
        functions: usize,
    },

    /// A list value under a key other than `transform`.
    #[error("malformed style input: `{key}` holds a list, but only `transform` accepts one")]
    UnexpectedList {
        /// The offending style key.
        key: String,
    },

    /// `NaN` or an infinity where a length was expected.
    #[error("malformed style input: `{key}` is not a finite number")]
    NonFiniteNumber {
        /// The offending style key.
        key: String,
    },

    /// JSON that does not describe a node or a style prop.
    #[error("malformed style input: {0}")]
    Json(#[from] serde_json::Error),
}
