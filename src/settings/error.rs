//! Errors raised while building a settings bundle

use thiserror::Error;

/// Reasons a settings bundle could not be constructed
#[derive(Debug, Error)]
pub enum SettingsError {
    /// One or more override keys are not recognized options
    #[error("unrecognized option(s): {}", .keys.join(", "))]
    UnrecognizedOption { keys: Vec<String> },

    /// `grade_dims` and `grade_frac` have different lengths
    #[error("mismatched grade arrays: grade_dims has {dims} entries but grade_frac has {fracs}")]
    MismatchedGradeArrays { dims: usize, fracs: usize },

    /// The speed grades do not partition the dimensions
    #[error("grade dimensions do not sum to total dimensionality: sum(grade_dims) = {sum}, nDims = {n_dims}")]
    InvalidGradeSum { sum: u128, n_dims: usize },

    /// A default scaled by `nDims` does not fit in a `usize`
    #[error("nDims = {n_dims} is too large to derive the default {option}")]
    DefaultOverflow { option: &'static str, n_dims: usize },

    /// A recognized option carried a value of the wrong type
    #[error("invalid option value: {source}")]
    InvalidOptionValue {
        #[source]
        source: serde_json::Error,
    },

    /// A `key=value` assignment without the `=`
    #[error("malformed assignment '{input}', expected key=value")]
    MalformedAssignment { input: String },
}
