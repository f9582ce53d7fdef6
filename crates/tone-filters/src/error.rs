//! Unified error type for the tone-filters public API.
//!
//! [`FilterError`] covers every way a pipeline run can fail so application
//! code can propagate with `?` and map to a single user-facing notice.

use thiserror::Error;

/// Unified error type for the tone-filters public API.
///
/// # Example
///
/// ```
/// use tone_filters::{Filter, FilterError};
///
/// fn parse(name: &str) -> Result<Filter, FilterError> {
///     name.parse()
/// }
///
/// assert!(parse("Paris").is_ok());
/// assert!(matches!(parse("Berlin"), Err(FilterError::UnsupportedFilter(_))));
/// ```
#[derive(Debug, Error)]
pub enum FilterError {
    /// Input bytes are not a decodable JPEG or PNG container
    #[error("decode error: {0}")]
    Decode(String),

    /// Filter name outside the fixed set
    #[error("unsupported filter: {0}")]
    UnsupportedFilter(String),

    /// PNG output stream could not be produced
    #[error("encode error: {0}")]
    Encode(String),

    /// Input mode name other than upload or camera
    #[error("unsupported input mode: {0}")]
    UnsupportedInputMode(String),

    /// Adjustment parameter outside its allowed range
    #[error("{name} {value} out of range {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Bytes arrived before an input mode was selected
    #[error("no input mode selected")]
    NoInputMode,

    /// Render requested with no image loaded
    #[error("no image loaded")]
    NoImage,
}

impl From<image::ImageError> for FilterError {
    fn from(err: image::ImageError) -> Self {
        FilterError::Decode(err.to_string())
    }
}

impl From<png::EncodingError> for FilterError {
    fn from(err: png::EncodingError) -> Self {
        FilterError::Encode(err.to_string())
    }
}
