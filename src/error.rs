//! Errors reported by the color models, gradient tracks and the sync
//! controller. Every error is a caller logic error; nothing here is
//! transient or retryable.

use thiserror::Error;

/// Errors that can occur while constructing or updating picker state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A value was outside its documented legal interval.
    #[error("{name} must be in the range [{min}, {max}], got {value}")]
    OutOfRange {
        /// Name of the offending value.
        name: &'static str,
        /// The value that was passed in.
        value: i64,
        /// Smallest legal value.
        min: i64,
        /// Largest legal value.
        max: i64,
    },

    /// A handle index did not address an existing handle.
    #[error("index {index} is out of bounds for {len} handles")]
    IndexOutOfBounds {
        /// The index that was passed in.
        index: usize,
        /// Number of handles on the track.
        len: usize,
    },

    /// An axis is too short to map positions past the marker inset.
    #[error("axis length {length} must be greater than the marker size {marker_size}")]
    AxisTooShort {
        /// Length of the axis in pixels.
        length: i32,
        /// Size of the handle markers in pixels.
        marker_size: i32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
