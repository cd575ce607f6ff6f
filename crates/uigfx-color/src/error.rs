//! Error types for color and color space construction.
//!
//! Only constructors and parsers fail. Conversions, compositing and
//! interpolation are total.

use thiserror::Error;
use uigfx_transfer::TransferError;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// A component is outside the range accepted by the constructor.
    #[error("invalid input value: {0}")]
    InvalidValue(String),

    /// The encoding range of an RGB space is empty.
    #[error("invalid range: min={min}, max={max}; min must be strictly < max")]
    InvalidRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// The operation needs a different color model.
    #[error("unsupported color model: {0}")]
    UnsupportedModel(String),

    /// No registered color space has this name.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// No registered color space has this id.
    #[error("unknown color space id: {0}")]
    UnknownId(u64),

    /// The RGB to XYZ transform cannot be inverted.
    #[error("singular transform: {0}")]
    SingularTransform(String),

    /// Transfer function error.
    #[error("transfer function error: {0}")]
    Transfer(#[from] TransferError),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
