//! Error types for transfer function construction.

use thiserror::Error;

/// Errors raised when building a transfer function.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransferError {
    /// The parameters do not describe a usable curve.
    #[error("invalid transfer parameters: {0}")]
    InvalidParameter(String),
}

/// Result type for transfer function construction.
pub type TransferResult<T> = Result<T, TransferError>;
