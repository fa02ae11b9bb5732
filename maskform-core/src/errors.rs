//! errors.rs - Custom error types for the maskform-core library.
//!
//! The classification, validation, formatting, and masking functions are
//! total and never produce these; the fallible surfaces are policy
//! loading and name-keyed dispatch.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `maskform-core`
/// library.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be
/// added in future versions, so exhaustive matching would be a breaking
/// hazard.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaskformError {
    #[error("Unknown field kind '{0}'")]
    UnknownFieldKind(String),

    #[error("Unknown format kind '{0}'")]
    UnknownFormatKind(String),

    #[error("Unknown masking category '{0}'")]
    UnknownCategory(String),

    #[error("Masking policy '{0}' was not found in any candidate path")]
    PolicyNotFound(String),

    #[error("Policy validation failed:\n{0}")]
    PolicyValidation(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
