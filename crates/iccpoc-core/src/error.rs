//! Error types for iccpoc

use thiserror::Error;

use crate::icc::IccError;

/// Result type for iccpoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or inspecting a profile
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Generator parameters would not produce the crafted profile
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Profile could not be read back
    #[error("Profile inspection failed: {0}")]
    Inspect(#[from] IccError),

    /// Profile would not fit 32-bit offsets and sizes
    #[error("Profile layout failed: {0}")]
    Layout(IccError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
