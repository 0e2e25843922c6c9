//! Error types for Verdict Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The execution engine failed outside of its diagnostic channel
    #[error("Engine fault: {0}")]
    EngineFault(String),

    /// A value could not be represented in the requested form
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
