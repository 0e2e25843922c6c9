//! SDK error types

use thiserror::Error;

/// Failure of one pipeline run
///
/// Every variant is terminal for the request that raised it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    /// No readable bytes for the reference, or the source defined no models
    #[error("Model not found: {model_ref}")]
    ModelNotFound { model_ref: String },

    /// The engine reported error diagnostics while compiling
    #[error("Model compilation errors in {model_ref}: {}", .messages.join("; "))]
    CompilationError {
        model_ref: String,
        messages: Vec<String>,
    },

    /// The engine reported error diagnostics while evaluating
    #[error("Evaluation errors: {}", .messages.join("; "))]
    EvaluationError { messages: Vec<String> },

    /// The requested decision is not among the results
    #[error("Decision not found: {decision_name}")]
    DecisionNotFound { decision_name: String },

    /// Evaluation of all decisions produced nothing
    #[error("No decision results found")]
    NoResultsFound,

    /// Engine fault or panic
    #[error("Unexpected error: {0}")]
    UnexpectedFailure(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<verdict_repository::RepositoryError> for SdkError {
    fn from(err: verdict_repository::RepositoryError) -> Self {
        SdkError::ConfigError(err.to_string())
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
