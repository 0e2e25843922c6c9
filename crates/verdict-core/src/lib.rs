//! Verdict Core - Core types shared across the Verdict workspace
//!
//! This crate provides:
//! - Value types for decision inputs and outputs
//! - The execution engine boundary (`ExecutionEngine`) and the data that
//!   crosses it: contexts, compilations, outcomes and diagnostics
//! - Error types

pub mod engine;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use engine::{
    Compilation, DecisionResult, Diagnostic, EvaluationContext, EvaluationOutcome,
    ExecutionEngine, Severity,
};
pub use error::{CoreError, Result};
pub use types::Value;
