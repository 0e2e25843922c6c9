//! Execution engine boundary
//!
//! The decision-model execution engine is an external collaborator. This
//! module defines the calls the Verdict pipeline makes across that boundary
//! and the data that flows back:
//!
//! - [`ExecutionEngine`]: compile bytes into models, create contexts,
//!   evaluate one decision or all decisions
//! - [`Compilation`]: compiled models plus compiler diagnostics
//! - [`EvaluationContext`]: named input values bound before evaluation
//! - [`EvaluationOutcome`]: per-decision results plus evaluation diagnostics
//!
//! Nothing here knows how a model is written or how a rule is evaluated.

mod context;
mod diagnostic;
mod outcome;

pub use context::EvaluationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use outcome::{Compilation, DecisionResult, EvaluationOutcome};

use crate::error::Result;

/// A decision-model execution engine
///
/// Implementations must be `Send + Sync`: one engine instance serves
/// concurrent requests, each with its own context and model handle.
///
/// Failures the engine can describe (invalid models, type errors during
/// evaluation) are reported as [`Diagnostic`]s inside the returned value.
/// `Err` is reserved for faults outside that channel.
pub trait ExecutionEngine: Send + Sync {
    /// Executable model handle produced by [`ExecutionEngine::compile`]
    type Model: Send + Sync;

    /// Compile raw model bytes
    ///
    /// `source_id` identifies where the bytes came from and is used in
    /// diagnostics only.
    fn compile(&self, source: &[u8], source_id: &str) -> Result<Compilation<Self::Model>>;

    /// Create an empty evaluation context
    fn new_context(&self) -> EvaluationContext {
        EvaluationContext::new()
    }

    /// Evaluate a single named decision
    fn evaluate_by_name(
        &self,
        model: &Self::Model,
        context: &EvaluationContext,
        decision_name: &str,
    ) -> Result<EvaluationOutcome>;

    /// Evaluate every decision defined in the model
    fn evaluate_all(
        &self,
        model: &Self::Model,
        context: &EvaluationContext,
    ) -> Result<EvaluationOutcome>;
}
