//! Single-decision vs. all-decisions dispatch

use super::guard::guarded;
use crate::error::{Result, SdkError};
use verdict_core::{EvaluationContext, EvaluationOutcome, ExecutionEngine};

/// The decision name to evaluate, if any; blank names count as omitted
pub fn requested_decision(decision_name: Option<&str>) -> Option<&str> {
    decision_name.filter(|name| !name.trim().is_empty())
}

/// Evaluate one named decision, or every decision when no name is given
///
/// Any error diagnostic fails the call, even alongside results.
pub fn dispatch<E: ExecutionEngine>(
    engine: &E,
    model: &E::Model,
    context: &EvaluationContext,
    decision_name: Option<&str>,
) -> Result<EvaluationOutcome> {
    let outcome = match requested_decision(decision_name) {
        Some(name) => {
            tracing::debug!("Evaluating decision '{}'", name);
            guarded("evaluation", || engine.evaluate_by_name(model, context, name))?
        }
        None => {
            tracing::debug!("Evaluating all decisions");
            guarded("evaluation", || engine.evaluate_all(model, context))?
        }
    };

    if outcome.has_errors() {
        return Err(SdkError::EvaluationError {
            messages: outcome.errors().map(|m| m.text.clone()).collect(),
        });
    }

    Ok(outcome)
}
