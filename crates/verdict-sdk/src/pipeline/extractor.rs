//! Result selection and normalization

use super::coercion::DecisionValue;
use super::dispatcher::requested_decision;
use super::types::NormalizedResult;
use crate::error::{Result, SdkError};
use verdict_core::EvaluationOutcome;

/// Pick the relevant decision result and normalize it
///
/// With a name, the result must match it exactly. Without one, the first
/// result in engine order is used.
pub fn extract(outcome: &EvaluationOutcome, decision_name: Option<&str>) -> Result<NormalizedResult> {
    let result = match requested_decision(decision_name) {
        Some(name) => outcome
            .decision_results
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| SdkError::DecisionNotFound {
                decision_name: name.to_string(),
            })?,
        None => outcome
            .decision_results
            .first()
            .ok_or(SdkError::NoResultsFound)?,
    };

    let mut explanation = format!("Decision '{}' evaluated", result.name);
    if !result.value.is_null() {
        explanation.push_str(&format!(" - Result: {}", result.value));
    }

    Ok(NormalizedResult {
        value: DecisionValue::from(&result.value).to_bool(),
        explanation,
    })
}
