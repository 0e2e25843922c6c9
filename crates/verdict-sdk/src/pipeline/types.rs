//! Request and response types for the evaluation pipeline

use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use verdict_core::Value;

/// One evaluation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Model reference, resolved through the resolver chain
    pub model_ref: String,

    /// Decision to evaluate; blank or absent evaluates all decisions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_name: Option<String>,

    /// Named input values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<HashMap<String, Value>>,
}

impl EvaluationRequest {
    /// Create a request for `model_ref` with no decision name and no inputs
    pub fn new(model_ref: impl Into<String>) -> Self {
        Self {
            model_ref: model_ref.into(),
            decision_name: None,
            inputs: None,
        }
    }

    pub fn with_decision(mut self, decision_name: impl Into<String>) -> Self {
        self.decision_name = Some(decision_name.into());
        self
    }

    pub fn with_inputs(mut self, inputs: HashMap<String, Value>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    /// Add one input value
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Canonical outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub value: bool,
    pub explanation: String,
}

/// Outcome of a failed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorOutcome {
    pub message: String,
}

/// Either a normalized result or an error, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResponse {
    Success(NormalizedResult),
    Failure(ErrorOutcome),
}

impl EvaluationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationResponse::Success(_))
    }

    /// The result, if the evaluation succeeded
    pub fn result(&self) -> Option<&NormalizedResult> {
        match self {
            EvaluationResponse::Success(result) => Some(result),
            EvaluationResponse::Failure(_) => None,
        }
    }

    /// The error message, if the evaluation failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            EvaluationResponse::Success(_) => None,
            EvaluationResponse::Failure(failure) => Some(&failure.message),
        }
    }
}

impl From<Result<NormalizedResult, SdkError>> for EvaluationResponse {
    fn from(result: Result<NormalizedResult, SdkError>) -> Self {
        match result {
            Ok(result) => EvaluationResponse::Success(result),
            Err(err) => EvaluationResponse::Failure(ErrorOutcome {
                message: err.to_string(),
            }),
        }
    }
}
