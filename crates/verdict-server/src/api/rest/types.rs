//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use verdict_sdk::{DecisionEvaluator, NormalizedResult};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<dyn DecisionEvaluator>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Evaluation request payload
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePayload {
    /// Model reference
    #[serde(default, alias = "modelRef")]
    pub dmn_file: Option<String>,

    /// Decision to evaluate (optional)
    #[serde(default)]
    pub decision_name: Option<String>,

    /// Named inputs (optional)
    #[serde(default, alias = "inputs")]
    pub input_data: Option<HashMap<String, serde_json::Value>>,
}

/// Evaluation response body, used for success and failure alike
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluateResponsePayload {
    pub result: bool,
    pub reason: Option<String>,
    pub success: bool,
    pub error: Option<String>,
}

impl EvaluateResponsePayload {
    pub fn success(result: NormalizedResult) -> Self {
        Self {
            result: result.value,
            reason: Some(result.explanation),
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: false,
            reason: None,
            success: false,
            error: Some(message.into()),
        }
    }
}
