//! API endpoint handlers

use super::conversions::inputs_to_values;
use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use tracing::{info, warn};
use uuid::Uuid;
use verdict_sdk::{EvaluationRequest, EvaluationResponse};

pub(super) const SERVICE_NAME: &str = "Verdict Decision Service";

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Evaluation endpoint
#[axum::debug_handler]
pub(super) async fn evaluate(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<EvaluatePayload>,
) -> Result<Json<EvaluateResponsePayload>, ServerError> {
    let request_id = Uuid::new_v4();

    let model_ref = match payload.dmn_file {
        Some(model_ref) if !model_ref.trim().is_empty() => model_ref,
        _ => {
            warn!(%request_id, "Rejected evaluation request without a model reference");
            return Err(ServerError::InvalidRequest(
                "Model reference is required".to_string(),
            ));
        }
    };

    info!(
        %request_id,
        "Received evaluation request for '{}' with {} input(s)",
        model_ref,
        payload.input_data.as_ref().map_or(0, |inputs| inputs.len())
    );

    let mut request = EvaluationRequest::new(model_ref);
    if let Some(decision_name) = payload.decision_name {
        request = request.with_decision(decision_name);
    }
    if let Some(inputs) = payload.input_data {
        request = request.with_inputs(inputs_to_values(inputs)?);
    }

    match state.evaluator.evaluate(&request).await {
        EvaluationResponse::Success(result) => {
            info!(%request_id, "Evaluation succeeded: {}", result.explanation);
            Ok(Json(EvaluateResponsePayload::success(result)))
        }
        EvaluationResponse::Failure(failure) => {
            warn!(%request_id, "Evaluation failed: {}", failure.message);
            Err(ServerError::EvaluationFailed(failure.message))
        }
    }
}
