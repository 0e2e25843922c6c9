//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use verdict_sdk::DecisionEvaluator;

/// Create REST API router
pub fn create_router(evaluator: Arc<dyn DecisionEvaluator>) -> Router {
    let state = AppState { evaluator };

    Router::new()
        .route("/dmn/health", get(health))
        .route("/dmn/evaluate", post(evaluate))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
