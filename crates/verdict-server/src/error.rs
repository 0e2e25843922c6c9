//! Server error types

use crate::api::rest::types::EvaluateResponsePayload;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Server error type
///
/// Every variant renders as the standard evaluation response body with
/// `success: false`.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid request
    #[error("{0}")]
    InvalidRequest(String),

    /// Body is not JSON
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// The decision service reported a failure
    #[error("{0}")]
    EvaluationFailed(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::EvaluationFailed(_) | ServerError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(EvaluateResponsePayload::failure(self.to_string()));
        (status, body).into_response()
    }
}

impl From<verdict_sdk::SdkError> for ServerError {
    fn from(err: verdict_sdk::SdkError) -> Self {
        ServerError::EvaluationFailed(err.to_string())
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
