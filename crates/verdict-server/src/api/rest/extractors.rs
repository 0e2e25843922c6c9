//! Custom extractors
//!
//! Rejections use the standard response body so callers always receive the
//! same JSON shape.

use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde_json::error::Category;

/// JSON body extractor
///
/// - empty body or JSON `null` → 400 `Request body is required`
/// - content type other than JSON → 415
/// - malformed JSON → 400
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::InvalidRequest(format!("Failed to read body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ServerError::InvalidRequest(
                "Request body is required".to_string(),
            ));
        }

        if !is_json {
            return Err(ServerError::UnsupportedMediaType(
                "Expected 'Content-Type: application/json'".to_string(),
            ));
        }

        match serde_json::from_slice::<Option<T>>(&bytes) {
            Ok(Some(value)) => Ok(Self(value)),
            Ok(None) => Err(ServerError::InvalidRequest(
                "Request body is required".to_string(),
            )),
            Err(err) => Err(ServerError::InvalidRequest(match err.classify() {
                Category::Data => format!("Invalid JSON data: {}", err),
                _ => format!("JSON syntax error: {}", err),
            })),
        }
    }
}

/// `application/json` or any `+json` media type, parameters ignored
pub(super) fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
