//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Request body extraction with the service's rejection rules
//! - conversions: JSON to decision value conversion
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod conversions;
mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{AppState, EvaluatePayload, EvaluateResponsePayload, HealthResponse};
