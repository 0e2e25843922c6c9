//! Verdict Decision Service SDK
//!
//! High-level API for evaluating decision models through an injected
//! execution engine.

pub mod builder;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types
pub use builder::DecisionServiceBuilder;
pub use config::ServiceConfig;
pub use error::{Result, SdkError};
pub use pipeline::{
    DecisionEvaluator, DecisionService, DecisionValue, ErrorOutcome, EvaluationRequest,
    EvaluationResponse, LoadedModel, ModelLoader, NormalizedResult,
};

// Re-export commonly used types from dependencies
pub use verdict_core::{ExecutionEngine, Value};
pub use verdict_repository::{CacheStats, ResolverConfig};
