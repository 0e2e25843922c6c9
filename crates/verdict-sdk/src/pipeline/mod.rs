//! Decision evaluation pipeline
//!
//! One request flows through four stages:
//! - `loader`: resolve the reference and compile the model
//! - `context_builder`: bind inputs into an engine context
//! - `dispatcher`: evaluate one named decision or all of them
//! - `extractor`: select the result and coerce it to a boolean
//!
//! `service` ties the stages together and turns every failure into an
//! `ErrorOutcome`. Every engine call goes through `guard`.

mod coercion;
mod context_builder;
mod dispatcher;
mod extractor;
mod guard;
mod loader;
mod service;
mod types;

pub use coercion::DecisionValue;
pub use context_builder::build_context;
pub use dispatcher::{dispatch, requested_decision};
pub use extractor::extract;
pub use loader::{LoadedModel, ModelLoader};
pub use service::{DecisionEvaluator, DecisionService};
pub use types::{ErrorOutcome, EvaluationRequest, EvaluationResponse, NormalizedResult};

#[cfg(test)]
mod tests;
