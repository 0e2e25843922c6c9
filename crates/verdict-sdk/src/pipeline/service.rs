//! DecisionService - one pipeline pass per request

use super::context_builder::build_context;
use super::dispatcher::dispatch;
use super::extractor::extract;
use super::loader::ModelLoader;
use super::types::{EvaluationRequest, EvaluationResponse, NormalizedResult};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use verdict_core::ExecutionEngine;
use verdict_repository::CacheStats;

/// Anything that can answer an evaluation request
///
/// Transports hold a `dyn DecisionEvaluator` so they do not depend on a
/// concrete engine.
#[async_trait]
pub trait DecisionEvaluator: Send + Sync {
    async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResponse;
}

/// Loads the model, binds inputs, dispatches and extracts for each request
///
/// Build one with [`DecisionServiceBuilder`](crate::DecisionServiceBuilder).
pub struct DecisionService<E: ExecutionEngine> {
    engine: Arc<E>,
    loader: ModelLoader<E>,
}

impl<E: ExecutionEngine> DecisionService<E> {
    pub(crate) fn new(engine: Arc<E>, loader: ModelLoader<E>) -> Self {
        Self { engine, loader }
    }

    /// Run the pipeline, converting every failure into an error outcome
    pub async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResponse {
        tracing::info!(
            "Evaluating model '{}' (decision: {})",
            request.model_ref,
            request.decision_name.as_deref().unwrap_or("<all>")
        );

        let result = self.try_evaluate(request).await;
        if let Err(err) = &result {
            tracing::warn!("Evaluation of '{}' failed: {}", request.model_ref, err);
        }
        result.into()
    }

    /// Run the pipeline, keeping the typed error
    pub async fn try_evaluate(&self, request: &EvaluationRequest) -> Result<NormalizedResult> {
        let loaded = self.loader.load(&request.model_ref).await?;
        let context = build_context(self.engine.as_ref(), request.inputs.as_ref())?;
        let decision_name = request.decision_name.as_deref();
        let outcome = dispatch(self.engine.as_ref(), &*loaded.model, &context, decision_name)?;
        extract(&outcome, decision_name)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn loader(&self) -> &ModelLoader<E> {
        &self.loader
    }

    /// Cache counters, or `None` when the cache is disabled
    pub async fn cache_stats(&self) -> Option<CacheStats> {
        self.loader.cache_stats().await
    }
}

#[async_trait]
impl<E: ExecutionEngine> DecisionEvaluator for DecisionService<E> {
    async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResponse {
        DecisionService::evaluate(self, request).await
    }
}
