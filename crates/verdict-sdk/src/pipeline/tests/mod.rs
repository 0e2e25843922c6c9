//! Pipeline tests against a recording engine

use super::*;
use crate::error::SdkError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use verdict_core::{
    Compilation, CoreError, DecisionResult, Diagnostic, EvaluationContext, EvaluationOutcome,
    ExecutionEngine, Value,
};
use verdict_repository::{BundledResolver, ResolverChain};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    ByName(String),
    All,
}

/// Returns a canned outcome and records every evaluation call
struct RecordingEngine {
    outcome: EvaluationOutcome,
    calls: Mutex<Vec<Call>>,
    contexts: Mutex<Vec<EvaluationContext>>,
    fail_with: Option<CoreError>,
    panic_on_evaluate: bool,
}

impl RecordingEngine {
    fn new(outcome: EvaluationOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
            contexts: Mutex::new(Vec::new()),
            fail_with: None,
            panic_on_evaluate: false,
        }
    }

    fn returning(results: Vec<(&str, Value)>) -> Self {
        Self::new(EvaluationOutcome::new(
            results
                .into_iter()
                .map(|(name, value)| DecisionResult::new(name, value))
                .collect(),
        ))
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn last_context(&self) -> EvaluationContext {
        self.contexts.lock().unwrap().last().cloned().unwrap()
    }

    fn record(&self, call: Call, context: &EvaluationContext) -> verdict_core::Result<EvaluationOutcome> {
        if self.panic_on_evaluate {
            panic!("engine exploded");
        }
        self.calls.lock().unwrap().push(call);
        self.contexts.lock().unwrap().push(context.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(self.outcome.clone()),
        }
    }
}

impl ExecutionEngine for RecordingEngine {
    type Model = ();

    fn compile(&self, _source: &[u8], _source_id: &str) -> verdict_core::Result<Compilation<()>> {
        Ok(Compilation::new(vec![()], vec![]))
    }

    fn evaluate_by_name(
        &self,
        _model: &(),
        context: &EvaluationContext,
        decision_name: &str,
    ) -> verdict_core::Result<EvaluationOutcome> {
        self.record(Call::ByName(decision_name.to_string()), context)
    }

    fn evaluate_all(
        &self,
        _model: &(),
        context: &EvaluationContext,
    ) -> verdict_core::Result<EvaluationOutcome> {
        self.record(Call::All, context)
    }
}

fn service(engine: RecordingEngine) -> (Arc<RecordingEngine>, DecisionService<RecordingEngine>) {
    let engine = Arc::new(engine);
    let chain = ResolverChain::new()
        .with_resolver(BundledResolver::new().with_resource("model.dmn", "anything"));
    let loader = ModelLoader::new(Arc::clone(&engine), chain);
    (Arc::clone(&engine), DecisionService::new(engine, loader))
}

#[tokio::test]
async fn test_absent_name_evaluates_all() {
    let (engine, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(true))]));

    let response = service.evaluate(&EvaluationRequest::new("model.dmn")).await;
    assert!(response.is_success());
    assert_eq!(engine.calls(), vec![Call::All]);
}

#[tokio::test]
async fn test_blank_name_evaluates_all() {
    let (engine, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(true))]));

    let request = EvaluationRequest::new("model.dmn").with_decision("   ");
    let response = service.evaluate(&request).await;
    assert_eq!(
        response.result().unwrap().explanation,
        "Decision 'A' evaluated - Result: true"
    );
    assert_eq!(engine.calls(), vec![Call::All]);
}

#[tokio::test]
async fn test_named_decision_evaluates_by_name() {
    let (engine, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(true))]));

    let request = EvaluationRequest::new("model.dmn").with_decision("A");
    service.evaluate(&request).await;
    assert_eq!(engine.calls(), vec![Call::ByName("A".to_string())]);
}

#[tokio::test]
async fn test_inputs_are_bound_verbatim() {
    let (engine, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(true))]));

    let mut nested = HashMap::new();
    nested.insert("city".to_string(), Value::from("Ulaanbaatar"));
    let request = EvaluationRequest::new("model.dmn")
        .with_decision("A")
        .with_input("age", "25")
        .with_input("extra", Value::Object(nested.clone()))
        .with_input("flag", Value::Null);
    service.evaluate(&request).await;

    let context = engine.last_context();
    assert_eq!(context.len(), 3);
    assert_eq!(context.get("age"), Some(&Value::from("25")));
    assert_eq!(context.get("extra"), Some(&Value::Object(nested)));
    assert_eq!(context.get("flag"), Some(&Value::Null));
}

#[tokio::test]
async fn test_absent_inputs_give_empty_context() {
    let (engine, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(true))]));

    let response = service
        .evaluate(&EvaluationRequest::new("model.dmn").with_decision("A"))
        .await;
    assert!(response.is_success());
    assert!(engine.last_context().is_empty());
}

#[tokio::test]
async fn test_error_diagnostics_fail_even_with_results() {
    let outcome = EvaluationOutcome::new(vec![DecisionResult::new("A", Value::Bool(true))])
        .with_message(Diagnostic::info("started"))
        .with_message(Diagnostic::error("first"))
        .with_message(Diagnostic::warning("careful"))
        .with_message(Diagnostic::error("second"));
    let (_, service) = service(RecordingEngine::new(outcome));

    let err = service
        .try_evaluate(&EvaluationRequest::new("model.dmn").with_decision("A"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SdkError::EvaluationError {
            messages: vec!["first".to_string(), "second".to_string()]
        }
    );
    assert_eq!(err.to_string(), "Evaluation errors: first; second");
}

#[tokio::test]
async fn test_warnings_do_not_fail() {
    let outcome = EvaluationOutcome::new(vec![DecisionResult::new("A", Value::Number(2.0))])
        .with_message(Diagnostic::warning("careful"));
    let (_, service) = service(RecordingEngine::new(outcome));

    let response = service.evaluate(&EvaluationRequest::new("model.dmn")).await;
    assert!(response.result().unwrap().value);
}

#[tokio::test]
async fn test_missing_decision() {
    let (_, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(true))]));

    let response = service
        .evaluate(&EvaluationRequest::new("model.dmn").with_decision("Nonexistent Decision"))
        .await;
    assert_eq!(
        response.error_message(),
        Some("Decision not found: Nonexistent Decision")
    );
}

#[tokio::test]
async fn test_no_results() {
    let (_, service) = service(RecordingEngine::returning(vec![]));

    let response = service.evaluate(&EvaluationRequest::new("model.dmn")).await;
    assert_eq!(response.error_message(), Some("No decision results found"));
}

#[tokio::test]
async fn test_missing_model_never_reaches_engine() {
    let (engine, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(true))]));

    let response = service.evaluate(&EvaluationRequest::new("missing.dmn")).await;
    assert_eq!(response.error_message(), Some("Model not found: missing.dmn"));
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn test_engine_fault_is_unexpected_failure() {
    let mut engine = RecordingEngine::returning(vec![]);
    engine.fail_with = Some(CoreError::EngineFault("out of memory".to_string()));
    let (_, service) = service(engine);

    let err = service
        .try_evaluate(&EvaluationRequest::new("model.dmn"))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::UnexpectedFailure(ref m) if m.contains("out of memory")));
}

#[tokio::test]
async fn test_engine_panic_is_contained() {
    let mut engine = RecordingEngine::returning(vec![]);
    engine.panic_on_evaluate = true;
    let (_, service) = service(engine);

    let response = service.evaluate(&EvaluationRequest::new("model.dmn")).await;
    assert!(!response.is_success());
    assert!(response.error_message().unwrap().contains("engine exploded"));
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let (_, service) = service(RecordingEngine::returning(vec![("A", Value::from("yes"))]));

    let request = EvaluationRequest::new("model.dmn").with_input("x", 1i64);
    let first = service.evaluate(&request).await;
    let second = service.evaluate(&request).await;
    assert_eq!(first, second);
    assert!(first.result().unwrap().value);
}

#[tokio::test]
async fn test_service_as_trait_object() {
    let (_, service) = service(RecordingEngine::returning(vec![("A", Value::Bool(false))]));
    let evaluator: Arc<dyn DecisionEvaluator> = Arc::new(service);

    let response = evaluator.evaluate(&EvaluationRequest::new("model.dmn")).await;
    assert_eq!(
        response,
        EvaluationResponse::Success(NormalizedResult {
            value: false,
            explanation: "Decision 'A' evaluated - Result: false".to_string(),
        })
    );
}
