//! Values returned across the engine boundary

use super::diagnostic::Diagnostic;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Result of compiling one source
#[derive(Debug, Clone)]
pub struct Compilation<M> {
    /// Models produced from the source, in engine order
    pub models: Vec<M>,
    /// Compiler diagnostics
    pub messages: Vec<Diagnostic>,
}

impl<M> Compilation<M> {
    pub fn new(models: Vec<M>, messages: Vec<Diagnostic>) -> Self {
        Self { models, messages }
    }

    /// Returns true when any diagnostic has error severity
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(Diagnostic::is_error)
    }

    /// Error-severity diagnostics in reported order
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter().filter(|m| m.is_error())
    }
}

impl<M> Default for Compilation<M> {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            messages: Vec::new(),
        }
    }
}

/// Result of evaluating one decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Decision name as defined in the model
    pub name: String,
    /// Raw output value; `Null` when the decision produced nothing
    pub value: Value,
    /// Diagnostics attached to this decision
    #[serde(default)]
    pub messages: Vec<Diagnostic>,
}

impl DecisionResult {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Diagnostic) -> Self {
        self.messages.push(message);
        self
    }
}

/// Result of one evaluation call
///
/// `messages` carries every diagnostic the engine reported for the call,
/// including those also attached to individual decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    /// Decision results in engine-reported order
    pub decision_results: Vec<DecisionResult>,
    /// Evaluation diagnostics in engine-reported order
    #[serde(default)]
    pub messages: Vec<Diagnostic>,
}

impl EvaluationOutcome {
    pub fn new(decision_results: Vec<DecisionResult>) -> Self {
        Self {
            decision_results,
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Diagnostic) -> Self {
        self.messages.push(message);
        self
    }

    /// Returns true when any diagnostic has error severity
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(Diagnostic::is_error)
    }

    /// Error-severity diagnostics in reported order
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter().filter(|m| m.is_error())
    }
}
