//! Rule-list execution engine

use crate::compiled::{CompiledDecision, CompiledModel, CompiledRule};
use crate::condition::{ConditionParser, Operator};
use crate::evaluator;
use crate::model::ModelDocument;
use regex::Regex;
use std::collections::HashSet;
use verdict_core::{
    Compilation, Diagnostic, EvaluationContext, EvaluationOutcome, ExecutionEngine, Result, Value,
};

/// Execution engine for YAML rule-list models
///
/// Decisions are evaluated in document order. A decision can read the
/// outputs of the decisions defined before it by name.
#[derive(Debug, Default, Clone)]
pub struct RuleListEngine {
    parser: ConditionParser,
}

impl RuleListEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn compile_document(
        &self,
        document: ModelDocument,
        source_id: &str,
        messages: &mut Vec<Diagnostic>,
    ) -> Option<CompiledModel> {
        let mut seen = HashSet::new();
        let mut decisions = Vec::with_capacity(document.decisions.len());

        for definition in document.decisions {
            if definition.name.trim().is_empty() {
                messages.push(Diagnostic::error(format!(
                    "{}: decision with a blank name",
                    source_id
                )));
                continue;
            }
            if !seen.insert(definition.name.clone()) {
                messages.push(Diagnostic::error(format!(
                    "{}: duplicate decision '{}'",
                    source_id, definition.name
                )));
                continue;
            }

            let mut rules = Vec::with_capacity(definition.rules.len());
            for (index, rule) in definition.rules.into_iter().enumerate() {
                let label = format!("Decision '{}' rule {}", definition.name, index + 1);
                match self.parser.parse_when_clause(&rule.when) {
                    Ok(condition) => {
                        let mut valid = true;
                        for cond in condition.all_conditions() {
                            if cond.operator != Operator::Matches {
                                continue;
                            }
                            if let Value::String(pattern) = &cond.value {
                                if let Err(e) = Regex::new(pattern) {
                                    messages.push(Diagnostic::error(format!(
                                        "{}: invalid pattern '{}': {}",
                                        label, pattern, e
                                    )));
                                    valid = false;
                                }
                            }
                        }
                        if valid {
                            rules.push(CompiledRule {
                                condition,
                                output: rule.output,
                            });
                        }
                    }
                    Err(e) => messages.push(Diagnostic::error(format!("{}: {}", label, e))),
                }
            }

            decisions.push(CompiledDecision {
                name: definition.name,
                rules,
                default: definition.default.unwrap_or(Value::Null),
            });
        }

        if messages.iter().any(Diagnostic::is_error) {
            return None;
        }

        messages.push(Diagnostic::info(format!(
            "Compiled model '{}' with {} decision(s)",
            document.model,
            decisions.len()
        )));
        Some(CompiledModel {
            name: document.model,
            source_id: source_id.to_string(),
            decisions,
        })
    }
}

/// A document with nothing but whitespace and comments defines no models
fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

impl ExecutionEngine for RuleListEngine {
    type Model = CompiledModel;

    fn compile(&self, source: &[u8], source_id: &str) -> Result<Compilation<CompiledModel>> {
        let mut messages = Vec::new();

        let text = match std::str::from_utf8(source) {
            Ok(text) => text,
            Err(e) => {
                messages.push(Diagnostic::error(format!(
                    "{}: source is not valid UTF-8: {}",
                    source_id, e
                )));
                return Ok(Compilation::new(Vec::new(), messages));
            }
        };

        if is_blank_document(text) {
            tracing::debug!("Source {} defines no models", source_id);
            return Ok(Compilation::new(Vec::new(), messages));
        }

        let raw: serde_yaml::Value = match serde_yaml::from_str(text) {
            Ok(raw) => raw,
            Err(e) => {
                messages.push(Diagnostic::error(format!("{}: {}", source_id, e)));
                return Ok(Compilation::new(Vec::new(), messages));
            }
        };
        if raw.is_null() {
            return Ok(Compilation::new(Vec::new(), messages));
        }

        let document: ModelDocument = match serde_yaml::from_value(raw) {
            Ok(document) => document,
            Err(e) => {
                messages.push(Diagnostic::error(format!("{}: {}", source_id, e)));
                return Ok(Compilation::new(Vec::new(), messages));
            }
        };

        let models = self
            .compile_document(document, source_id, &mut messages)
            .into_iter()
            .collect();
        Ok(Compilation::new(models, messages))
    }

    fn evaluate_by_name(
        &self,
        model: &CompiledModel,
        context: &EvaluationContext,
        decision_name: &str,
    ) -> Result<EvaluationOutcome> {
        match model.position(decision_name) {
            Some(index) => Ok(evaluator::evaluate(model, context, index + 1, |i| i == index)),
            None => Ok(EvaluationOutcome::default().with_message(Diagnostic::warning(format!(
                "Model '{}' has no decision named '{}'",
                model.name, decision_name
            )))),
        }
    }

    fn evaluate_all(
        &self,
        model: &CompiledModel,
        context: &EvaluationContext,
    ) -> Result<EvaluationOutcome> {
        Ok(evaluator::evaluate(
            model,
            context,
            model.decisions.len(),
            |_| true,
        ))
    }
}
