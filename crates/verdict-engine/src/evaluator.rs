//! Rule evaluation against a context

use crate::compiled::{CompiledDecision, CompiledModel};
use crate::condition::{Operator, ParsedCondition, ParsedConditionGroup, ParsedConditionItem};
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;
use verdict_core::{DecisionResult, Diagnostic, EvaluationContext, EvaluationOutcome, Value};

/// Values visible to conditions: the caller's inputs, then the outputs of
/// decisions evaluated earlier in the same call
struct Scope<'a> {
    context: &'a EvaluationContext,
    outputs: HashMap<String, Value>,
}

impl<'a> Scope<'a> {
    fn new(context: &'a EvaluationContext) -> Self {
        Self {
            context,
            outputs: HashMap::new(),
        }
    }

    fn root(&self, name: &str) -> Option<&Value> {
        self.context.get(name).or_else(|| self.outputs.get(name))
    }

    /// Exact name first, then a dotted path into nested objects
    fn lookup(&self, field: &str) -> Option<&Value> {
        if let Some(value) = self.root(field) {
            return Some(value);
        }

        let mut parts = field.split('.');
        let mut current = self.root(parts.next()?)?;
        for part in parts {
            match current {
                Value::Object(map) => current = map.get(part)?,
                _ => return None,
            }
        }
        Some(current)
    }
}

/// Evaluate the first `count` decisions and report the ones selected by `report`
pub(crate) fn evaluate(
    model: &CompiledModel,
    context: &EvaluationContext,
    count: usize,
    report: impl Fn(usize) -> bool,
) -> EvaluationOutcome {
    let mut scope = Scope::new(context);
    let mut outcome = EvaluationOutcome::default();

    for (index, decision) in model.decisions.iter().enumerate().take(count) {
        let result = evaluate_decision(decision, &scope);
        outcome.messages.extend(result.messages.iter().cloned());
        scope.outputs.insert(decision.name.clone(), result.value.clone());
        if report(index) {
            outcome.decision_results.push(result);
        }
    }

    outcome
}

fn evaluate_decision(decision: &CompiledDecision, scope: &Scope<'_>) -> DecisionResult {
    let mut messages = Vec::new();

    let value = decision
        .rules
        .iter()
        .enumerate()
        .find(|(index, rule)| {
            let label = format!("Decision '{}' rule {}", decision.name, index + 1);
            evaluate_group(&rule.condition, scope, &label, &mut messages)
        })
        .map(|(_, rule)| rule.output.clone())
        .unwrap_or_else(|| decision.default.clone());

    DecisionResult {
        name: decision.name.clone(),
        value,
        messages,
    }
}

fn evaluate_group(
    group: &ParsedConditionGroup,
    scope: &Scope<'_>,
    label: &str,
    messages: &mut Vec<Diagnostic>,
) -> bool {
    let mut holds = |item: &ParsedConditionItem| match item {
        ParsedConditionItem::Condition(cond) => match evaluate_condition(cond, scope) {
            Ok(result) => result,
            Err(text) => {
                messages.push(Diagnostic::error(format!("{}: {}", label, text)));
                false
            }
        },
        ParsedConditionItem::Group(nested) => evaluate_group(nested, scope, label, messages),
    };

    match group {
        ParsedConditionGroup::All(items) => items.iter().all(&mut holds),
        ParsedConditionGroup::Any(items) => items.iter().any(&mut holds),
        ParsedConditionGroup::Not(items) => !items.iter().any(&mut holds),
    }
}

/// Evaluate one condition; `Err` carries the diagnostic text
fn evaluate_condition(cond: &ParsedCondition, scope: &Scope<'_>) -> Result<bool, String> {
    let actual = scope.lookup(&cond.field).unwrap_or(&Value::Null);
    let expected = &cond.value;

    match cond.operator {
        Operator::Eq => Ok(actual == expected),
        Operator::Ne => Ok(actual != expected),
        Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => {
            let ordering = match (actual, expected) {
                (Value::Null, _) | (_, Value::Null) => return Ok(false),
                (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
                (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
                _ => {
                    return Err(format!(
                        "cannot compare '{}' ({}) {} {} ({})",
                        cond.field,
                        actual.type_name(),
                        cond.operator,
                        expected,
                        expected.type_name()
                    ))
                }
            };
            Ok(match (cond.operator, ordering) {
                (_, None) => false,
                (Operator::Gt, Some(o)) => o == Ordering::Greater,
                (Operator::Ge, Some(o)) => o != Ordering::Less,
                (Operator::Lt, Some(o)) => o == Ordering::Less,
                (_, Some(o)) => o != Ordering::Greater,
            })
        }
        Operator::In | Operator::NotIn => {
            let found = match expected {
                Value::Array(items) => items.contains(actual),
                _ => false,
            };
            Ok(found == (cond.operator == Operator::In))
        }
        Operator::Contains => Ok(match (actual, expected) {
            (Value::String(s), Value::String(sub)) => s.contains(sub.as_str()),
            (Value::Array(items), v) => items.contains(v),
            _ => false,
        }),
        Operator::StartsWith => Ok(match (actual, expected) {
            (Value::String(s), Value::String(prefix)) => s.starts_with(prefix.as_str()),
            _ => false,
        }),
        Operator::EndsWith => Ok(match (actual, expected) {
            (Value::String(s), Value::String(suffix)) => s.ends_with(suffix.as_str()),
            _ => false,
        }),
        Operator::Matches => match (actual, expected) {
            (Value::String(s), Value::String(pattern)) => Regex::new(pattern)
                .map(|re| re.is_match(s))
                .map_err(|e| format!("invalid pattern '{}': {}", pattern, e)),
            _ => Ok(false),
        },
    }
}
