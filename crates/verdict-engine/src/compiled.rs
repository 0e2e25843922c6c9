//! Executable model representation

use crate::condition::ParsedConditionGroup;
use verdict_core::Value;

/// A compiled model ready for evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledModel {
    pub name: String,
    pub source_id: String,
    pub decisions: Vec<CompiledDecision>,
}

impl CompiledModel {
    /// Position of a decision by exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.decisions.iter().position(|d| d.name == name)
    }

    pub fn decision_names(&self) -> Vec<&str> {
        self.decisions.iter().map(|d| d.name.as_str()).collect()
    }
}

/// A compiled decision
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDecision {
    pub name: String,
    pub rules: Vec<CompiledRule>,
    pub default: Value,
}

/// A compiled rule
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRule {
    pub condition: ParsedConditionGroup,
    pub output: Value,
}
