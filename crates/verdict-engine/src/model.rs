//! Model document format
//!
//! ```yaml
//! model: Loan Approval
//! decisions:
//!   - name: Approval Decision
//!     rules:
//!       - when: action == "changeUp"
//!         output: true
//!       - when:
//!           all:
//!             - age >= 18
//!             - income >= 30000
//!         output: true
//!     default: false
//! ```

use crate::condition::WhenClause;
use serde::Deserialize;
use verdict_core::Value;

/// Top-level model document
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelDocument {
    /// Model name
    pub model: String,

    /// Decisions in evaluation order
    #[serde(default)]
    pub decisions: Vec<DecisionDefinition>,
}

/// One named decision
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionDefinition {
    pub name: String,

    /// Rules tried in order; the first match supplies the output
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,

    /// Output when no rule matches
    #[serde(default)]
    pub default: Option<Value>,
}

/// A guarded output
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub when: WhenClause,
    pub output: Value,
}
