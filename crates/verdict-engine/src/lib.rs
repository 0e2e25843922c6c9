//! Verdict Engine - Reference execution engine
//!
//! Models are YAML documents holding an ordered list of decisions. Each
//! decision is a list of guarded outputs tried top to bottom, with an
//! optional default:
//!
//! ```yaml
//! model: Loan Approval
//! decisions:
//!   - name: Approval Decision
//!     rules:
//!       - when: income >= 50000
//!         output: true
//!     default: false
//! ```
//!
//! Condition errors met during evaluation (for example ordering a string
//! against a number) are reported as error diagnostics rather than
//! failures, so callers see them through the usual outcome messages.

pub mod compiled;
pub mod condition;
pub mod engine;
mod evaluator;
pub mod model;

pub use compiled::{CompiledDecision, CompiledModel, CompiledRule};
pub use condition::{ConditionParser, ParseError};
pub use engine::RuleListEngine;
pub use model::ModelDocument;
