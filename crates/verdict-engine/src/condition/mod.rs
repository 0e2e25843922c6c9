//! Condition parsing
//!
//! Rules carry `when` clauses written as short condition strings, optionally
//! grouped with `all` / `any` / `not`.
//!
//! # Syntax
//!
//! ## Simple Conditions
//! ```yaml
//! when: action == "changeUp"
//! when: income >= 50000
//! ```
//!
//! ## Complex Conditions (all/any/not)
//! ```yaml
//! when:
//!   all:
//!     - age >= 18
//!     - income >= 30000
//! ```
//!
//! ## Supported Operators
//! - `==`, `!=`, `>`, `>=`, `<`, `<=`
//! - `in`, `not in` (membership in a literal array)
//! - `contains`, `starts_with`, `ends_with`
//! - `matches` (regular expression)

mod parser;
mod types;

pub use parser::{ConditionParser, ParseError};
pub use types::{
    Operator, ParsedCondition, ParsedConditionGroup, ParsedConditionItem, WhenClause,
    WhenClauseComplex, WhenClauseItem,
};
