//! Condition types for when clause parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use verdict_core::Value;

/// Comparison operators available in conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Element in literal array
    In,
    /// Element not in literal array
    NotIn,
    /// String or array contains
    Contains,
    /// String starts with
    StartsWith,
    /// String ends with
    EndsWith,
    /// Regex match
    Matches,
}

impl Operator {
    /// Returns true for `>`, `>=`, `<`, `<=`
    pub fn is_ordering(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::Matches => "matches",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A when clause that can be simple (single condition) or complex (all/any/not)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WhenClause {
    /// Single condition expression (e.g., "income >= 50000")
    Simple(String),
    /// Complex condition with logical operators
    Complex(WhenClauseComplex),
}

/// Complex when clause with all/any/not logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct WhenClauseComplex {
    /// All conditions must be true (AND logic)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<WhenClauseItem>>,
    /// At least one condition must be true (OR logic)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any: Option<Vec<WhenClauseItem>>,
    /// Negation of conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Vec<WhenClauseItem>>,
}

/// An item in a when clause can be a simple string or a nested complex clause
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WhenClauseItem {
    /// Simple condition string
    Simple(String),
    /// Nested complex condition
    Complex(WhenClauseComplex),
}

/// A parsed condition ready for evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCondition {
    /// Field path (e.g., "income" or "applicant.age")
    pub field: String,
    /// Comparison operator
    pub operator: Operator,
    /// Literal to compare against
    pub value: Value,
}

impl ParsedCondition {
    pub fn new(field: String, operator: Operator, value: Value) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }
}

impl fmt::Display for ParsedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// Logical grouping of parsed conditions
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedConditionGroup {
    /// All conditions must be true (AND)
    All(Vec<ParsedConditionItem>),
    /// At least one condition must be true (OR)
    Any(Vec<ParsedConditionItem>),
    /// None of the conditions may be true (NOR)
    Not(Vec<ParsedConditionItem>),
}

/// An item in a parsed condition group
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedConditionItem {
    /// Single condition
    Condition(ParsedCondition),
    /// Nested group
    Group(ParsedConditionGroup),
}

impl ParsedConditionGroup {
    /// Get all conditions in this group (flattened)
    pub fn all_conditions(&self) -> Vec<&ParsedCondition> {
        let mut result = Vec::new();
        self.collect_conditions(&mut result);
        result
    }

    fn collect_conditions<'a>(&'a self, result: &mut Vec<&'a ParsedCondition>) {
        let items = match self {
            ParsedConditionGroup::All(items)
            | ParsedConditionGroup::Any(items)
            | ParsedConditionGroup::Not(items) => items,
        };

        for item in items {
            match item {
                ParsedConditionItem::Condition(c) => result.push(c),
                ParsedConditionItem::Group(g) => g.collect_conditions(result),
            }
        }
    }
}
