//! Condition string parser
//!
//! Parses condition strings like:
//! - `action == "changeUp"`
//! - `income >= 50000`
//! - `segment in ["retail", "sme"]`

use super::types::{
    Operator, ParsedCondition, ParsedConditionGroup, ParsedConditionItem, WhenClause,
    WhenClauseComplex, WhenClauseItem,
};
use thiserror::Error;
use verdict_core::Value;

/// Parse error
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to parse '{condition}': {message}")]
pub struct ParseError {
    pub message: String,
    pub condition: String,
}

impl ParseError {
    fn new(message: impl Into<String>, condition: &str) -> Self {
        Self {
            message: message.into(),
            condition: condition.to_string(),
        }
    }
}

/// Operators to check, ordered so that longer symbols win over their prefixes
const OPERATORS: [(&str, Operator); 12] = [
    ("!=", Operator::Ne),
    (">=", Operator::Ge),
    ("<=", Operator::Le),
    ("==", Operator::Eq),
    (">", Operator::Gt),
    ("<", Operator::Lt),
    (" not in ", Operator::NotIn),
    (" in ", Operator::In),
    (" contains ", Operator::Contains),
    (" starts_with ", Operator::StartsWith),
    (" ends_with ", Operator::EndsWith),
    (" matches ", Operator::Matches),
];

/// Stateless condition parser
#[derive(Debug, Default, Clone, Copy)]
pub struct ConditionParser;

impl ConditionParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a WhenClause into a ParsedConditionGroup
    pub fn parse_when_clause(&self, when: &WhenClause) -> Result<ParsedConditionGroup, ParseError> {
        match when {
            WhenClause::Simple(expr) => {
                let condition = self.parse_condition(expr)?;
                Ok(ParsedConditionGroup::All(vec![ParsedConditionItem::Condition(
                    condition,
                )]))
            }
            WhenClause::Complex(complex) => self.parse_complex(complex),
        }
    }

    /// Parse a complex when clause; exactly one of all/any/not must be set
    fn parse_complex(&self, complex: &WhenClauseComplex) -> Result<ParsedConditionGroup, ParseError> {
        match (&complex.all, &complex.any, &complex.not) {
            (Some(all), None, None) => Ok(ParsedConditionGroup::All(self.parse_items(all)?)),
            (None, Some(any), None) => Ok(ParsedConditionGroup::Any(self.parse_items(any)?)),
            (None, None, Some(not)) => Ok(ParsedConditionGroup::Not(self.parse_items(not)?)),
            (None, None, None) => Err(ParseError::new(
                "Empty group: expected one of all/any/not",
                "{}",
            )),
            _ => Err(ParseError::new(
                "Ambiguous group: use exactly one of all/any/not and nest the others",
                "{..}",
            )),
        }
    }

    /// Parse a list of when clause items
    fn parse_items(&self, items: &[WhenClauseItem]) -> Result<Vec<ParsedConditionItem>, ParseError> {
        items
            .iter()
            .map(|item| match item {
                WhenClauseItem::Simple(expr) => {
                    self.parse_condition(expr).map(ParsedConditionItem::Condition)
                }
                WhenClauseItem::Complex(nested) => {
                    self.parse_complex(nested).map(ParsedConditionItem::Group)
                }
            })
            .collect()
    }

    /// Parse a single condition string into a ParsedCondition
    pub fn parse_condition(&self, condition: &str) -> Result<ParsedCondition, ParseError> {
        let condition = condition.trim();
        if condition.is_empty() {
            return Err(ParseError::new("Empty condition", condition));
        }

        for (op_str, op) in OPERATORS.iter() {
            if let Some(pos) = find_unquoted(condition, op_str) {
                let field = condition[..pos].trim().to_string();
                let value_str = condition[pos + op_str.len()..].trim();

                if field.is_empty() {
                    return Err(ParseError::new("Empty field name", condition));
                }
                if value_str.is_empty() {
                    return Err(ParseError::new("Missing value", condition));
                }

                let value = self.parse_value(value_str)?;
                if matches!(op, Operator::In | Operator::NotIn) && !matches!(value, Value::Array(_))
                {
                    return Err(ParseError::new(
                        format!("'{}' expects an array literal", op),
                        condition,
                    ));
                }

                return Ok(ParsedCondition::new(field, *op, value));
            }
        }

        Err(ParseError::new("No operator found", condition))
    }

    /// Parse a literal
    ///
    /// Supported formats:
    /// - Quoted strings: `"value"` or `'value'`
    /// - Numbers: `100`, `3.14`, `-42`
    /// - Booleans: `true`, `false`
    /// - Null: `null`
    /// - Arrays: `["a", "b", 1, 2]`
    ///
    /// Anything else is taken as an unquoted string.
    pub fn parse_value(&self, value_str: &str) -> Result<Value, ParseError> {
        let value_str = value_str.trim();

        if value_str.len() >= 2
            && ((value_str.starts_with('"') && value_str.ends_with('"'))
                || (value_str.starts_with('\'') && value_str.ends_with('\'')))
        {
            return Ok(Value::String(value_str[1..value_str.len() - 1].to_string()));
        }

        match value_str {
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            "null" => return Ok(Value::Null),
            _ => {}
        }

        if value_str.starts_with('[') {
            if !value_str.ends_with(']') {
                return Err(ParseError::new("Unterminated array", value_str));
            }
            let elements = self.parse_array_elements(&value_str[1..value_str.len() - 1])?;
            return Ok(Value::Array(elements));
        }

        if let Ok(num) = value_str.parse::<f64>() {
            return Ok(Value::Number(num));
        }

        Ok(Value::String(value_str.to_string()))
    }

    /// Parse array elements from a string like `"a", "b", 1, 2`
    fn parse_array_elements(&self, content: &str) -> Result<Vec<Value>, ParseError> {
        let mut elements = Vec::new();
        let mut current = String::new();
        let mut in_string = false;
        let mut string_char = '"';

        for c in content.chars() {
            match c {
                '"' | '\'' if !in_string => {
                    in_string = true;
                    string_char = c;
                    current.push(c);
                }
                c if c == string_char && in_string => {
                    in_string = false;
                    current.push(c);
                }
                ',' if !in_string => {
                    let trimmed = current.trim();
                    if !trimmed.is_empty() {
                        elements.push(self.parse_value(trimmed)?);
                    }
                    current.clear();
                }
                _ => current.push(c),
            }
        }

        if in_string {
            return Err(ParseError::new("Unterminated string in array", content));
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            elements.push(self.parse_value(trimmed)?);
        }

        Ok(elements)
    }
}

/// Position of the first `op` that does not sit inside a quoted literal
fn find_unquoted(condition: &str, op: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (pos, c) in condition.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if condition[pos..].starts_with(op) => return Some(pos),
            None => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_equality() {
        let cond = ConditionParser::new()
            .parse_condition(r#"action == "changeUp""#)
            .unwrap();
        assert_eq!(cond.field, "action");
        assert_eq!(cond.operator, Operator::Eq);
        assert_eq!(cond.value, Value::from("changeUp"));
    }

    #[test]
    fn test_parse_prefers_two_char_operators() {
        let parser = ConditionParser::new();
        assert_eq!(parser.parse_condition("age >= 18").unwrap().operator, Operator::Ge);
        assert_eq!(parser.parse_condition("age <= 18").unwrap().operator, Operator::Le);
        assert_eq!(parser.parse_condition("age > 18").unwrap().operator, Operator::Gt);
    }

    #[test]
    fn test_parse_field_with_spaces() {
        let cond = ConditionParser::new()
            .parse_condition("Approval Decision == true")
            .unwrap();
        assert_eq!(cond.field, "Approval Decision");
        assert_eq!(cond.value, Value::Bool(true));
    }

    #[test]
    fn test_parse_in_array() {
        let cond = ConditionParser::new()
            .parse_condition(r#"segment in ["retail", 'sme', 3]"#)
            .unwrap();
        assert_eq!(cond.operator, Operator::In);
        assert_eq!(
            cond.value,
            Value::Array(vec![Value::from("retail"), Value::from("sme"), Value::Number(3.0)])
        );
    }

    #[test]
    fn test_operators_inside_literals_are_ignored() {
        let parser = ConditionParser::new();

        let cond = parser.parse_condition(r#"action == "x>=y""#).unwrap();
        assert_eq!(cond.field, "action");
        assert_eq!(cond.operator, Operator::Eq);
        assert_eq!(cond.value, Value::from("x>=y"));

        let cond = parser.parse_condition("note != 'a in b'").unwrap();
        assert_eq!(cond.field, "note");
        assert_eq!(cond.operator, Operator::Ne);
        assert_eq!(cond.value, Value::from("a in b"));

        let cond = parser.parse_condition(r#"tag in ["x==y", "z"]"#).unwrap();
        assert_eq!(cond.field, "tag");
        assert_eq!(cond.operator, Operator::In);
        assert_eq!(cond.value, Value::Array(vec![Value::from("x==y"), Value::from("z")]));
    }

    #[test]
    fn test_operator_only_inside_literal_is_not_found() {
        let err = ConditionParser::new()
            .parse_condition(r#"action "x>=y""#)
            .unwrap_err();
        assert_eq!(err.message, "No operator found");
    }

    #[test]
    fn test_parse_not_in_wins_over_in() {
        let cond = ConditionParser::new()
            .parse_condition(r#"segment not in ["vip"]"#)
            .unwrap();
        assert_eq!(cond.operator, Operator::NotIn);
        assert_eq!(cond.field, "segment");
    }

    #[test]
    fn test_in_requires_array() {
        let err = ConditionParser::new()
            .parse_condition(r#"segment in "retail""#)
            .unwrap_err();
        assert!(err.message.contains("array"));
    }

    #[test]
    fn test_parse_value_literals() {
        let parser = ConditionParser::new();
        assert_eq!(parser.parse_value("null").unwrap(), Value::Null);
        assert_eq!(parser.parse_value("-42").unwrap(), Value::Number(-42.0));
        assert_eq!(parser.parse_value("3.5").unwrap(), Value::Number(3.5));
        assert_eq!(parser.parse_value("'x'").unwrap(), Value::from("x"));
        assert_eq!(parser.parse_value("bare").unwrap(), Value::from("bare"));
    }

    #[test]
    fn test_parse_errors() {
        let parser = ConditionParser::new();
        assert_eq!(parser.parse_condition("").unwrap_err().message, "Empty condition");
        assert_eq!(
            parser.parse_condition("== 5").unwrap_err().message,
            "Empty field name"
        );
        assert_eq!(
            parser.parse_condition("just words").unwrap_err().message,
            "No operator found"
        );
        assert_eq!(parser.parse_condition("age >=").unwrap_err().message, "Missing value");
        assert!(parser.parse_condition("x in [1, 2").is_err());
    }

    #[test]
    fn test_parse_complex_group() {
        let when = WhenClause::Complex(WhenClauseComplex {
            any: Some(vec![
                WhenClauseItem::Simple("income >= 50000".to_string()),
                WhenClauseItem::Complex(WhenClauseComplex {
                    all: Some(vec![
                        WhenClauseItem::Simple("age >= 18".to_string()),
                        WhenClauseItem::Simple("income >= 30000".to_string()),
                    ]),
                    ..Default::default()
                }),
            ]),
            ..Default::default()
        });

        let group = ConditionParser::new().parse_when_clause(&when).unwrap();
        assert!(matches!(group, ParsedConditionGroup::Any(ref items) if items.len() == 2));
        assert_eq!(group.all_conditions().len(), 3);
    }

    #[test]
    fn test_parse_complex_rejects_ambiguous_group() {
        let when = WhenClause::Complex(WhenClauseComplex {
            all: Some(vec![WhenClauseItem::Simple("a == 1".to_string())]),
            any: Some(vec![WhenClauseItem::Simple("b == 1".to_string())]),
            not: None,
        });
        assert!(ConditionParser::new().parse_when_clause(&when).is_err());
    }
}
