//! Boolean coercion of raw decision values

use verdict_core::Value;

/// Raw decision output classified for coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecisionValue<'a> {
    Absent,
    Boolean(bool),
    Text(&'a str),
    Numeric(f64),
    /// Arrays, objects and anything else the engine may return
    Other(&'a Value),
}

impl<'a> From<&'a Value> for DecisionValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => DecisionValue::Absent,
            Value::Bool(b) => DecisionValue::Boolean(*b),
            Value::String(s) => DecisionValue::Text(s),
            Value::Number(n) => DecisionValue::Numeric(*n),
            other => DecisionValue::Other(other),
        }
    }
}

impl DecisionValue<'_> {
    /// Canonical boolean for the value
    ///
    /// Text is true only for `true`, `yes` or `1` (trimmed, any case);
    /// numbers only when strictly positive.
    pub fn to_bool(&self) -> bool {
        match self {
            DecisionValue::Absent => false,
            DecisionValue::Boolean(b) => *b,
            DecisionValue::Text(s) => {
                matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1")
            }
            DecisionValue::Numeric(n) => *n > 0.0,
            DecisionValue::Other(_) => true,
        }
    }
}
