//! Type conversion utilities

use crate::error::ServerError;
use std::collections::HashMap;
use verdict_core::Value;

/// Convert request inputs into decision values
pub(super) fn inputs_to_values(
    inputs: HashMap<String, serde_json::Value>,
) -> Result<HashMap<String, Value>, ServerError> {
    inputs
        .into_iter()
        .map(|(name, json)| {
            Value::try_from(json)
                .map(|value| (name.clone(), value))
                .map_err(|e| ServerError::InvalidRequest(format!("Input '{}': {}", name, e)))
        })
        .collect()
}
