//! Input binding

use super::guard::guarded;
use crate::error::Result;
use std::collections::HashMap;
use verdict_core::{ExecutionEngine, Value};

/// Bind caller inputs into a fresh engine context
///
/// Names and values are copied as given; no input is required, coerced or
/// rejected here.
pub fn build_context<E: ExecutionEngine>(
    engine: &E,
    inputs: Option<&HashMap<String, Value>>,
) -> Result<verdict_core::EvaluationContext> {
    let mut context = guarded("context creation", || Ok(engine.new_context()))?;

    if let Some(inputs) = inputs {
        for (name, value) in inputs {
            context.set(name.clone(), value.clone());
        }
    }

    tracing::debug!("Bound {} input(s)", context.len());
    Ok(context)
}
