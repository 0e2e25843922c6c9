//! Engine call guard

use crate::error::{Result, SdkError};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run one engine call, turning faults and panics into `UnexpectedFailure`
pub(crate) fn guarded<T>(
    operation: &str,
    call: impl FnOnce() -> verdict_core::Result<T>,
) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            tracing::warn!("Engine {} failed: {}", operation, err);
            Err(SdkError::UnexpectedFailure(err.to_string()))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!("Engine {} panicked: {}", operation, message);
            Err(SdkError::UnexpectedFailure(format!(
                "engine panicked during {}: {}",
                operation, message
            )))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
