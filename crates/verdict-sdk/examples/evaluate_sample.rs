//! Evaluate the sample model
//!
//! Run from the workspace root so `resources/` is found:
//!
//! ```text
//! cargo run -p verdict-sdk --example evaluate_sample
//! ```

use verdict_engine::RuleListEngine;
use verdict_sdk::{DecisionServiceBuilder, EvaluationRequest, EvaluationResponse};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdict_sdk=debug,verdict_repository=debug".into()),
        )
        .init();

    println!("=== Sample Decision ===\n");

    let service = DecisionServiceBuilder::new(RuleListEngine::new())
        .with_resource_root("resources")
        .build()
        .await?;

    let applicants = [(25, 50000, "apply"), (25, 20000, "apply"), (20, 25000, "changeUp")];

    for (age, income, action) in applicants {
        let request = EvaluationRequest::new("sample-decision.dmn")
            .with_decision("Approval Decision")
            .with_input("age", age as i64)
            .with_input("income", income as i64)
            .with_input("action", action);

        match service.evaluate(&request).await {
            EvaluationResponse::Success(result) => println!(
                "age={:<3} income={:<6} action={:<9} -> {} ({})",
                age, income, action, result.value, result.explanation
            ),
            EvaluationResponse::Failure(failure) => {
                println!("age={} income={} -> error: {}", age, income, failure.message)
            }
        }
    }

    Ok(())
}
