//! Decision service initialization

use crate::config::ServerConfig;
use anyhow::Result;
use verdict_engine::RuleListEngine;
use verdict_sdk::{DecisionService, DecisionServiceBuilder};

/// Build the decision service described by `config`
pub async fn init_service(config: &ServerConfig) -> Result<DecisionService<RuleListEngine>> {
    tracing::info!(
        "Resolving models from bundle {:?} then resource root {}",
        config.bundle_dir,
        config.resource_root.display()
    );

    let service = DecisionServiceBuilder::new(RuleListEngine::new())
        .with_config(config.service_config())
        .build()
        .await?;

    Ok(service)
}
