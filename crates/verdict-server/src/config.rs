//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use verdict_sdk::ServiceConfig;

/// Server configuration
///
/// Every field is optional in the sources; missing fields take their
/// default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Directory joined with model references at the last resolution step
    pub resource_root: PathBuf,

    /// Directory preloaded into the logical bundle at startup
    pub bundle_dir: Option<PathBuf>,

    /// Reuse compiled models while their source bytes are unchanged
    pub enable_cache: bool,

    /// Log level for the service crates when `RUST_LOG` is not set
    pub log_level: String,
}

/// Outcome of [`ServerConfig::load`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: ServerConfig,
    /// Why the defaults were used, when the sources could not be assembled
    pub fallback_reason: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            resource_root: PathBuf::from("resources"),
            bundle_dir: None,
            enable_cache: false,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Runs before tracing is set up, so a fallback to defaults is reported
    /// back in [`LoadedConfig::fallback_reason`] instead of being logged.
    pub fn load() -> anyhow::Result<LoadedConfig> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("VERDICT"))
            .build();

        Self::from_build_result(config_result)
    }

    /// Deserialize assembled sources, or fall back to defaults when they
    /// could not be assembled
    pub fn from_build_result(
        result: Result<config::Config, config::ConfigError>,
    ) -> anyhow::Result<LoadedConfig> {
        match result {
            Ok(cfg) => Ok(LoadedConfig {
                config: Self::from_config(cfg)?,
                fallback_reason: None,
            }),
            Err(e) => Ok(LoadedConfig {
                config: Self::default(),
                fallback_reason: Some(e.to_string()),
            }),
        }
    }

    /// Deserialize from already assembled sources
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Listen address
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter for this configuration
    pub fn default_log_filter(&self) -> String {
        format!(
            "verdict_server={level},verdict_sdk={level},verdict_repository={level},tower_http=debug",
            level = self.log_level
        )
    }

    /// Decision service settings carried by this configuration
    pub fn service_config(&self) -> ServiceConfig {
        let mut service = ServiceConfig::new(&self.resource_root).enable_cache(self.enable_cache);
        if let Some(dir) = &self.bundle_dir {
            service = service.with_bundle_dir(dir);
        }
        service
    }
}
