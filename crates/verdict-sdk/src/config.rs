//! Configuration types for DecisionService

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use verdict_repository::ResolverConfig;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Where models are resolved from
    #[serde(flatten)]
    pub resolver: ResolverConfig,

    /// Reuse compiled models while their source bytes are unchanged
    #[serde(default)]
    pub enable_cache: bool,
}

impl ServiceConfig {
    /// Create a configuration with the given resource root
    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            resolver: ResolverConfig::new(resource_root),
            enable_cache: false,
        }
    }

    /// Preload `dir` into the logical bundle
    pub fn with_bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resolver = self.resolver.with_bundle_dir(dir);
        self
    }

    /// Enable the model cache
    pub fn enable_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }
}
