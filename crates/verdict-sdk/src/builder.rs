//! Builder pattern for DecisionService

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::pipeline::{DecisionService, ModelLoader};
use std::path::PathBuf;
use std::sync::Arc;
use verdict_core::ExecutionEngine;
use verdict_repository::{BundledResolver, ResolverChain};

/// Builder for DecisionService
///
/// The engine is always passed in explicitly; everything else has a
/// default.
///
/// # Example
///
/// ```rust,ignore
/// use verdict_sdk::DecisionServiceBuilder;
/// use verdict_engine::RuleListEngine;
///
/// // Standard chain with resources/ as the root
/// let service = DecisionServiceBuilder::new(RuleListEngine::new())
///     .build()
///     .await?;
///
/// // Custom root, preloaded bundle and cache
/// let service = DecisionServiceBuilder::new(RuleListEngine::new())
///     .with_resource_root("/srv/models")
///     .with_bundle_dir("/opt/verdict/bundle")
///     .enable_cache(true)
///     .build()
///     .await?;
/// ```
pub struct DecisionServiceBuilder<E: ExecutionEngine> {
    engine: Arc<E>,
    config: ServiceConfig,
    bundle: Option<BundledResolver>,
    chain: Option<ResolverChain>,
}

impl<E: ExecutionEngine> DecisionServiceBuilder<E> {
    /// Create a builder around `engine`
    pub fn new(engine: E) -> Self {
        Self::from_arc(Arc::new(engine))
    }

    /// Create a builder around a shared engine
    pub fn from_arc(engine: Arc<E>) -> Self {
        Self {
            engine,
            config: ServiceConfig::default(),
            bundle: None,
            chain: None,
        }
    }

    /// Replace the whole service configuration
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Directory joined with the reference at the last resolution step
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.resolver.resource_root = root.into();
        self
    }

    /// Directory preloaded into the logical bundle at build time
    pub fn with_bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.resolver.bundle_dir = Some(dir.into());
        self
    }

    /// Register one model in the logical bundle
    ///
    /// Registered models take precedence over files of the same name in
    /// the bundle directory.
    pub fn add_model_content(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.bundle
            .get_or_insert_with(BundledResolver::new)
            .register(name, bytes);
        self
    }

    /// Use a custom resolver chain instead of the standard one
    ///
    /// Resource root, bundle directory and registered models are ignored
    /// when a chain is given.
    pub fn with_resolver_chain(mut self, chain: ResolverChain) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Enable the model cache
    pub fn enable_cache(mut self, enable: bool) -> Self {
        self.config.enable_cache = enable;
        self
    }

    /// Build the service
    pub async fn build(self) -> Result<DecisionService<E>> {
        let chain = match self.chain {
            Some(chain) => chain,
            None => {
                self.config
                    .resolver
                    .build_chain_with(self.bundle.unwrap_or_default())
                    .await?
            }
        };

        tracing::info!(
            "Decision service ready (resolvers: {:?}, cache: {})",
            chain.names(),
            self.config.enable_cache
        );

        let mut loader = ModelLoader::new(Arc::clone(&self.engine), chain);
        if self.config.enable_cache {
            loader = loader.with_cache();
        }
        Ok(DecisionService::new(self.engine, loader))
    }
}
