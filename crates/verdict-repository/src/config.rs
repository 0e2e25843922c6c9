//! Resolver configuration

use crate::bundle::BundledResolver;
use crate::chain::ResolverChain;
use crate::RepositoryResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the standard resolver chain looks for models
///
/// # Examples
///
/// ```rust
/// use verdict_repository::ResolverConfig;
///
/// // Defaults: empty bundle, resource root "resources"
/// let config = ResolverConfig::default();
///
/// // Preload a bundle directory and use a custom resource root
/// let config = ResolverConfig::new("/srv/models").with_bundle_dir("/opt/verdict/bundle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Root joined with the reference at the last step of the chain
    #[serde(default = "default_resource_root")]
    pub resource_root: PathBuf,

    /// Directory preloaded into the logical bundle at startup
    #[serde(default)]
    pub bundle_dir: Option<PathBuf>,
}

fn default_resource_root() -> PathBuf {
    PathBuf::from("resources")
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resource_root: default_resource_root(),
            bundle_dir: None,
        }
    }
}

impl ResolverConfig {
    /// Create a configuration with the given resource root
    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            resource_root: resource_root.into(),
            bundle_dir: None,
        }
    }

    /// Preload `dir` into the logical bundle
    pub fn with_bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = Some(dir.into());
        self
    }

    /// Build the standard chain described by this configuration
    pub async fn build_chain(&self) -> RepositoryResult<ResolverChain> {
        self.build_chain_with(BundledResolver::new()).await
    }

    /// Build the standard chain, adding `registered` to the preloaded bundle
    ///
    /// Entries in `registered` win over bundle directory files of the same
    /// name.
    pub async fn build_chain_with(
        &self,
        registered: BundledResolver,
    ) -> RepositoryResult<ResolverChain> {
        let mut bundle = match &self.bundle_dir {
            Some(dir) => BundledResolver::from_directory(dir).await?,
            None => BundledResolver::new(),
        };
        bundle.merge(registered);
        ResolverChain::standard(bundle, &self.resource_root)
    }
}
