//! Ordered resolver chain

use crate::bundle::BundledResolver;
use crate::file_system::{PathResolver, RootedResolver};
use crate::traits::{ModelResolver, ModelSource};
use crate::RepositoryResult;
use std::path::Path;

/// Resolvers tried in order until one yields bytes
///
/// Once a resolver returns a source, later resolvers are not consulted.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn ModelResolver>>,
}

impl ResolverChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard three-step chain
    ///
    /// 1. the logical bundle, by reference as-is
    /// 2. the reference as a filesystem path
    /// 3. the reference joined onto `resource_root`
    pub fn standard<P: AsRef<Path>>(
        bundle: BundledResolver,
        resource_root: P,
    ) -> RepositoryResult<Self> {
        Ok(Self::new()
            .with_resolver(bundle)
            .with_resolver(PathResolver::new())
            .with_resolver(RootedResolver::new(resource_root)?))
    }

    /// Append a resolver at the end of the chain
    pub fn with_resolver(mut self, resolver: impl ModelResolver + 'static) -> Self {
        self.push(Box::new(resolver));
        self
    }

    /// Append a boxed resolver at the end of the chain
    pub fn push(&mut self, resolver: Box<dyn ModelResolver>) {
        self.resolvers.push(resolver);
    }

    /// Resolver names in the order they are tried
    pub fn names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Find the first resolver that has bytes for `model_ref`
    pub async fn resolve(&self, model_ref: &str) -> Option<ModelSource> {
        for resolver in &self.resolvers {
            tracing::debug!("Trying resolver '{}' for '{}'", resolver.name(), model_ref);
            if let Some(source) = resolver.resolve(model_ref).await {
                tracing::info!(
                    "Resolved model '{}' via '{}' at {}",
                    model_ref,
                    resolver.name(),
                    source.location
                );
                return Some(source);
            }
        }

        tracing::debug!(
            "No resolver produced bytes for '{}' (tried: {})",
            model_ref,
            self.names().join(", ")
        );
        None
    }
}

impl std::fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverChain")
            .field("resolvers", &self.names())
            .finish()
    }
}
