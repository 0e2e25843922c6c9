//! Core trait definitions for model resolution
//!
//! A [`ModelResolver`] is one storage location that may hold the bytes of a
//! decision model. Resolvers are combined into an ordered
//! [`ResolverChain`](crate::ResolverChain) and tried until one of them
//! yields bytes.
//!
//! # Examples
//!
//! ```no_run
//! use verdict_repository::{ModelResolver, RootedResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = RootedResolver::new("resources")?;
//!
//! if let Some(source) = resolver.resolve("sample-decision.dmn").await {
//!     println!("found {} bytes at {}", source.bytes.len(), source.location);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

/// Bytes of a model together with where they were found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    /// Human-readable location (`bundle:<ref>` or a filesystem path)
    pub location: String,
    /// Raw model bytes
    pub bytes: Vec<u8>,
}

impl ModelSource {
    pub fn new(location: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            location: location.into(),
            bytes,
        }
    }
}

/// One storage location that may hold model bytes
///
/// # Implementation Notes
///
/// - `resolve` returns `None` when the location has nothing readable for
///   the reference. Unreadable sources are logged and reported as absent.
/// - The reference is an opaque string; each resolver decides how to map
///   it onto its own storage.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait ModelResolver: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Look up the bytes for `model_ref`
    async fn resolve(&self, model_ref: &str) -> Option<ModelSource>;
}
