//! Logical resource registry
//!
//! The bundle plays the role of packaged application resources: models are
//! registered under a logical name (a `/`-separated relative path) either
//! programmatically or by preloading a directory at startup. Lookup is an
//! exact match on the reference as given.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{error::RepositoryError, traits::*, RepositoryResult};

/// In-memory registry of models keyed by logical name
#[derive(Debug, Clone, Default)]
pub struct BundledResolver {
    resources: HashMap<String, Vec<u8>>,
}

impl BundledResolver {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under a logical name
    pub fn with_resource(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.register(name, bytes);
        self
    }

    /// Register a resource under a logical name, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), bytes.into());
    }

    /// Preload every file below `dir`
    ///
    /// Each file is registered under its path relative to `dir`, with `/`
    /// as the separator on every platform.
    ///
    /// # Example
    /// ```no_run
    /// use verdict_repository::BundledResolver;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // models/credit/approval.dmn is registered as "credit/approval.dmn"
    /// let bundle = BundledResolver::from_directory("models").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_directory<P: AsRef<Path>>(dir: P) -> RepositoryResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RepositoryError::InvalidPath {
                path: dir.to_path_buf(),
            });
        }

        let mut bundle = Self::new();
        let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            let mut entries = fs::read_dir(&current).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                    continue;
                }

                let name = logical_name(dir, &path)?;
                let bytes = fs::read(&path).await?;
                tracing::debug!("Bundled model resource '{}' ({} bytes)", name, bytes.len());
                bundle.register(name, bytes);
            }
        }

        tracing::info!(
            "Loaded {} bundled model resource(s) from {}",
            bundle.len(),
            dir.display()
        );
        Ok(bundle)
    }

    /// Move every resource of `other` into this bundle; `other` wins on
    /// name clashes
    pub fn merge(&mut self, other: BundledResolver) {
        self.resources.extend(other.resources);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

fn logical_name(root: &Path, path: &Path) -> RepositoryResult<String> {
    let relative = path.strip_prefix(root).map_err(|_| RepositoryError::InvalidPath {
        path: path.to_path_buf(),
    })?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

#[async_trait]
impl ModelResolver for BundledResolver {
    fn name(&self) -> &str {
        "bundle"
    }

    async fn resolve(&self, model_ref: &str) -> Option<ModelSource> {
        self.resources
            .get(model_ref)
            .map(|bytes| ModelSource::new(format!("bundle:{}", model_ref), bytes.clone()))
    }
}
