//! File system based resolvers

use async_trait::async_trait;
use path_absolutize::Absolutize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{error::RepositoryError, traits::*, RepositoryResult};

/// Resolves a reference as a filesystem path
///
/// Relative references are interpreted against the process working
/// directory.
#[derive(Debug, Clone, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModelResolver for PathResolver {
    fn name(&self) -> &str {
        "path"
    }

    async fn resolve(&self, model_ref: &str) -> Option<ModelSource> {
        read_model_file(Path::new(model_ref)).await
    }
}

/// Resolves a reference relative to a fixed resource root
pub struct RootedResolver {
    /// Absolute root directory
    root_path: PathBuf,
}

impl RootedResolver {
    /// Create a resolver rooted at `root_path`
    ///
    /// The root does not need to exist yet; references simply resolve to
    /// nothing until it does.
    ///
    /// # Example
    /// ```no_run
    /// use verdict_repository::RootedResolver;
    ///
    /// let resolver = RootedResolver::new("resources").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        let path = root_path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        Ok(Self {
            root_path: abs_path,
        })
    }

    /// Absolute root directory
    pub fn root(&self) -> &Path {
        &self.root_path
    }
}

#[async_trait]
impl ModelResolver for RootedResolver {
    fn name(&self) -> &str {
        "resource-root"
    }

    async fn resolve(&self, model_ref: &str) -> Option<ModelSource> {
        read_model_file(&self.root_path.join(model_ref)).await
    }
}

/// Read a model file, treating anything unreadable as absent
async fn read_model_file(path: &Path) -> Option<ModelSource> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            tracing::debug!("Skipping {}: not a regular file", path.display());
            return None;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("Cannot stat {}: {}", path.display(), e);
            return None;
        }
    }

    match fs::read(path).await {
        Ok(bytes) => Some(ModelSource::new(path.display().to_string(), bytes)),
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_path_resolver_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("model.dmn");
        fs::write(&file, "model: m").await.unwrap();

        let source = PathResolver::new()
            .resolve(file.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(source.bytes, b"model: m".to_vec());
        assert_eq!(source.location, file.display().to_string());
    }

    #[tokio::test]
    async fn test_path_resolver_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("missing.dmn");

        assert!(PathResolver::new().resolve(file.to_str().unwrap()).await.is_none());
    }

    #[tokio::test]
    async fn test_path_resolver_skips_directories() {
        let temp_dir = TempDir::new().unwrap();

        assert!(PathResolver::new()
            .resolve(temp_dir.path().to_str().unwrap())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_rooted_resolver_joins_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("credit")).await.unwrap();
        fs::write(temp_dir.path().join("credit/approval.dmn"), "model: a")
            .await
            .unwrap();

        let resolver = RootedResolver::new(temp_dir.path()).unwrap();
        let source = resolver.resolve("credit/approval.dmn").await.unwrap();
        assert_eq!(source.bytes, b"model: a".to_vec());
        assert!(resolver.resolve("approval.dmn").await.is_none());
    }

    #[test]
    fn test_rooted_resolver_absolutizes_root() {
        let resolver = RootedResolver::new("resources").unwrap();
        assert!(resolver.root().is_absolute());
        assert!(resolver.root().ends_with("resources"));
    }

    #[test]
    fn test_rooted_resolver_rejects_empty_root() {
        assert!(matches!(
            RootedResolver::new(""),
            Err(RepositoryError::InvalidPath { .. })
        ));
    }
}
