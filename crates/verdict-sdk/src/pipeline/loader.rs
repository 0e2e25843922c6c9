//! Model loading: resolution, compilation and the optional model cache

use super::guard::guarded;
use crate::error::{Result, SdkError};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use verdict_core::ExecutionEngine;
use verdict_repository::{CacheStats, ModelSource, ResolverChain};

/// An executable model produced by one successful compile
pub struct LoadedModel<M> {
    /// Reference the model was loaded for
    pub model_ref: String,
    /// Where the bytes were found
    pub location: String,
    /// Engine handle
    pub model: Arc<M>,
}

impl<M> Clone for LoadedModel<M> {
    fn clone(&self) -> Self {
        Self {
            model_ref: self.model_ref.clone(),
            location: self.location.clone(),
            model: Arc::clone(&self.model),
        }
    }
}

impl<M> fmt::Debug for LoadedModel<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModel")
            .field("model_ref", &self.model_ref)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

struct CachedModel<M> {
    bytes: Vec<u8>,
    model: Arc<M>,
}

/// Compiled models keyed by reference, valid while their bytes are unchanged
struct ModelCache<M> {
    entries: RwLock<HashMap<String, CachedModel<M>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    invalidations: AtomicU64,
}

impl<M> ModelCache<M> {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            invalidations: AtomicU64::new(0),
        }
    }

    async fn get(&self, model_ref: &str, bytes: &[u8]) -> Option<Arc<M>> {
        let entries = self.entries.read().await;
        match entries.get(model_ref) {
            Some(entry) if entry.bytes == bytes => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(&entry.model))
            }
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    async fn insert(&self, model_ref: &str, bytes: Vec<u8>, model: Arc<M>) {
        let mut entries = self.entries.write().await;
        let changed = entries
            .get(model_ref)
            .is_some_and(|previous| previous.bytes != bytes);
        if changed {
            tracing::debug!("Replaced cached model for {}", model_ref);
            self.invalidations.fetch_add(1, Ordering::Relaxed);
        }
        entries.insert(model_ref.to_string(), CachedModel { bytes, model });
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }

    async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            size: self.entries.read().await.len(),
        }
    }
}

/// Resolves references to bytes and compiles them with the engine
pub struct ModelLoader<E: ExecutionEngine> {
    engine: Arc<E>,
    chain: ResolverChain,
    cache: Option<ModelCache<E::Model>>,
}

impl<E: ExecutionEngine> ModelLoader<E> {
    pub fn new(engine: Arc<E>, chain: ResolverChain) -> Self {
        Self {
            engine,
            chain,
            cache: None,
        }
    }

    /// Enable the model cache
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(ModelCache::new());
        self
    }

    pub fn chain(&self) -> &ResolverChain {
        &self.chain
    }

    /// Resolve and compile `model_ref`
    pub async fn load(&self, model_ref: &str) -> Result<LoadedModel<E::Model>> {
        let source = self
            .chain
            .resolve(model_ref)
            .await
            .ok_or_else(|| SdkError::ModelNotFound {
                model_ref: model_ref.to_string(),
            })?;

        if let Some(cache) = &self.cache {
            if let Some(model) = cache.get(model_ref, &source.bytes).await {
                tracing::debug!("Model cache hit for {}", model_ref);
                return Ok(LoadedModel {
                    model_ref: model_ref.to_string(),
                    location: source.location,
                    model,
                });
            }
        }

        let ModelSource { location, bytes } = source;
        let model = Arc::new(self.compile(model_ref, &location, &bytes)?);

        if let Some(cache) = &self.cache {
            cache.insert(model_ref, bytes, Arc::clone(&model)).await;
        }

        Ok(LoadedModel {
            model_ref: model_ref.to_string(),
            location,
            model,
        })
    }

    fn compile(&self, model_ref: &str, location: &str, bytes: &[u8]) -> Result<E::Model> {
        let compilation = guarded("compilation", || self.engine.compile(bytes, location))?;

        if compilation.has_errors() {
            return Err(SdkError::CompilationError {
                model_ref: model_ref.to_string(),
                messages: compilation.errors().map(|m| m.text.clone()).collect(),
            });
        }

        let count = compilation.models.len();
        let model = compilation
            .models
            .into_iter()
            .next()
            .ok_or_else(|| SdkError::ModelNotFound {
                model_ref: model_ref.to_string(),
            })?;
        if count > 1 {
            tracing::warn!(
                "{} compiled into {} models, using the first one",
                model_ref,
                count
            );
        }

        tracing::debug!("Compiled {} from {}", model_ref, location);
        Ok(model)
    }

    /// Cache counters, or `None` when the cache is disabled
    pub async fn cache_stats(&self) -> Option<CacheStats> {
        match &self.cache {
            Some(cache) => Some(cache.stats().await),
            None => None,
        }
    }

    /// Drop every cached model
    pub async fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use verdict_core::{Compilation, Diagnostic, EvaluationContext, EvaluationOutcome};
    use verdict_repository::BundledResolver;

    /// Compiles any source into its text, or fails on `error`
    #[derive(Default)]
    struct TextEngine {
        compiles: AtomicUsize,
    }

    impl ExecutionEngine for TextEngine {
        type Model = String;

        fn compile(&self, source: &[u8], _source_id: &str) -> verdict_core::Result<Compilation<String>> {
            self.compiles.fetch_add(1, Ordering::SeqCst);
            let text = String::from_utf8_lossy(source).into_owned();
            Ok(match text.as_str() {
                "error" => Compilation::new(vec![], vec![Diagnostic::error("bad model")]),
                "empty" => Compilation::new(vec![], vec![]),
                "twice" => Compilation::new(vec!["one".into(), "two".into()], vec![]),
                _ => Compilation::new(vec![text], vec![Diagnostic::warning("ignored")]),
            })
        }

        fn evaluate_by_name(
            &self,
            _model: &String,
            _context: &EvaluationContext,
            _decision_name: &str,
        ) -> verdict_core::Result<EvaluationOutcome> {
            Ok(EvaluationOutcome::default())
        }

        fn evaluate_all(
            &self,
            _model: &String,
            _context: &EvaluationContext,
        ) -> verdict_core::Result<EvaluationOutcome> {
            Ok(EvaluationOutcome::default())
        }
    }

    fn loader(bundle: BundledResolver) -> (Arc<TextEngine>, ModelLoader<TextEngine>) {
        let engine = Arc::new(TextEngine::default());
        let chain = ResolverChain::new().with_resolver(bundle);
        (Arc::clone(&engine), ModelLoader::new(engine, chain))
    }

    #[tokio::test]
    async fn test_load_compiles_resolved_bytes() {
        let (_, loader) = loader(BundledResolver::new().with_resource("m.dmn", "model"));

        let loaded = loader.load("m.dmn").await.unwrap();
        assert_eq!(loaded.model.as_str(), "model");
        assert_eq!(loaded.location, "bundle:m.dmn");
        assert_eq!(loaded.model_ref, "m.dmn");
    }

    #[tokio::test]
    async fn test_missing_model() {
        let (engine, loader) = loader(BundledResolver::new());

        let err = loader.load("missing.dmn").await.unwrap_err();
        assert_eq!(
            err,
            SdkError::ModelNotFound {
                model_ref: "missing.dmn".to_string()
            }
        );
        assert_eq!(engine.compiles.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_compilation_errors() {
        let (_, loader) = loader(BundledResolver::new().with_resource("bad.dmn", "error"));

        match loader.load("bad.dmn").await {
            Err(SdkError::CompilationError { model_ref, messages }) => {
                assert_eq!(model_ref, "bad.dmn");
                assert_eq!(messages, vec!["bad model".to_string()]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_models_is_not_found() {
        let (_, loader) = loader(BundledResolver::new().with_resource("e.dmn", "empty"));

        assert!(matches!(
            loader.load("e.dmn").await,
            Err(SdkError::ModelNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_multiple_models_uses_first() {
        let (_, loader) = loader(BundledResolver::new().with_resource("t.dmn", "twice"));

        let loaded = loader.load("t.dmn").await.unwrap();
        assert_eq!(loaded.model.as_str(), "one");
    }

    #[tokio::test]
    async fn test_without_cache_every_load_compiles() {
        let (engine, loader) = loader(BundledResolver::new().with_resource("m.dmn", "model"));

        loader.load("m.dmn").await.unwrap();
        loader.load("m.dmn").await.unwrap();
        assert_eq!(engine.compiles.load(Ordering::SeqCst), 2);
        assert!(loader.cache_stats().await.is_none());
    }

    #[tokio::test]
    async fn test_cache_reuses_unchanged_model() {
        let (engine, loader) = loader(BundledResolver::new().with_resource("m.dmn", "model"));
        let loader = loader.with_cache();

        let first = loader.load("m.dmn").await.unwrap();
        let second = loader.load("m.dmn").await.unwrap();
        assert!(Arc::ptr_eq(&first.model, &second.model));
        assert_eq!(engine.compiles.load(Ordering::SeqCst), 1);

        let stats = loader.cache_stats().await.unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }

    #[tokio::test]
    async fn test_cache_never_stores_failures() {
        let (engine, loader) = loader(BundledResolver::new().with_resource("bad.dmn", "error"));
        let loader = loader.with_cache();

        assert!(loader.load("bad.dmn").await.is_err());
        assert!(loader.load("bad.dmn").await.is_err());
        assert_eq!(engine.compiles.load(Ordering::SeqCst), 2);
        assert_eq!(loader.cache_stats().await.unwrap().size, 0);
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let (engine, loader) = loader(BundledResolver::new().with_resource("m.dmn", "model"));
        let loader = loader.with_cache();

        loader.load("m.dmn").await.unwrap();
        loader.clear_cache().await;
        loader.load("m.dmn").await.unwrap();
        assert_eq!(engine.compiles.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cache_counts_only_changed_bytes_as_invalidation() {
        let cache = ModelCache::new();
        cache.insert("m.dmn", b"v1".to_vec(), Arc::new("one".to_string())).await;
        cache.insert("m.dmn", b"v1".to_vec(), Arc::new("one".to_string())).await;
        assert_eq!(cache.stats().await.invalidations, 0);

        cache.insert("m.dmn", b"v2".to_vec(), Arc::new("two".to_string())).await;
        let stats = cache.stats().await;
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.size, 1);
    }
}
