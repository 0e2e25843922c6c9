//! Model source resolution for the Verdict decision service
//!
//! This crate turns an opaque model reference into the raw bytes of a
//! decision model by walking an ordered chain of storage locations.
//!
//! # Features
//!
//! - **Bundled resources**: a logical registry preloaded at startup
//! - **Direct paths**: the reference read as a filesystem path
//! - **Resource root**: the reference joined onto a fixed directory
//! - **Pluggable**: any [`ModelResolver`] can be added to a chain
//!
//! # Quick Start
//!
//! ```no_run
//! use verdict_repository::{BundledResolver, ResolverChain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let chain = ResolverChain::standard(BundledResolver::new(), "resources")?;
//!
//!     match chain.resolve("sample-decision.dmn").await {
//!         Some(source) => println!("loaded from {}", source.location),
//!         None => println!("not found"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        Model Loader          │
//! └──────────────┬───────────────┘
//!                │ ResolverChain::resolve
//!                ↓
//! ┌──────────────────────────────┐
//! │  1. BundledResolver          │  exact logical name
//! │  2. PathResolver             │  reference as a path
//! │  3. RootedResolver           │  resource_root / reference
//! └──────────────────────────────┘
//!          first hit wins
//! ```

pub mod bundle;
pub mod chain;
pub mod config;
pub mod error;
pub mod file_system;
pub mod models;
pub mod traits;

pub use bundle::BundledResolver;
pub use chain::ResolverChain;
pub use config::ResolverConfig;
pub use error::{RepositoryError, RepositoryResult};
pub use file_system::{PathResolver, RootedResolver};
pub use models::CacheStats;
pub use traits::{ModelResolver, ModelSource};
