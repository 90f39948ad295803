//! Plugin system for metadata extractors.
//!
//! # Plugin Types
//!
//! - [`Plugin`] - Base lifecycle trait every extractor implements
//! - [`MetadataExtractor`] - Extraction contract: restrictions, priorities, extraction
//!
//! # Collaborators
//!
//! Every extractor owns an [`ExtractorBase`] built from three collaborators:
//!
//! - the shared [`ExtractorConfig`](crate::core::config::ExtractorConfig)
//! - a [`SizeValidator`] (defaulted from the configuration when not injected)
//! - a [`DiagnosticLogger`] (required; [`TracingLogger`] forwards to `tracing`)
//!
//! # Lifecycle Pattern
//!
//! Extractors are stored in `Arc<dyn MetadataExtractor>` and registered with an
//! [`ExtractorRegistry`](registry::ExtractorRegistry), which calls `initialize()`
//! on registration and `shutdown()` on removal:
//!
//! ```rust
//! use filemeta::core::config::ExtractorConfig;
//! use filemeta::plugins::registry::ExtractorRegistry;
//! use filemeta::plugins::{ExtractorBase, MetadataExtractor, Plugin};
//! use filemeta::types::{FileInfo, Metadata};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct NameExtractor {
//!     base: ExtractorBase,
//! }
//!
//! impl Plugin for NameExtractor {
//!     fn name(&self) -> &str { "name-extractor" }
//!     fn version(&self) -> String { "1.0.0".to_string() }
//!     fn initialize(&self) -> filemeta::Result<()> { Ok(()) }
//!     fn shutdown(&self) -> filemeta::Result<()> { Ok(()) }
//! }
//!
//! #[async_trait]
//! impl MetadataExtractor for NameExtractor {
//!     fn base(&self) -> &ExtractorBase { &self.base }
//!
//!     async fn extract_metadata(&self, file: &FileInfo, _: &Metadata) -> filemeta::Result<Metadata> {
//!         let mut metadata = Metadata::new();
//!         metadata.insert("title".to_string(), serde_json::json!(file.name));
//!         Ok(metadata)
//!     }
//! }
//!
//! let config = Arc::new(ExtractorConfig::default());
//! let mut registry = ExtractorRegistry::new();
//! registry.register(Arc::new(NameExtractor { base: ExtractorBase::with_defaults(config) }))?;
//! assert_eq!(registry.list(), vec!["name-extractor"]);
//! # Ok::<(), filemeta::FilemetaError>(())
//! ```

mod extractor;
pub mod logger;
pub mod registry;
pub mod size;
mod traits;

pub use extractor::{
    ExtractorBase, MetadataExtractor, clear_extractors, default_size_validator, list_extractors, register_extractor,
    unregister_extractor,
};
pub use logger::{DiagnosticLogger, TracingLogger};
pub use size::{FileSizeValidator, SizeValidator};
pub use traits::Plugin;
