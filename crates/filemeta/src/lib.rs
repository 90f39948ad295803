//! filemeta - priority-ordered metadata extraction for indexed files
//!
//! A file-indexing host hands each file to a pipeline of pluggable metadata
//! extractors. Every extractor declares which storage drivers and file types it
//! applies to, how early it should run and how much its output should be
//! trusted. The pipeline admits, orders, invokes and merges accordingly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use filemeta::core::config::ExtractorConfig;
//! use filemeta::core::io::file_info_from_path;
//! use filemeta::core::pipeline::extract_file_metadata;
//! use filemeta::plugins::registry::ExtractorRegistry;
//! use std::sync::RwLock;
//!
//! # async fn example() -> filemeta::Result<()> {
//! let config = ExtractorConfig::resolve(None)?;
//! let registry = RwLock::new(ExtractorRegistry::new());
//! // register extractors built with `ExtractorBase::new(Arc::new(config.clone()), None, logger)`
//! let file = file_info_from_path("fileadmin/report.pdf", "Local").await?;
//! let outcome = extract_file_metadata(&file, &registry).await?;
//! println!("{:?}", outcome.metadata);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Plugins** (`plugins`): `Plugin`/`MetadataExtractor` traits, shared `ExtractorBase`,
//!   logger and size-validator collaborators, the extractor registry
//! - **Core** (`core`): configuration, MIME matching, file descriptors, the pipeline
//! - **Extractors** (`extractors`): built-in extractors backed by a document-analysis service

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extractors;
pub mod plugins;
pub mod types;

pub use error::{FilemetaError, Result};
pub use types::*;

pub use core::config::ExtractorConfig;
pub use core::pipeline::{extract_file_metadata, extract_file_metadata_global, run_extractors};

pub use plugins::registry::get_extractor_registry;
pub use plugins::{DiagnosticLogger, ExtractorBase, MetadataExtractor, Plugin, SizeValidator, TracingLogger};
