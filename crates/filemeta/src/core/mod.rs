//! Host-side orchestration.
//!
//! - **Configuration** (`config`): the single [`ExtractorConfig`] injected into every extractor
//! - **MIME** (`mime`): MIME detection and file-type restriction matching
//! - **I/O** (`io`): building [`FileInfo`](crate::types::FileInfo) descriptors from paths
//! - **Pipeline** (`pipeline`): admission, ordering, invocation and merge of extractor output
//!
//! # Example
//!
//! ```rust,no_run
//! use filemeta::core::config::ExtractorConfig;
//! use filemeta::core::io::file_info_from_path;
//! use filemeta::core::pipeline::extract_file_metadata_global;
//!
//! # async fn example() -> filemeta::Result<()> {
//! let config = ExtractorConfig::resolve(None)?;
//! let file = file_info_from_path("fileadmin/report.pdf", "Local").await?;
//! let outcome = extract_file_metadata_global(&file).await?;
//! println!("{} fields (logging: {})", outcome.metadata.len(), config.logging);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod io;
pub mod mime;
pub mod pipeline;

pub use config::ExtractorConfig;
pub use pipeline::{extract_file_metadata, extract_file_metadata_global, run_extractors};
