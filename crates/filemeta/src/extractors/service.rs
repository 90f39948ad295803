//! Document-analysis service abstraction.
//!
//! The service-backed extractors delegate the actual analysis to an
//! [`ExtractionService`]. How the service is reached (a standalone server, a
//! search server's extracting handler, a local binary) is up to the implementor.

use crate::Result;
use crate::types::{FileInfo, Metadata};
use async_trait::async_trait;

/// A document-analysis backend able to extract metadata and text and detect languages.
///
/// Implementations must be safe to call concurrently for different files.
#[async_trait]
pub trait ExtractionService: Send + Sync {
    /// Short identifier used in diagnostics (e.g. `"tika-server"`).
    fn name(&self) -> &str;

    /// Whether the service can analyse files of this MIME type.
    fn supports_mime_type(&self, mime_type: &str) -> bool;

    /// Extract document metadata.
    ///
    /// # Errors
    ///
    /// `FilemetaError::Service` when the service fails or returns an unusable response.
    async fn extract_metadata(&self, file: &FileInfo) -> Result<Metadata>;

    /// Detect the document language. `None` when the service cannot tell.
    async fn detect_language(&self, file: &FileInfo) -> Result<Option<String>>;

    /// Extract the document's text content. `None` when the file has no text layer.
    async fn extract_text(&self, file: &FileInfo) -> Result<Option<String>>;
}
