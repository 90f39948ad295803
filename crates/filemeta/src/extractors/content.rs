//! Service-backed text content extraction.

use crate::Result;
use crate::extractors::service::ExtractionService;
use crate::plugins::{ExtractorBase, MetadataExtractor, Plugin};
use crate::types::{FileInfo, Metadata};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Data priority of [`ServiceTextExtractor`].
pub const SERVICE_TEXT_PRIORITY: i32 = 99;

/// Metadata field written by [`ServiceTextExtractor`].
pub const CONTENT_FIELD: &str = "content";

/// Writes the text content reported by an [`ExtractionService`] under `content`.
///
/// Surrounding whitespace is trimmed; empty text produces no field.
pub struct ServiceTextExtractor {
    base: ExtractorBase,
    service: Arc<dyn ExtractionService>,
}

impl ServiceTextExtractor {
    pub fn new(base: ExtractorBase, service: Arc<dyn ExtractionService>) -> Self {
        Self { base, service }
    }
}

impl Plugin for ServiceTextExtractor {
    fn name(&self) -> &str {
        "service-text"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> &str {
        "Extracts document text through a document-analysis service"
    }
}

#[async_trait]
impl MetadataExtractor for ServiceTextExtractor {
    fn base(&self) -> &ExtractorBase {
        &self.base
    }

    fn priority(&self) -> i32 {
        SERVICE_TEXT_PRIORITY
    }

    fn can_process(&self, file: &FileInfo) -> bool {
        self.base.is_below_size_limit(file) && self.service.supports_mime_type(&file.mime_type)
    }

    async fn extract_metadata(&self, file: &FileInfo, _previous: &Metadata) -> Result<Metadata> {
        let mut metadata = Metadata::new();

        let text = self.service.extract_text(file).await?;
        let text = text.as_deref().map(str::trim).unwrap_or_default();

        let mut data = Metadata::new();
        data.insert("file".to_string(), json!(file.identifier));
        data.insert("characters".to_string(), json!(text.chars().count()));
        self.base.log("Extracted text", &data);

        if !text.is_empty() {
            metadata.insert(CONTENT_FIELD.to_string(), json!(text));
        }

        Ok(metadata)
    }
}
