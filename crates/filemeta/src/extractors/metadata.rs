//! Service-backed metadata extractor.

use crate::Result;
use crate::extractors::service::ExtractionService;
use crate::plugins::{ExtractorBase, MetadataExtractor, Plugin};
use crate::types::{FileInfo, Metadata};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Data priority of [`ServiceMetadataExtractor`].
pub const SERVICE_METADATA_PRIORITY: i32 = 100;

/// Copies the metadata reported by an [`ExtractionService`] into the index.
///
/// Admits files the service supports that are below the configured size limit.
/// Fields with `null` values are dropped so they cannot shadow values from
/// lower-priority extractors.
pub struct ServiceMetadataExtractor {
    base: ExtractorBase,
    service: Arc<dyn ExtractionService>,
}

impl ServiceMetadataExtractor {
    pub fn new(base: ExtractorBase, service: Arc<dyn ExtractionService>) -> Self {
        Self { base, service }
    }
}

impl Plugin for ServiceMetadataExtractor {
    fn name(&self) -> &str {
        "service-metadata"
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
        "Extracts document metadata through a document-analysis service"
    }
}

#[async_trait]
impl MetadataExtractor for ServiceMetadataExtractor {
    fn base(&self) -> &ExtractorBase {
        &self.base
    }

    fn priority(&self) -> i32 {
        SERVICE_METADATA_PRIORITY
    }

    fn can_process(&self, file: &FileInfo) -> bool {
        self.base.is_below_size_limit(file) && self.service.supports_mime_type(&file.mime_type)
    }

    async fn extract_metadata(&self, file: &FileInfo, _previous: &Metadata) -> Result<Metadata> {
        let reported = self.service.extract_metadata(file).await?;
        let reported_count = reported.len();

        let metadata: Metadata = reported.into_iter().filter(|(_, value)| !value.is_null()).collect();

        let mut data = Metadata::new();
        data.insert("file".to_string(), json!(file.identifier));
        data.insert("service".to_string(), json!(self.service.name()));
        data.insert("reported".to_string(), json!(reported_count));
        data.insert("kept".to_string(), json!(metadata.len()));
        self.base.log("Extracted metadata", &data);

        Ok(metadata)
    }
}
