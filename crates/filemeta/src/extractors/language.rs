//! Service-backed language detection.

use crate::Result;
use crate::extractors::service::ExtractionService;
use crate::plugins::{ExtractorBase, MetadataExtractor, Plugin};
use crate::types::{FileInfo, Metadata};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Data priority of [`LanguageDetector`].
pub const LANGUAGE_DETECTOR_PRIORITY: i32 = 98;

/// Metadata field written by [`LanguageDetector`].
pub const LANGUAGE_FIELD: &str = "language";

/// Writes the document language detected by an [`ExtractionService`].
pub struct LanguageDetector {
    base: ExtractorBase,
    service: Arc<dyn ExtractionService>,
}

impl LanguageDetector {
    pub fn new(base: ExtractorBase, service: Arc<dyn ExtractionService>) -> Self {
        Self { base, service }
    }
}

impl Plugin for LanguageDetector {
    fn name(&self) -> &str {
        "language-detector"
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
        "Detects the document language through a document-analysis service"
    }
}

#[async_trait]
impl MetadataExtractor for LanguageDetector {
    fn base(&self) -> &ExtractorBase {
        &self.base
    }

    fn priority(&self) -> i32 {
        LANGUAGE_DETECTOR_PRIORITY
    }

    fn can_process(&self, file: &FileInfo) -> bool {
        self.base.is_below_size_limit(file) && self.service.supports_mime_type(&file.mime_type)
    }

    async fn extract_metadata(&self, file: &FileInfo, _previous: &Metadata) -> Result<Metadata> {
        let mut metadata = Metadata::new();

        match self.service.detect_language(file).await? {
            Some(language) if !language.trim().is_empty() => {
                let language = language.trim().to_ascii_lowercase();

                let mut data = Metadata::new();
                data.insert("file".to_string(), json!(file.identifier));
                data.insert(LANGUAGE_FIELD.to_string(), json!(language));
                self.base.log("Detected language", &data);

                metadata.insert(LANGUAGE_FIELD.to_string(), json!(language));
            }
            _ => {
                let mut data = Metadata::new();
                data.insert("file".to_string(), json!(file.identifier));
                self.base.log("No language detected", &data);
            }
        }

        Ok(metadata)
    }
}
