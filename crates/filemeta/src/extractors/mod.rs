//! Built-in service-backed extractors.
//!
//! All of them delegate to an injected [`ExtractionService`]:
//!
//! - [`ServiceMetadataExtractor`] (data priority 100) - document metadata
//! - [`ServiceTextExtractor`] (data priority 99) - document text content
//! - [`LanguageDetector`] (data priority 98) - document language

use crate::Result;
use crate::core::config::ExtractorConfig;
use crate::plugins::registry::ExtractorRegistry;
use crate::plugins::{DiagnosticLogger, ExtractorBase};
use std::sync::Arc;

pub mod content;
pub mod language;
pub mod metadata;
pub mod service;

pub use content::ServiceTextExtractor;
pub use language::LanguageDetector;
pub use metadata::ServiceMetadataExtractor;
pub use service::ExtractionService;

/// Register the built-in extractors with `registry`, all sharing one configuration,
/// logger and the default size validator.
pub fn register_service_extractors(
    registry: &mut ExtractorRegistry,
    service: Arc<dyn ExtractionService>,
    configuration: Arc<ExtractorConfig>,
    logger: Arc<dyn DiagnosticLogger>,
) -> Result<()> {
    let base = ExtractorBase::new(configuration, None, logger);

    registry.register(Arc::new(ServiceMetadataExtractor::new(base.clone(), Arc::clone(&service))))?;
    registry.register(Arc::new(ServiceTextExtractor::new(base.clone(), Arc::clone(&service))))?;
    registry.register(Arc::new(LanguageDetector::new(base, service)))?;

    Ok(())
}

/// [`register_service_extractors`] against the global registry.
pub fn register_service_extractors_global(
    service: Arc<dyn ExtractionService>,
    configuration: Arc<ExtractorConfig>,
    logger: Arc<dyn DiagnosticLogger>,
) -> Result<()> {
    let registry = crate::plugins::registry::get_extractor_registry();
    let mut registry = registry.write()?;

    register_service_extractors(&mut registry, service, configuration, logger)
}
