//! Metadata extractor plugin trait.
//!
//! This module defines the contract an extractor must satisfy to take part in
//! the host's priority-ordered extraction pipeline, plus [`ExtractorBase`], the
//! shared state every extractor owns (configuration, size validator, logger).

use crate::Result;
use crate::core::config::ExtractorConfig;
use crate::plugins::Plugin;
use crate::plugins::logger::{DiagnosticLogger, TracingLogger};
use crate::plugins::size::{FileSizeValidator, SizeValidator};
use crate::types::{FileInfo, Metadata};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Level;

/// State shared by all extractors.
///
/// Configuration, size validator and logger are fixed at construction and never
/// replaced. The base holds no per-call state, so one extractor can serve many
/// files concurrently.
#[derive(Clone)]
pub struct ExtractorBase {
    configuration: Arc<ExtractorConfig>,
    size_validator: Arc<dyn SizeValidator>,
    logger: Arc<dyn DiagnosticLogger>,
}

impl ExtractorBase {
    /// Create the base state.
    ///
    /// When `size_validator` is `None`, [`default_size_validator`] builds one from
    /// `configuration`. Construction cannot fail.
    pub fn new(
        configuration: Arc<ExtractorConfig>,
        size_validator: Option<Arc<dyn SizeValidator>>,
        logger: Arc<dyn DiagnosticLogger>,
    ) -> Self {
        let size_validator = size_validator.unwrap_or_else(|| default_size_validator(&configuration));

        Self {
            configuration,
            size_validator,
            logger,
        }
    }

    /// Base state with the default size validator and a [`TracingLogger`].
    pub fn with_defaults(configuration: Arc<ExtractorConfig>) -> Self {
        Self::new(configuration, None, Arc::new(TracingLogger))
    }

    pub fn configuration(&self) -> &ExtractorConfig {
        &self.configuration
    }

    pub fn size_validator(&self) -> &dyn SizeValidator {
        self.size_validator.as_ref()
    }

    /// Driver restrictions from the injected configuration, unmodified.
    pub fn driver_restrictions(&self) -> &[String] {
        &self.configuration.driver_restrictions
    }

    pub fn is_below_size_limit(&self, file: &FileInfo) -> bool {
        self.size_validator.is_below_limit(file)
    }

    /// Emit a diagnostic entry at debug level.
    ///
    /// Does nothing unless `logging` is enabled in the configuration.
    pub fn log(&self, message: &str, data: &Metadata) {
        if !self.configuration.logging {
            return;
        }
        self.logger.log(Level::DEBUG, message, data);
    }

    /// [`log`](Self::log) without structured data.
    pub fn log_message(&self, message: &str) {
        self.log(message, &Metadata::new());
    }
}

impl std::fmt::Debug for ExtractorBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorBase")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}

/// Size validator used when none is injected: the configured `file_size_limit`.
pub fn default_size_validator(configuration: &ExtractorConfig) -> Arc<dyn SizeValidator> {
    Arc::new(FileSizeValidator::from_config(configuration))
}

/// Trait for metadata extractor plugins.
///
/// The host filters registered extractors by [`driver_restrictions`] and
/// [`file_type_restrictions`], orders the survivors by [`execution_priority`]
/// (highest first), asks each one [`can_process`], calls
/// [`extract_metadata`] and finally merges the results so that higher
/// [`priority`] values win on conflicting fields.
///
/// # Priority System
///
/// `priority` ranks how trustworthy an extractor's output is; `execution_priority`
/// orders invocation. Both default to `0` and `execution_priority` follows
/// `priority` unless overridden. Either should be a constant of the implementing
/// type.
///
/// [`driver_restrictions`]: MetadataExtractor::driver_restrictions
/// [`file_type_restrictions`]: MetadataExtractor::file_type_restrictions
/// [`execution_priority`]: MetadataExtractor::execution_priority
/// [`can_process`]: MetadataExtractor::can_process
/// [`extract_metadata`]: MetadataExtractor::extract_metadata
/// [`priority`]: MetadataExtractor::priority
///
/// # Example
///
/// ```rust
/// use filemeta::core::config::ExtractorConfig;
/// use filemeta::plugins::{ExtractorBase, MetadataExtractor, Plugin};
/// use filemeta::types::{FileInfo, Metadata};
/// use filemeta::Result;
/// use async_trait::async_trait;
/// use std::sync::Arc;
///
/// struct PageCounter {
///     base: ExtractorBase,
/// }
///
/// impl Plugin for PageCounter {
///     fn name(&self) -> &str { "page-counter" }
///     fn version(&self) -> String { "1.0.0".to_string() }
///     fn initialize(&self) -> Result<()> { Ok(()) }
///     fn shutdown(&self) -> Result<()> { Ok(()) }
/// }
///
/// #[async_trait]
/// impl MetadataExtractor for PageCounter {
///     fn base(&self) -> &ExtractorBase {
///         &self.base
///     }
///
///     fn file_type_restrictions(&self) -> &[&str] {
///         &["pdf"]
///     }
///
///     fn priority(&self) -> i32 {
///         40
///     }
///
///     async fn extract_metadata(&self, file: &FileInfo, _previous: &Metadata) -> Result<Metadata> {
///         let mut metadata = Metadata::new();
///         metadata.insert("pages".to_string(), serde_json::json!(1));
///         self.base.log(&format!("counted pages of {}", file.name), &metadata);
///         Ok(metadata)
///     }
/// }
///
/// let extractor = PageCounter {
///     base: ExtractorBase::with_defaults(Arc::new(ExtractorConfig::default())),
/// };
/// assert_eq!(extractor.execution_priority(), 40);
/// ```
#[async_trait]
pub trait MetadataExtractor: Plugin {
    /// Shared state owned by the extractor.
    fn base(&self) -> &ExtractorBase;

    /// File-type tags this extractor applies to. Empty means every file type.
    ///
    /// Tags are extensions (`"pdf"`), MIME types (`"application/pdf"`) or MIME
    /// prefix patterns (`"image/*"`).
    fn file_type_restrictions(&self) -> &[&str] {
        &[]
    }

    /// Storage driver identifiers this extractor applies to. Empty means every driver.
    ///
    /// Defaults to the configured `driver_restrictions`.
    fn driver_restrictions(&self) -> &[String] {
        self.base().driver_restrictions()
    }

    /// Data priority: higher values win when extractors produce the same field.
    fn priority(&self) -> i32 {
        0
    }

    /// Execution priority: higher values run first.
    fn execution_priority(&self) -> i32 {
        self.priority()
    }

    /// Final per-file admission check after driver and file-type filtering.
    ///
    /// Defaults to the base size validator.
    fn can_process(&self, file: &FileInfo) -> bool {
        self.base().is_below_size_limit(file)
    }

    /// Extract metadata for `file`.
    ///
    /// `previous` holds what extractors executed earlier produced for the same file.
    async fn extract_metadata(&self, file: &FileInfo, previous: &Metadata) -> Result<Metadata>;
}

/// Register an extractor with the global registry.
///
/// # Errors
///
/// - `FilemetaError::Validation` - Invalid extractor name (empty or contains whitespace)
/// - Any error from the extractor's `initialize()` method
pub fn register_extractor(extractor: Arc<dyn MetadataExtractor>) -> Result<()> {
    use crate::plugins::registry::get_extractor_registry;

    let registry = get_extractor_registry();
    let mut registry = registry.write()?;

    registry.register(extractor)
}

/// Unregister an extractor by name, calling its `shutdown()`.
///
/// Unknown names are not an error.
pub fn unregister_extractor(name: &str) -> Result<()> {
    use crate::plugins::registry::get_extractor_registry;

    let registry = get_extractor_registry();
    let mut registry = registry.write()?;

    registry.remove(name)
}

/// Names of all extractors in the global registry, in execution order.
pub fn list_extractors() -> Result<Vec<String>> {
    use crate::plugins::registry::get_extractor_registry;

    let registry = get_extractor_registry();
    let registry = registry.read()?;

    Ok(registry.list())
}

/// Remove every extractor from the global registry, calling their `shutdown()`.
pub fn clear_extractors() -> Result<()> {
    use crate::plugins::registry::get_extractor_registry;

    let registry = get_extractor_registry();
    let mut registry = registry.write()?;

    registry.shutdown_all()
}
