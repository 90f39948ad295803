//! Extractor registration and discovery.
//!
//! [`ExtractorRegistry`] keeps extractors bucketed by execution priority. Inside a
//! bucket registration order is preserved, which gives the host a deterministic
//! invocation order without any further tie-breaking.

use crate::core::mime::file_type_admitted;
use crate::plugins::MetadataExtractor;
use crate::types::FileInfo;
use crate::{FilemetaError, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

/// Validate a plugin name before registration.
///
/// # Rules
///
/// - Name cannot be empty
/// - Name cannot contain whitespace
fn validate_plugin_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FilemetaError::validation("Plugin name cannot be empty"));
    }

    if name.contains(char::is_whitespace) {
        return Err(FilemetaError::validation(format!(
            "Plugin name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Whether a driver restriction list admits `driver`. An empty list admits every driver.
pub fn driver_admitted(restrictions: &[String], driver: &str) -> bool {
    restrictions.is_empty() || restrictions.iter().any(|restriction| restriction == driver)
}

/// Registry for metadata extractor plugins.
///
/// # Thread Safety
///
/// The registry itself is a plain value; share it behind `RwLock` (as the global
/// registry does) when several tasks register or look up extractors.
pub struct ExtractorRegistry {
    extractors: BTreeMap<i32, IndexMap<String, Arc<dyn MetadataExtractor>>>,
    name_index: HashMap<String, i32>,
}

impl ExtractorRegistry {
    /// Create a new empty extractor registry.
    pub fn new() -> Self {
        Self {
            extractors: BTreeMap::new(),
            name_index: HashMap::new(),
        }
    }

    /// Register an extractor.
    ///
    /// A registered extractor with the same name is shut down and replaced; the
    /// replacement counts as the most recent registration. Registering the
    /// instance that is already registered only moves it to the end of its bucket.
    ///
    /// # Errors
    ///
    /// - `FilemetaError::Validation` if the name is invalid
    /// - any error returned by the extractor's `initialize()`
    pub fn register(&mut self, extractor: Arc<dyn MetadataExtractor>) -> Result<()> {
        let name = extractor.name().to_string();
        let execution_priority = extractor.execution_priority();

        validate_plugin_name(&name)?;

        extractor.initialize()?;

        // Re-registering the same instance must not shut it down.
        if let Some(previous) = self.detach(&name)
            && !Arc::ptr_eq(&previous, &extractor)
            && let Err(e) = previous.shutdown()
        {
            tracing::warn!("Shutdown of replaced extractor '{}' failed: {}", name, e);
        }

        tracing::debug!(
            "Registered extractor '{}' (priority {}, execution priority {})",
            name,
            extractor.priority(),
            execution_priority
        );

        self.extractors
            .entry(execution_priority)
            .or_default()
            .insert(name.clone(), extractor);
        self.name_index.insert(name, execution_priority);

        Ok(())
    }

    /// Get an extractor by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn MetadataExtractor>> {
        self.name_index
            .get(name)
            .and_then(|priority| self.extractors.get(priority))
            .and_then(|bucket| bucket.get(name))
            .cloned()
            .ok_or_else(|| FilemetaError::plugin(name, format!("Extractor '{}' not registered", name)))
    }

    /// All extractors in execution order: highest execution priority first,
    /// registration order within equal priorities.
    pub fn get_all(&self) -> Vec<Arc<dyn MetadataExtractor>> {
        self.extractors
            .values()
            .rev()
            .flat_map(|bucket| bucket.values().cloned())
            .collect()
    }

    /// Extractors whose driver restrictions admit `driver`, in execution order.
    pub fn extractors_for_driver(&self, driver: &str) -> Vec<Arc<dyn MetadataExtractor>> {
        self.get_all()
            .into_iter()
            .filter(|extractor| driver_admitted(extractor.driver_restrictions(), driver))
            .collect()
    }

    /// Extractors admitted for `file` by driver and file-type restrictions, in execution order.
    ///
    /// `can_process` is not consulted here; that is the pipeline's last step.
    pub fn extractors_for_file(&self, file: &FileInfo) -> Vec<Arc<dyn MetadataExtractor>> {
        self.extractors_for_driver(&file.driver)
            .into_iter()
            .filter(|extractor| file_type_admitted(extractor.file_type_restrictions(), file))
            .collect()
    }

    /// Names of all registered extractors, in execution order.
    pub fn list(&self) -> Vec<String> {
        self.extractors
            .values()
            .rev()
            .flat_map(|bucket| bucket.keys().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.name_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_index.is_empty()
    }

    /// Remove an extractor from the registry, calling its `shutdown()`.
    ///
    /// Removing an unknown name is not an error.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        if let Some(extractor) = self.detach(name) {
            extractor.shutdown()?;
        }

        Ok(())
    }

    /// Take an extractor out of both indexes without shutting it down.
    fn detach(&mut self, name: &str) -> Option<Arc<dyn MetadataExtractor>> {
        let priority = self.name_index.remove(name)?;

        let extractor = self
            .extractors
            .get_mut(&priority)
            .and_then(|bucket| bucket.shift_remove(name));

        if self.extractors.get(&priority).is_some_and(|bucket| bucket.is_empty()) {
            self.extractors.remove(&priority);
        }

        extractor
    }

    /// Shutdown all extractors and clear the registry.
    pub fn shutdown_all(&mut self) -> Result<()> {
        let names = self.list();
        for name in names {
            self.remove(&name)?;
        }
        Ok(())
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global extractor registry singleton.
pub static EXTRACTOR_REGISTRY: Lazy<Arc<RwLock<ExtractorRegistry>>> =
    Lazy::new(|| Arc::new(RwLock::new(ExtractorRegistry::new())));

/// Get the global extractor registry.
pub fn get_extractor_registry() -> Arc<RwLock<ExtractorRegistry>> {
    EXTRACTOR_REGISTRY.clone()
}
