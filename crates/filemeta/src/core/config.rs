//! Configuration loading and management.
//!
//! [`ExtractorConfig`] is the single configuration value threaded from application
//! startup into every extractor. It can be loaded from TOML, YAML or JSON files,
//! discovered in the directory hierarchy, or built programmatically. Missing keys
//! always fall back to defaults.

use crate::{FilemetaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the file searched by [`ExtractorConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "filemeta.toml";

/// Default upper bound for files handed to extractors: 500 MiB.
pub const DEFAULT_FILE_SIZE_LIMIT: u64 = 500 * 1024 * 1024;

/// Configuration shared by all extractors of one host process.
///
/// # Example
///
/// ```rust
/// use filemeta::core::config::ExtractorConfig;
///
/// let config = ExtractorConfig::default();
/// assert!(!config.logging);
/// assert!(config.driver_restrictions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Emit diagnostic log entries from extractors.
    #[serde(default)]
    pub logging: bool,

    /// Storage driver identifiers extractors may run against (empty = any driver).
    #[serde(default, alias = "driverRestrictions")]
    pub driver_restrictions: Vec<String>,

    /// Files at or above this many bytes are not processed (0 = no limit).
    #[serde(default = "default_file_size_limit", alias = "fileSizeLimit")]
    pub file_size_limit: u64,

    /// Any other option, kept verbatim for extractors that need it.
    #[serde(flatten)]
    pub options: BTreeMap<String, serde_json::Value>,
}

fn default_file_size_limit() -> u64 {
    DEFAULT_FILE_SIZE_LIMIT
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            logging: false,
            driver_restrictions: Vec::new(),
            file_size_limit: DEFAULT_FILE_SIZE_LIMIT,
            options: BTreeMap::new(),
        }
    }
}

impl ExtractorConfig {
    /// Look up an option that has no dedicated field.
    pub fn option(&self, name: &str) -> Option<&serde_json::Value> {
        self.options.get(name)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `FilemetaError::Validation` if the file cannot be read or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        toml::from_str(&content)
            .map_err(|e| FilemetaError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| FilemetaError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_json::from_str(&content)
            .map_err(|e| FilemetaError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration choosing the format from the file extension.
    ///
    /// `.toml`, `.yaml`/`.yml` and `.json` are recognized.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(FilemetaError::validation(format!(
                "Unsupported config file format: {} (expected .toml, .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }

    /// Discover `filemeta.toml` in the current directory or one of its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let current = std::env::current_dir().map_err(FilemetaError::Io)?;
        Self::discover_from(&current)
    }

    /// Same as [`discover`](Self::discover) starting at `start` instead of the working directory.
    pub fn discover_from(start: &Path) -> Result<Option<Self>> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve the configuration used at startup.
    ///
    /// An explicit configuration wins. Otherwise a discovered `filemeta.toml` is
    /// used, and when none exists the defaults apply. A discovered file that
    /// cannot be parsed is an error rather than a silent fallback.
    pub fn resolve(explicit: Option<Self>) -> Result<Self> {
        if let Some(config) = explicit {
            return Ok(config);
        }

        let current = std::env::current_dir().map_err(FilemetaError::Io)?;
        Self::resolve_from(&current)
    }

    /// [`resolve`](Self::resolve) without an explicit value, discovering from `start`.
    pub fn resolve_from(start: &Path) -> Result<Self> {
        match Self::discover_from(start)? {
            Some(config) => Ok(config),
            None => {
                tracing::debug!("No {} found, using default extractor configuration", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| FilemetaError::validation(format!("Failed to read config file {}: {}", path.display(), e)))
}
