//! Error types for filemeta.
//!
//! All fallible operations return [`FilemetaError`]:
//!
//! - `Io` errors from the file system always bubble up unchanged.
//! - `Validation` covers invalid plugin names, unreadable or malformed configuration files.
//! - `Service` wraps failures reported by a document-analysis service.
//! - `Plugin` carries the name of the extractor that failed.
//!
//! Accessors on extractors (restrictions, priorities) and diagnostic logging never
//! produce errors; only registration, configuration loading and the extraction
//! step itself can fail.
//!
//! # Example
//!
//! ```rust
//! use filemeta::{FilemetaError, Result};
//!
//! fn require_driver(driver: &str) -> Result<()> {
//!     if driver.is_empty() {
//!         return Err(FilemetaError::validation("driver identifier cannot be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_driver("Local").is_ok());
//! ```
use thiserror::Error;

/// Result type alias using `FilemetaError`.
pub type Result<T> = std::result::Result<T, FilemetaError>;

/// Main error type for all filemeta operations.
#[derive(Debug, Error)]
pub enum FilemetaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Extraction service error: {message}")]
    Service {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Plugin error in '{plugin_name}': {message}")]
    Plugin { message: String, plugin_name: String },

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for FilemetaError {
    fn from(err: serde_json::Error) -> Self {
        FilemetaError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for FilemetaError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        FilemetaError::LockPoisoned(err.to_string())
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl FilemetaError {
    error_constructor!(validation, Validation);
    error_constructor!(serialization, Serialization);
    error_constructor!(service, Service);

    /// Create a plugin error attributed to `plugin_name`.
    pub fn plugin<M: Into<String>, N: Into<String>>(plugin_name: N, message: M) -> Self {
        Self::Plugin {
            message: message.into(),
            plugin_name: plugin_name.into(),
        }
    }
}
