//! File I/O utilities.
//!
//! Builds [`FileInfo`] descriptors for files on a local file system so hosts and
//! tests do not have to assemble them by hand.

use crate::core::mime::detect_mime_type;
use crate::types::FileInfo;
use crate::{FilemetaError, Result};
use std::path::Path;

/// Check if a file exists.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Validate that a file exists.
///
/// # Errors
///
/// Returns `FilemetaError::Validation` if file doesn't exist.
pub fn validate_file_exists(path: impl AsRef<Path>) -> Result<()> {
    if !file_exists(&path) {
        return Err(FilemetaError::validation(format!(
            "File does not exist: {}",
            path.as_ref().display()
        )));
    }
    Ok(())
}

/// Describe a file asynchronously.
///
/// # Errors
///
/// Returns `FilemetaError::Validation` if the file doesn't exist or is a directory,
/// and `FilemetaError::Io` for other I/O errors (these always bubble up).
pub async fn file_info_from_path(path: impl AsRef<Path>, driver: &str) -> Result<FileInfo> {
    let path = path.as_ref();
    validate_file_exists(path)?;

    let metadata = tokio::fs::metadata(path).await.map_err(FilemetaError::Io)?;
    describe(path, metadata, driver)
}

/// Describe a file synchronously.
pub fn file_info_from_path_sync(path: impl AsRef<Path>, driver: &str) -> Result<FileInfo> {
    let path = path.as_ref();
    validate_file_exists(path)?;

    let metadata = std::fs::metadata(path).map_err(FilemetaError::Io)?;
    describe(path, metadata, driver)
}

fn describe(path: &Path, metadata: std::fs::Metadata, driver: &str) -> Result<FileInfo> {
    if !metadata.is_file() {
        return Err(FilemetaError::validation(format!("Not a regular file: {}", path.display())));
    }

    Ok(FileInfo::new(
        path.to_string_lossy().into_owned(),
        detect_mime_type(path),
        metadata.len(),
        driver,
    ))
}
