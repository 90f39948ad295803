//! File size admission.

use crate::core::config::ExtractorConfig;
use crate::types::FileInfo;

/// Decides whether a file is small enough to hand to an extractor.
pub trait SizeValidator: Send + Sync {
    fn is_below_limit(&self, file: &FileInfo) -> bool;
}

/// Compares the file size against a fixed byte limit.
///
/// A limit of `0` disables the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSizeValidator {
    limit: u64,
}

impl FileSizeValidator {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    /// Build the validator configured by `file_size_limit`.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.file_size_limit)
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl SizeValidator for FileSizeValidator {
    fn is_below_limit(&self, file: &FileInfo) -> bool {
        self.limit == 0 || file.size < self.limit
    }
}
