//! MIME type detection and file-type restriction matching.
//!
//! Extractors declare file-type restrictions as plain tags. A tag is matched
//! against a [`FileInfo`] in three ways:
//!
//! - an extension tag (`"pdf"`, `".docx"`), compared case-insensitively
//! - an exact MIME type (`"application/pdf"`)
//! - a MIME prefix pattern (`"image/*"`), or `"*/*"` for any file

use crate::types::FileInfo;
use std::path::Path;

pub const OCTET_STREAM_MIME_TYPE: &str = "application/octet-stream";
pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Detect the MIME type of a path from its extension.
///
/// Unknown extensions yield `application/octet-stream`.
pub fn detect_mime_type(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path.as_ref())
        .first_raw()
        .unwrap_or(OCTET_STREAM_MIME_TYPE)
        .to_string()
}

/// Check a single file-type restriction tag against a file.
pub fn matches_file_type(restriction: &str, file: &FileInfo) -> bool {
    let restriction = restriction.trim();
    if restriction.is_empty() {
        return false;
    }

    if restriction == "*/*" {
        return true;
    }

    if let Some(prefix) = restriction.strip_suffix("/*") {
        return file
            .mime_type
            .split_once('/')
            .is_some_and(|(top_level, _)| top_level.eq_ignore_ascii_case(prefix));
    }

    if restriction.contains('/') {
        return restriction.eq_ignore_ascii_case(&file.mime_type);
    }

    let extension = restriction.strip_prefix('.').unwrap_or(restriction);
    !file.extension.is_empty() && extension.eq_ignore_ascii_case(&file.extension)
}

/// Whether a file passes a restriction set. An empty set admits every file.
pub fn file_type_admitted(restrictions: &[&str], file: &FileInfo) -> bool {
    restrictions.is_empty() || restrictions.iter().any(|r| matches_file_type(r, file))
}
