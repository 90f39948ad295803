//! Value types passed between the host, the pipeline and extractors.

use serde::{Deserialize, Serialize};

/// Metadata produced by an extractor: field name to JSON value.
///
/// Field names and value shapes are owned by the extractors; the pipeline only
/// merges maps key by key.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Description of a file handed to extractors by the indexing host.
///
/// The host builds one `FileInfo` per indexed file. Extractors never open the
/// file through this value; it only carries what admission decisions need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Storage-specific identifier (usually a path relative to the storage root).
    pub identifier: String,

    /// File name including extension.
    pub name: String,

    /// Lowercase extension without the leading dot. Empty when the name has none.
    pub extension: String,

    /// Detected or declared MIME type.
    pub mime_type: String,

    /// Size in bytes.
    pub size: u64,

    /// Identifier of the storage driver holding the file (e.g. `"Local"`).
    pub driver: String,
}

impl FileInfo {
    /// Build a descriptor from its parts, deriving `name` and `extension` from the identifier.
    pub fn new(
        identifier: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
        driver: impl Into<String>,
    ) -> Self {
        let identifier = identifier.into();
        let name = identifier
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(identifier.as_str())
            .to_string();
        let extension = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => String::new(),
        };

        Self {
            identifier,
            name,
            extension,
            mime_type: mime_type.into(),
            size,
            driver: driver.into(),
        }
    }
}

/// What a single extractor contributed to a merged result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub extractor: String,
    pub priority: i32,
    pub execution_priority: i32,
    /// Keys the extractor returned, in the order it returned them.
    pub fields: Vec<String>,
}

/// Merged output of running every admitted extractor against one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub metadata: Metadata,

    /// Contributions in execution order.
    pub contributions: Vec<Contribution>,

    /// Names of admitted extractors that declined the file via `can_process`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl ExtractionOutcome {
    /// Name of the extractor whose value for `field` ended up in the merged metadata.
    pub fn source_of(&self, field: &str) -> Option<&str> {
        self.contributions
            .iter()
            .filter(|c| c.fields.iter().any(|f| f == field))
            .enumerate()
            // Highest data priority wins; on ties the first executed wins.
            .max_by(|(ia, a), (ib, b)| a.priority.cmp(&b.priority).then(ib.cmp(ia)))
            .map(|(_, c)| c.extractor.as_str())
    }
}
