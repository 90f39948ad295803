//! Extraction pipeline orchestration.
//!
//! Runs every admitted extractor for one file and merges their metadata:
//!
//! 1. Admission - driver and file-type restrictions (see [`ExtractorRegistry::extractors_for_file`])
//! 2. Ordering - execution priority, highest first; registration order on ties
//! 3. Invocation - `can_process`, then `extract_metadata` with the metadata merged so far
//! 4. Merge - per field, the highest data priority wins; on ties the extractor that ran first wins

use crate::plugins::MetadataExtractor;
use crate::plugins::registry::ExtractorRegistry;
use crate::types::{Contribution, ExtractionOutcome, FileInfo, Metadata};
use crate::{FilemetaError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Extract metadata for `file` with the extractors registered in `registry`.
///
/// The registry lock is only held while the admitted extractors are collected,
/// never across an extraction.
pub async fn extract_file_metadata(file: &FileInfo, registry: &RwLock<ExtractorRegistry>) -> Result<ExtractionOutcome> {
    let extractors = {
        let registry = registry.read()?;
        registry.extractors_for_file(file)
    };

    run_extractors(file, &extractors).await
}

/// Same as [`extract_file_metadata`] using the global registry.
pub async fn extract_file_metadata_global(file: &FileInfo) -> Result<ExtractionOutcome> {
    let registry = crate::plugins::registry::get_extractor_registry();
    extract_file_metadata(file, &registry).await
}

/// Run `extractors`, already admitted and in execution order, against `file`.
///
/// # Errors
///
/// The first failing extractor aborts the run. I/O errors bubble up unchanged;
/// other errors are reported as `FilemetaError::Plugin` carrying the extractor name.
#[tracing::instrument(skip_all, fields(file = %file.identifier, extractors = extractors.len()))]
pub async fn run_extractors(file: &FileInfo, extractors: &[Arc<dyn MetadataExtractor>]) -> Result<ExtractionOutcome> {
    let mut outcome = ExtractionOutcome::default();
    let mut owners: HashMap<String, i32> = HashMap::new();

    for extractor in extractors {
        let name = extractor.name();

        if !extractor.can_process(file) {
            tracing::debug!("Extractor '{}' declined {}", name, file.identifier);
            outcome.skipped.push(name.to_string());
            continue;
        }

        let produced = extractor
            .extract_metadata(file, &outcome.metadata)
            .await
            .map_err(|e| attribute_error(name, e))?;

        let priority = extractor.priority();
        outcome.contributions.push(Contribution {
            extractor: name.to_string(),
            priority,
            execution_priority: extractor.execution_priority(),
            fields: produced.keys().cloned().collect(),
        });

        merge_into(&mut outcome.metadata, &mut owners, produced, priority);
    }

    Ok(outcome)
}

/// Merge one extractor's output, keeping existing values with equal or higher data priority.
fn merge_into(merged: &mut Metadata, owners: &mut HashMap<String, i32>, produced: Metadata, priority: i32) {
    for (field, value) in produced {
        match owners.get(&field) {
            Some(&existing) if existing >= priority => {}
            _ => {
                owners.insert(field.clone(), priority);
                merged.insert(field, value);
            }
        }
    }
}

fn attribute_error(plugin_name: &str, error: FilemetaError) -> FilemetaError {
    match error {
        FilemetaError::Io(_) | FilemetaError::Plugin { .. } => error,
        other => FilemetaError::plugin(plugin_name, other.to_string()),
    }
}
