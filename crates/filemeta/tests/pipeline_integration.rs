//! Pipeline integration tests.
//!
//! Runs extractors end to end through the registry and the pipeline:
//! ordering, merge precedence, admission, logging and error attribution.

use async_trait::async_trait;
use filemeta::core::config::ExtractorConfig;
use filemeta::core::pipeline::{extract_file_metadata, extract_file_metadata_global};
use filemeta::plugins::registry::ExtractorRegistry;
use filemeta::plugins::{
    DiagnosticLogger, ExtractorBase, MetadataExtractor, Plugin, clear_extractors, register_extractor,
};
use filemeta::types::{FileInfo, Metadata};
use filemeta::{FilemetaError, Result};
use serde_json::{Value, json};
use serial_test::serial;
use std::sync::{Arc, Mutex, RwLock};
use tracing::Level;

type Entries = Arc<Mutex<Vec<(Level, String, Metadata)>>>;

#[derive(Default)]
struct RecordingLogger {
    entries: Entries,
}

impl DiagnosticLogger for RecordingLogger {
    fn log(&self, level: Level, message: &str, data: &Metadata) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string(), data.clone()));
    }
}

enum Behavior {
    Produce(Vec<(&'static str, Value)>),
    /// Copies the named field from `previous` into `seen_<field>`.
    Observe(&'static str),
    Fail(FilemetaError),
}

struct StaticExtractor {
    base: ExtractorBase,
    name: &'static str,
    priority: i32,
    execution_priority: i32,
    behavior: Mutex<Option<Behavior>>,
}

impl StaticExtractor {
    fn new(name: &'static str, priority: i32, behavior: Behavior) -> Self {
        Self::with_base(
            ExtractorBase::with_defaults(Arc::new(ExtractorConfig::default())),
            name,
            priority,
            behavior,
        )
    }

    fn with_base(base: ExtractorBase, name: &'static str, priority: i32, behavior: Behavior) -> Self {
        Self {
            base,
            name,
            priority,
            execution_priority: priority,
            behavior: Mutex::new(Some(behavior)),
        }
    }

    fn runs_at(mut self, execution_priority: i32) -> Self {
        self.execution_priority = execution_priority;
        self
    }
}

impl Plugin for StaticExtractor {
    fn name(&self) -> &str {
        self.name
    }
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
    fn initialize(&self) -> Result<()> {
        Ok(())
    }
    fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl MetadataExtractor for StaticExtractor {
    fn base(&self) -> &ExtractorBase {
        &self.base
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn execution_priority(&self) -> i32 {
        self.execution_priority
    }

    async fn extract_metadata(&self, _file: &FileInfo, previous: &Metadata) -> Result<Metadata> {
        let behavior = self.behavior.lock().unwrap().take();
        match behavior {
            Some(Behavior::Produce(fields)) => {
                let metadata: Metadata = fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
                self.base
                    .log(&format!("extracted {} fields", metadata.len()), &count_data(metadata.len()));
                Ok(metadata)
            }
            Some(Behavior::Observe(field)) => {
                let mut metadata = Metadata::new();
                metadata.insert(
                    format!("seen_{}", field),
                    previous.get(field).cloned().unwrap_or(Value::Null),
                );
                Ok(metadata)
            }
            Some(Behavior::Fail(error)) => Err(error),
            None => Ok(Metadata::new()),
        }
    }
}

fn count_data(count: usize) -> Metadata {
    let mut data = Metadata::new();
    data.insert("count".to_string(), json!(count));
    data
}

fn registry_with(extractors: Vec<StaticExtractor>) -> RwLock<ExtractorRegistry> {
    let mut registry = ExtractorRegistry::new();
    for extractor in extractors {
        registry.register(Arc::new(extractor)).unwrap();
    }
    RwLock::new(registry)
}

fn sample_file() -> FileInfo {
    FileInfo::new("fileadmin/report.pdf", "application/pdf", 2048, "Local")
}

fn base_with(config: ExtractorConfig, logger: Arc<dyn DiagnosticLogger>) -> ExtractorBase {
    ExtractorBase::new(Arc::new(config), None, logger)
}

#[tokio::test]
async fn test_higher_data_priority_wins_regardless_of_execution_order() {
    let registry = registry_with(vec![
        StaticExtractor::new("fast-guess", 10, Behavior::Produce(vec![("title", json!("guess"))])).runs_at(100),
        StaticExtractor::new("accurate", 90, Behavior::Produce(vec![("title", json!("Annual Report"))])).runs_at(1),
    ]);

    let outcome = extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert_eq!(outcome.metadata.get("title"), Some(&json!("Annual Report")));
    assert_eq!(outcome.source_of("title"), Some("accurate"));
    let order: Vec<&str> = outcome.contributions.iter().map(|c| c.extractor.as_str()).collect();
    assert_eq!(order, vec!["fast-guess", "accurate"]);
}

#[tokio::test]
async fn test_equal_data_priority_keeps_first_executed_value() {
    let registry = registry_with(vec![
        StaticExtractor::new("first", 50, Behavior::Produce(vec![("author", json!("A"))])),
        StaticExtractor::new("second", 50, Behavior::Produce(vec![("author", json!("B"))])),
    ]);

    let outcome = extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert_eq!(outcome.metadata.get("author"), Some(&json!("A")));
    assert_eq!(outcome.source_of("author"), Some("first"));
}

#[tokio::test]
async fn test_distinct_fields_are_all_merged() {
    let registry = registry_with(vec![
        StaticExtractor::new("pages", 10, Behavior::Produce(vec![("pages", json!(12))])),
        StaticExtractor::new("title", 20, Behavior::Produce(vec![("title", json!("Report"))])),
    ]);

    let outcome = extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert_eq!(outcome.metadata.len(), 2);
    assert_eq!(outcome.metadata.get("pages"), Some(&json!(12)));
}

#[tokio::test]
async fn test_later_extractors_see_earlier_output() {
    let registry = registry_with(vec![
        StaticExtractor::new("producer", 10, Behavior::Produce(vec![("title", json!("Report"))])).runs_at(50),
        StaticExtractor::new("observer", 10, Behavior::Observe("title")).runs_at(5),
    ]);

    let outcome = extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert_eq!(outcome.metadata.get("seen_title"), Some(&json!("Report")));
}

#[tokio::test]
async fn test_driver_restriction_excludes_extractor() {
    let webdav_only = ExtractorConfig {
        driver_restrictions: vec!["WebDav".to_string()],
        ..Default::default()
    };
    let registry = registry_with(vec![
        StaticExtractor::with_base(
            ExtractorBase::with_defaults(Arc::new(webdav_only)),
            "webdav",
            10,
            Behavior::Produce(vec![("remote", json!(true))]),
        ),
        StaticExtractor::new("any", 10, Behavior::Produce(vec![("local", json!(true))])),
    ]);

    let outcome = extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert!(outcome.metadata.get("remote").is_none());
    assert_eq!(outcome.metadata.get("local"), Some(&json!(true)));
    assert_eq!(outcome.contributions.len(), 1);
}

#[tokio::test]
async fn test_files_at_size_limit_are_skipped() {
    let limited = ExtractorConfig {
        file_size_limit: 2048,
        ..Default::default()
    };
    let registry = registry_with(vec![StaticExtractor::with_base(
        ExtractorBase::with_defaults(Arc::new(limited)),
        "limited",
        10,
        Behavior::Produce(vec![("title", json!("x"))]),
    )]);

    let outcome = extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert!(outcome.metadata.is_empty());
    assert_eq!(outcome.skipped, vec!["limited"]);
}

#[tokio::test]
async fn test_zero_size_limit_disables_check() {
    let unlimited = ExtractorConfig {
        file_size_limit: 0,
        ..Default::default()
    };
    let registry = registry_with(vec![StaticExtractor::with_base(
        ExtractorBase::with_defaults(Arc::new(unlimited)),
        "unlimited",
        10,
        Behavior::Produce(vec![("title", json!("big"))]),
    )]);

    let huge = FileInfo::new("video/raw.bin", "application/octet-stream", u64::MAX, "Local");
    let outcome = extract_file_metadata(&huge, &registry).await.unwrap();

    assert_eq!(outcome.metadata.get("title"), Some(&json!("big")));
}

#[tokio::test]
async fn test_failure_is_attributed_to_extractor() {
    let registry = registry_with(vec![
        StaticExtractor::new("ok", 20, Behavior::Produce(vec![("title", json!("x"))])),
        StaticExtractor::new("broken", 10, Behavior::Fail(FilemetaError::service("backend unavailable"))),
    ]);

    let result = extract_file_metadata(&sample_file(), &registry).await;

    match result {
        Err(FilemetaError::Plugin { plugin_name, message }) => {
            assert_eq!(plugin_name, "broken");
            assert!(message.contains("backend unavailable"));
        }
        other => panic!("Expected Plugin error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_io_errors_bubble_up_unchanged() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let registry = registry_with(vec![StaticExtractor::new(
        "reader",
        10,
        Behavior::Fail(FilemetaError::Io(io_error)),
    )]);

    let result = extract_file_metadata(&sample_file(), &registry).await;

    assert!(matches!(result, Err(FilemetaError::Io(_))));
}

#[tokio::test]
async fn test_logging_enabled_records_debug_entry() {
    let logger = Arc::new(RecordingLogger::default());
    let entries = Arc::clone(&logger.entries);
    let config = ExtractorConfig {
        logging: true,
        ..Default::default()
    };

    let registry = registry_with(vec![StaticExtractor::with_base(
        base_with(config, logger),
        "logged",
        10,
        Behavior::Produce(vec![("a", json!(1)), ("b", json!(2)), ("c", json!(3))]),
    )]);

    extract_file_metadata(&sample_file(), &registry).await.unwrap();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    let (level, message, data) = &entries[0];
    assert_eq!(*level, Level::DEBUG);
    assert_eq!(message, "extracted 3 fields");
    assert_eq!(data, &count_data(3));
}

#[tokio::test]
async fn test_logging_disabled_records_nothing() {
    let logger = Arc::new(RecordingLogger::default());
    let entries = Arc::clone(&logger.entries);
    let config = ExtractorConfig {
        logging: false,
        ..Default::default()
    };
    let base = base_with(config, logger);

    for _ in 0..5 {
        base.log("x", &Metadata::new());
    }
    let registry = registry_with(vec![StaticExtractor::with_base(
        base,
        "quiet",
        10,
        Behavior::Produce(vec![("a", json!(1))]),
    )]);
    extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert!(entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_registry_yields_empty_outcome() {
    let registry = RwLock::new(ExtractorRegistry::new());

    let outcome = extract_file_metadata(&sample_file(), &registry).await.unwrap();

    assert!(outcome.metadata.is_empty());
    assert!(outcome.contributions.is_empty());
}

#[tokio::test]
#[serial]
async fn test_global_registry_pipeline() {
    clear_extractors().unwrap();

    register_extractor(Arc::new(StaticExtractor::new(
        "global-title",
        30,
        Behavior::Produce(vec![("title", json!("Global"))]),
    )))
    .unwrap();

    let outcome = extract_file_metadata_global(&sample_file()).await.unwrap();
    assert_eq!(outcome.metadata.get("title"), Some(&json!("Global")));

    clear_extractors().unwrap();
}
