//! Item files on disk: parsing, rebuilding after edits, file notifications.

use pretty_assertions::assert_eq;
use rec_filter::core::{ChangeWatcher, ItemSource, MalformedReason, NullView, SourceError};
use rec_filter::source::{FileChangeNotifier, JsonFileSource};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_items(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("items.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_reads_mixed_count_representations() {
    let dir = TempDir::new().unwrap();
    let path = write_items(
        &dir,
        r#"[
            {"id": "a", "recommended": 4},
            {"id": "b", "recommended": " 12 "},
            {"id": 7, "recommended": 0},
            {"id": "c", "recommended": "lots"},
            {"id": "d"},
            {"recommended": 9}
        ]"#,
    );

    let items = JsonFileSource::new(&path).list_items().unwrap();
    assert_eq!(items.len(), 5);

    let valid: Vec<(String, u32)> = items
        .iter()
        .filter_map(|raw| raw.count.as_ref().ok().map(|c| (raw.id.to_string(), *c)))
        .collect();
    assert_eq!(
        valid,
        vec![("a".to_string(), 4), ("b".to_string(), 12), ("7".to_string(), 0)]
    );

    let reasons: Vec<MalformedReason> = items
        .iter()
        .filter_map(|raw| raw.count.as_ref().err().map(|e| e.reason))
        .collect();
    assert_eq!(reasons, vec![MalformedReason::NotNumeric, MalformedReason::Missing]);
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let source = JsonFileSource::new(dir.path().join("absent.json"));
    assert!(matches!(
        source.list_items(),
        Err(SourceError::ReadFailed { .. })
    ));
}

#[test]
fn test_non_array_document_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_items(&dir, r#"{"id": "a", "recommended": 1}"#);
    assert!(matches!(
        JsonFileSource::new(&path).list_items(),
        Err(SourceError::InvalidFormat { .. })
    ));
}

#[test]
fn test_watcher_follows_file_edits() {
    let dir = TempDir::new().unwrap();
    let path = write_items(
        &dir,
        r#"[{"id": "a", "recommended": 0}, {"id": "b", "recommended": 3}, {"id": "c", "recommended": 5}]"#,
    );

    let mut watcher = ChangeWatcher::new(JsonFileSource::new(&path));
    watcher.initialize(&mut NullView).unwrap();
    watcher.select_threshold(5).unwrap();

    fs::write(
        &path,
        r#"[{"id": "a", "recommended": 0}, {"id": "b", "recommended": 3}, {"id": "c", "recommended": 4}]"#,
    )
    .unwrap();
    let report = watcher.handle_change(&mut NullView).unwrap();

    assert!(report.migrated());
    assert_eq!(watcher.current_selection(), 4);
    assert_eq!(watcher.chart_model().thresholds, vec![4, 3, 0]);

    // A broken write leaves the last good state in place.
    fs::write(&path, "[{").unwrap();
    assert!(watcher.handle_change(&mut NullView).is_err());
    assert_eq!(watcher.current_selection(), 4);
    assert_eq!(watcher.items().len(), 3);
}

#[tokio::test]
async fn test_file_notifier_raises_signal() {
    let dir = TempDir::new().unwrap();
    let path = write_items(&dir, r#"[{"id": "a", "recommended": 1}]"#);

    let watcher = ChangeWatcher::new(JsonFileSource::new(&path));
    let signal = watcher.signal();
    let _notifier = FileChangeNotifier::watch(&path, signal.clone()).unwrap();

    fs::write(&path, r#"[{"id": "a", "recommended": 2}]"#).unwrap();

    let raised = tokio::time::timeout(Duration::from_secs(5), signal.changed()).await;
    assert!(raised.is_ok());
    assert!(signal.is_pending());
}
