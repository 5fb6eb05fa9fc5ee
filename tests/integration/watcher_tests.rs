//! Change notification handling: coalescing, self-triggered redraws,
//! the rebuild cap and source failures.

use crate::common::test_helpers::*;
use pretty_assertions::assert_eq;
use rec_filter::config::WatcherConfig;
use rec_filter::core::{
    ChangeSignal, ChangeWatcher, FilterSnapshot, ItemSource, NullView, RawItem, SourceError, View,
};
use rec_filter::source::MemorySource;
use std::cell::Cell;
use std::io;
use std::path::PathBuf;

/// Raises a change notification every time it draws, like a view whose
/// updates land in the region being watched.
struct EchoingView {
    signal: ChangeSignal,
    redraws: usize,
}

impl View for EchoingView {
    fn redraw(&mut self, _snapshot: &FilterSnapshot) {
        self.redraws += 1;
        self.signal.notify();
    }
}

/// Returns different counts on every read
struct DriftingSource {
    reads: Cell<u32>,
}

impl ItemSource for DriftingSource {
    fn list_items(&self) -> Result<Vec<RawItem>, SourceError> {
        let n = self.reads.get();
        self.reads.set(n + 1);
        Ok(vec![RawItem::valid("only", n)])
    }
}

/// Fails while `broken` is set
struct FlakySource {
    inner: MemorySource,
    broken: bool,
}

impl ItemSource for FlakySource {
    fn list_items(&self) -> Result<Vec<RawItem>, SourceError> {
        if self.broken {
            return Err(SourceError::ReadFailed {
                path: PathBuf::from("items.json"),
                source: io::Error::new(io::ErrorKind::Other, "disk went away"),
            });
        }
        self.inner.list_items()
    }
}

#[test]
fn test_burst_of_notifications_rebuilds_once() {
    let mut watcher = watcher_with_counts(&[1, 2, 3]);
    let signal = watcher.signal();
    watcher.source_mut().set_count("c-0", 7);
    for _ in 0..5 {
        signal.notify();
    }

    let mut view = RecordingView::default();
    let reports = watcher.process_pending(&mut view).unwrap();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].changed);
    assert_eq!(view.frames.len(), 1);
    assert_eq!(view.frames[0].chart.max_count, 7);
    assert!(!signal.is_pending());
}

#[test]
fn test_self_triggered_notification_settles() {
    let mut watcher = watcher_with_counts(&[0, 4]);
    let signal = watcher.signal();
    let mut view = EchoingView {
        signal: signal.clone(),
        redraws: 0,
    };

    watcher.source_mut().set_count("c-1", 6);
    signal.notify();
    let reports = watcher.process_pending(&mut view).unwrap();

    // The real change redraws; the echo it causes finds nothing new.
    assert_eq!(reports.len(), 2);
    assert!(reports[0].redrawn);
    assert!(!reports[1].redrawn);
    assert_eq!(view.redraws, 1);
    assert!(!signal.is_pending());
}

#[test]
fn test_rebuild_cap_leaves_signal_pending() {
    let config = WatcherConfig {
        max_coalesced_rebuilds: 3,
        ..WatcherConfig::default()
    };
    let mut watcher = ChangeWatcher::with_config(DriftingSource { reads: Cell::new(0) }, &config);
    watcher.initialize(&mut NullView).unwrap();

    let signal = watcher.signal();
    let mut view = EchoingView {
        signal: signal.clone(),
        redraws: 0,
    };
    signal.notify();

    let reports = watcher.process_pending(&mut view).unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(view.redraws, 3);
    assert!(signal.is_pending());
}

#[test]
fn test_source_failure_keeps_previous_state() {
    let mut inner = MemorySource::new();
    inner.push_count("a", 2);
    inner.push_count("b", 5);
    let mut watcher = ChangeWatcher::new(FlakySource {
        inner,
        broken: false,
    });
    watcher.initialize(&mut NullView).unwrap();
    watcher.select_threshold(5).unwrap();
    let before = watcher.snapshot();

    watcher.source_mut().broken = true;
    watcher.source_mut().inner.clear();
    assert!(watcher.handle_change(&mut NullView).is_err());
    assert_eq!(watcher.snapshot(), before);
    assert_eq!(watcher.generation(), 1);

    watcher.source_mut().broken = false;
    let report = watcher.handle_change(&mut NullView).unwrap();
    assert!(report.is_empty());
    assert_eq!(watcher.current_selection(), 0);
}

#[test]
fn test_failed_drain_retries_on_next_call() {
    let mut inner = MemorySource::new();
    inner.push_count("a", 2);
    let mut watcher = ChangeWatcher::new(FlakySource {
        inner,
        broken: false,
    });
    watcher.initialize(&mut NullView).unwrap();
    let signal = watcher.signal();

    watcher.source_mut().inner.push_count("b", 6);
    watcher.source_mut().broken = true;
    signal.notify();
    assert!(watcher.process_pending(&mut NullView).is_err());
    assert!(signal.is_pending());

    watcher.source_mut().broken = false;
    let mut view = RecordingView::default();
    let reports = watcher.process_pending(&mut view).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(view.frames.len(), 1);
    assert_eq!(watcher.chart_model().thresholds, vec![6, 2, 0]);
    assert!(!signal.is_pending());
}

#[test]
fn test_handle_change_always_redraws() {
    let mut watcher = watcher_with_counts(&[1]);
    let mut view = RecordingView::default();

    let report = watcher.handle_change(&mut view).unwrap();
    assert!(!report.changed);
    assert!(report.redrawn);
    assert_eq!(view.frames.len(), 1);
}

#[test]
fn test_added_items_extend_thresholds() {
    let mut watcher = watcher_with_counts(&[0, 3]);
    watcher.select_threshold(3).unwrap();
    watcher.source_mut().push_count("new", 9);

    watcher.handle_change(&mut NullView).unwrap();
    assert_eq!(watcher.chart_model().thresholds, vec![9, 3, 0]);
    assert_eq!(watcher.current_selection(), 3);
    assert_eq!(visible_counts(&watcher), vec![3, 9]);
    assert!(watcher.is_visible(&id("new")));
}
