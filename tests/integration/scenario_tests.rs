//! The worked examples: build, select, count change, clear, malformed item.

use crate::common::test_helpers::*;
use pretty_assertions::assert_eq;
use rec_filter::core::{ChangeWatcher, FilterError, MalformedReason, NullView};
use rec_filter::source::MemorySource;
use std::collections::BTreeMap;

#[test]
fn test_build_from_counts() {
    let watcher = watcher_with_counts(&[0, 3, 3, 5]);

    let histogram: Vec<(u32, usize)> = watcher.histogram().iter().collect();
    assert_eq!(histogram, vec![(0, 1), (3, 2), (5, 1)]);

    let chart = watcher.chart_model();
    assert_eq!(chart.thresholds, vec![5, 3, 0]);
    assert_eq!(chart.top_counts, BTreeMap::from([(5, 1), (3, 3), (0, 4)]));
    assert_eq!(chart.max_count, 5);
}

#[test]
fn test_select_three_hides_zero() {
    let mut watcher = watcher_with_counts(&[0, 3, 3, 5]);
    watcher.select_threshold(3).unwrap();

    assert_eq!(visible_counts(&watcher), vec![3, 3, 5]);
    assert!(!watcher.is_visible(&id("c-0")));
    assert_eq!(watcher.visibility().values().filter(|v| **v).count(), 3);
}

#[test]
fn test_count_change_keeps_surviving_selection() {
    let mut watcher = watcher_with_counts(&[0, 3, 3, 5]);
    watcher.select_threshold(3).unwrap();

    watcher.source_mut().set_count("c-3", 2);
    let report = watcher.handle_change(&mut NullView).unwrap();

    let histogram: Vec<(u32, usize)> = watcher.histogram().iter().collect();
    assert_eq!(histogram, vec![(0, 1), (2, 1), (3, 2)]);
    assert_eq!(watcher.chart_model().thresholds, vec![3, 2, 0]);
    assert!(!report.migrated());
    assert_eq!(watcher.current_selection(), 3);
    assert_eq!(visible_counts(&watcher), vec![3, 3]);
}

#[test]
fn test_all_items_removed() {
    let mut watcher = watcher_with_counts(&[0, 3, 3, 5]);
    watcher.select_threshold(5).unwrap();

    watcher.source_mut().clear();
    let report = watcher.handle_change(&mut NullView).unwrap();

    assert!(report.is_empty());
    assert_eq!(watcher.histogram().frequency(0), 0);
    assert_eq!(watcher.chart_model().thresholds, vec![0]);
    assert_eq!(watcher.chart_model().top_count(0), Some(0));
    assert_eq!(watcher.current_selection(), 0);
}

#[test]
fn test_malformed_item_excluded() {
    let mut source = MemorySource::new();
    source.push_count("a", 0);
    source.push_raw("b", "three");
    source.push_count("c", 3);
    source.push_count("d", 5);

    let mut watcher = ChangeWatcher::new(source);
    let report = watcher.initialize(&mut NullView).unwrap();

    assert_eq!(report.item_count, 3);
    assert_eq!(report.malformed_count, 1);
    assert_eq!(watcher.malformed()[0].id, id("b"));
    assert_eq!(watcher.malformed()[0].reason, MalformedReason::NotNumeric);
    assert_eq!(watcher.chart_model().thresholds, vec![5, 3, 0]);
    assert_eq!(watcher.chart_model().top_count(0), Some(3));
    assert!(!watcher.visibility().contains_key(&id("b")));
}

#[test]
fn test_invalid_selection_reports_error() {
    let mut watcher = watcher_with_counts(&[0, 3, 3, 5]);
    watcher.select_threshold(5).unwrap();
    let before = watcher.visibility();

    let err = watcher.select_threshold(4).unwrap_err();
    assert!(matches!(err, FilterError::InvalidThreshold { requested: 4, .. }));
    assert_eq!(watcher.current_selection(), 5);
    assert_eq!(watcher.visibility(), before);
}
