//! Invariants that must hold for any item set.

use crate::common::test_helpers::*;
use proptest::prelude::*;
use rec_filter::core::{Aggregator, HistogramIndex, NullView, RawItem};

fn counts_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..40, 0..60)
}

fn raw_items(counts: &[u32]) -> Vec<RawItem> {
    counts
        .iter()
        .enumerate()
        .map(|(i, c)| RawItem::valid(format!("c-{i}"), *c))
        .collect()
}

proptest! {
    #[test]
    fn histogram_sums_to_item_count(counts in counts_strategy()) {
        let aggregation = Aggregator::new().aggregate(raw_items(&counts));
        prop_assert_eq!(aggregation.histogram.total(), counts.len());
        prop_assert_eq!(aggregation.items.len(), counts.len());
        prop_assert_eq!(aggregation.max_count, counts.iter().copied().max().unwrap_or(0));
    }

    #[test]
    fn thresholds_strictly_descend_and_end_in_zero(counts in counts_strategy()) {
        let aggregation = Aggregator::new().aggregate(raw_items(&counts));
        let index = HistogramIndex::build(&aggregation.histogram);
        let thresholds = index.thresholds();

        prop_assert!(thresholds.windows(2).all(|w| w[0] > w[1]));
        prop_assert_eq!(thresholds.last().copied(), Some(0));
    }

    #[test]
    fn cumulative_counts_are_monotonic(counts in counts_strategy()) {
        let aggregation = Aggregator::new().aggregate(raw_items(&counts));
        let index = HistogramIndex::build(&aggregation.histogram);
        let entries: Vec<(u32, usize)> = index.entries().collect();

        // Descending thresholds, so counts never decrease along the list.
        prop_assert!(entries.windows(2).all(|w| w[0].1 <= w[1].1));
        prop_assert_eq!(index.top_count(0), Some(counts.len()));

        let max = index.max_threshold();
        prop_assert_eq!(index.top_count(max), Some(aggregation.histogram.frequency(max)));
    }

    #[test]
    fn top_count_matches_definition_for_any_threshold(
        counts in counts_strategy(),
        probe in 0u32..45,
    ) {
        let aggregation = Aggregator::new().aggregate(raw_items(&counts));
        let index = HistogramIndex::build(&aggregation.histogram);
        let expected = counts.iter().filter(|c| **c >= probe).count();

        prop_assert_eq!(aggregation.histogram.top_count(probe), expected);
        prop_assert_eq!(index.top_count_at_least(probe), expected);
    }

    #[test]
    fn visibility_follows_selected_threshold(
        counts in counts_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut watcher = watcher_with_counts(&counts);
        let thresholds = watcher.chart_model().thresholds;
        let threshold = thresholds[pick.index(thresholds.len())];
        watcher.select_threshold(threshold).unwrap();

        for item in watcher.items() {
            prop_assert_eq!(item.is_visible(), item.recommended_count >= threshold);
        }
    }

    #[test]
    fn migration_picks_greatest_remaining_lower_threshold(
        before in counts_strategy(),
        after in counts_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut watcher = watcher_with_counts(&before);
        let thresholds = watcher.chart_model().thresholds;
        let selected = thresholds[pick.index(thresholds.len())];
        watcher.select_threshold(selected).unwrap();

        *watcher.source_mut() = rec_filter::source::MemorySource::from_counts(after.iter().copied());
        watcher.handle_change(&mut NullView).unwrap();

        let new_thresholds = watcher.chart_model().thresholds;
        let expected = new_thresholds
            .iter()
            .copied()
            .filter(|t| *t <= selected)
            .max()
            .unwrap_or(0);
        prop_assert_eq!(watcher.current_selection(), expected);
        prop_assert!(new_thresholds.contains(&watcher.current_selection()));
    }

    #[test]
    fn rebuild_is_idempotent(counts in counts_strategy(), pick in any::<prop::sample::Index>()) {
        let mut watcher = watcher_with_counts(&counts);
        let thresholds = watcher.chart_model().thresholds;
        watcher.select_threshold(thresholds[pick.index(thresholds.len())]).unwrap();

        watcher.handle_change(&mut NullView).unwrap();
        let first = (watcher.histogram().clone(), watcher.snapshot());
        let report = watcher.handle_change(&mut NullView).unwrap();
        let second = (watcher.histogram().clone(), watcher.snapshot());

        prop_assert!(!report.changed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn invalid_selection_changes_nothing(counts in counts_strategy(), probe in 0u32..45) {
        let mut watcher = watcher_with_counts(&counts);
        prop_assume!(!watcher.chart_model().thresholds.contains(&probe));
        let before = watcher.snapshot();

        prop_assert!(watcher.select_threshold(probe).is_err());
        prop_assert_eq!(watcher.snapshot(), before);
    }
}
