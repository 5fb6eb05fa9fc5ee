//! Coordinates rebuilds of the filter state whenever the item source changes.
//!
//! The watcher owns every piece of core state (histogram, threshold index,
//! filter) and is the only component that calls out to the view. Change
//! notifications arrive through a [`ChangeSignal`]; they never rebuild
//! directly, so a redraw that raises a notification of its own cannot recurse.

use super::aggregator::Aggregator;
use super::errors::{FilterError, MalformedCountError, SourceError};
use super::histogram::{Histogram, HistogramIndex};
use super::signal::ChangeSignal;
use super::threshold_filter::ThresholdFilter;
use super::traits::{ChartModel, FilterSnapshot, ItemSource, View};
use super::types::{Item, ItemId, VisibilityMap};
use crate::config::WatcherConfig;
use tracing::{debug, info, warn};

/// What a single rebuild did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildReport {
    /// Monotonic rebuild counter, starting at 1
    pub generation: u64,
    pub item_count: usize,
    pub malformed_count: usize,
    pub thresholds: Vec<u32>,
    pub previous_selection: u32,
    pub selection: u32,
    /// Whether any of histogram, items or selection differ from before
    pub changed: bool,
    pub redrawn: bool,
}

impl RebuildReport {
    pub fn migrated(&self) -> bool {
        self.previous_selection != self.selection
    }

    /// Zero valid items; a valid state where only threshold 0 remains
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

pub struct ChangeWatcher<S: ItemSource> {
    source: S,
    aggregator: Aggregator,
    histogram: Histogram,
    index: HistogramIndex,
    max_count: u32,
    malformed: Vec<MalformedCountError>,
    filter: ThresholdFilter,
    signal: ChangeSignal,
    generation: u64,
    max_coalesced_rebuilds: usize,
}

impl<S: ItemSource> ChangeWatcher<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, &WatcherConfig::default())
    }

    pub fn with_config(source: S, config: &WatcherConfig) -> Self {
        Self {
            source,
            aggregator: Aggregator::new(),
            histogram: Histogram::new(),
            index: HistogramIndex::default(),
            max_count: 0,
            malformed: Vec::new(),
            filter: ThresholdFilter::new(),
            signal: ChangeSignal::new(),
            generation: 0,
            max_coalesced_rebuilds: config.max_coalesced_rebuilds.max(1),
        }
    }

    /// Handle for the source side to raise change notifications
    pub fn signal(&self) -> ChangeSignal {
        self.signal.clone()
    }

    /// First build: show everything and draw
    pub fn initialize(&mut self, view: &mut impl View) -> Result<RebuildReport, SourceError> {
        let mut report = self.rebuild()?;
        self.filter.reset_selection();
        report.selection = 0;
        view.redraw(&self.snapshot());
        report.redrawn = true;
        info!(
            "Initialized with {} items across {} thresholds",
            report.item_count,
            report.thresholds.len()
        );
        Ok(report)
    }

    /// Rebuild once from the source and redraw unconditionally
    pub fn handle_change(&mut self, view: &mut impl View) -> Result<RebuildReport, SourceError> {
        let mut report = self.rebuild()?;
        view.redraw(&self.snapshot());
        report.redrawn = true;
        Ok(report)
    }

    /// Drain pending change notifications.
    ///
    /// Notifications raised while a pass runs (including by the view during
    /// redraw) are coalesced into one more pass. A pass that leaves the state
    /// unchanged skips the redraw, so self-triggered notifications settle.
    /// At most `max_coalesced_rebuilds` passes run per call; if that limit is
    /// hit the signal stays pending. A failed rebuild also leaves it pending,
    /// so the next call retries.
    pub fn process_pending(
        &mut self,
        view: &mut impl View,
    ) -> Result<Vec<RebuildReport>, SourceError> {
        let mut reports = Vec::new();

        while self.signal.take() {
            if reports.len() >= self.max_coalesced_rebuilds {
                self.signal.mark();
                warn!(
                    "Stopped after {} back-to-back rebuilds; change notifications keep arriving",
                    reports.len()
                );
                break;
            }

            let mut report = match self.rebuild() {
                Ok(report) => report,
                Err(e) => {
                    self.signal.mark();
                    return Err(e);
                }
            };
            if report.changed {
                view.redraw(&self.snapshot());
                report.redrawn = true;
            } else {
                debug!("Rebuild {} left state unchanged, skipping redraw", report.generation);
            }
            reports.push(report);
        }

        Ok(reports)
    }

    /// Viewer-driven filtering; validated against the latest completed rebuild
    pub fn select_threshold(&mut self, threshold: u32) -> Result<(), FilterError> {
        self.filter.select_threshold(threshold)
    }

    pub fn current_selection(&self) -> u32 {
        self.filter.current_selection()
    }

    pub fn is_visible(&self, id: &ItemId) -> bool {
        self.filter.is_visible(id)
    }

    pub fn visibility(&self) -> VisibilityMap {
        self.filter.visibility()
    }

    pub fn chart_model(&self) -> ChartModel {
        ChartModel {
            thresholds: self.index.thresholds().to_vec(),
            top_counts: self.index.cumulative(),
            max_count: self.max_count,
        }
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            chart: self.chart_model(),
            items: self.filter.items().to_vec(),
            selection: self.filter.current_selection(),
        }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn index(&self) -> &HistogramIndex {
        &self.index
    }

    pub fn items(&self) -> &[Item] {
        self.filter.items()
    }

    /// Items skipped in the most recent rebuild
    pub fn malformed(&self) -> &[MalformedCountError] {
        &self.malformed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Aggregate, index, migrate the selection and recompute visibility.
    ///
    /// On a source failure nothing is modified.
    fn rebuild(&mut self) -> Result<RebuildReport, SourceError> {
        let raw_items = self.source.list_items()?;
        let aggregation = self.aggregator.aggregate(raw_items);
        let index = HistogramIndex::build(&aggregation.histogram);

        let previous_selection = self.filter.current_selection();
        let selection = index.nearest_at_or_below(previous_selection);
        if selection != previous_selection {
            info!(
                "Threshold {} no longer exists, moved selection to {}",
                previous_selection, selection
            );
        }
        if aggregation.is_empty() {
            debug!("No valid items after aggregation, only threshold 0 remains");
        }

        let previous_filter = self.filter.clone();
        self.filter.rebase(aggregation.items, &index, selection);

        let changed = self.generation == 0
            || previous_filter != self.filter
            || self.histogram != aggregation.histogram
            || self.max_count != aggregation.max_count
            || self.malformed != aggregation.malformed;

        self.generation += 1;
        self.histogram = aggregation.histogram;
        self.index = index;
        self.max_count = aggregation.max_count;
        self.malformed = aggregation.malformed;

        debug!(
            "Rebuild {}: {} items, {} malformed, thresholds {:?}",
            self.generation,
            self.filter.items().len(),
            self.malformed.len(),
            self.index.thresholds()
        );

        Ok(RebuildReport {
            generation: self.generation,
            item_count: self.filter.items().len(),
            malformed_count: self.malformed.len(),
            thresholds: self.index.thresholds().to_vec(),
            previous_selection,
            selection,
            changed,
            redrawn: false,
        })
    }
}
