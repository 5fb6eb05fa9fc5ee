use crate::core::errors::SourceError;
use crate::core::types::{Item, RawItem, VisibilityMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supplies the current items and their counts.
///
/// Unreadable counts must be surfaced as `Err` readings rather than dropped,
/// so the aggregator can report and skip them.
pub trait ItemSource {
    /// Enumerate items in page order
    fn list_items(&self) -> Result<Vec<RawItem>, SourceError>;
}

impl<S: ItemSource + ?Sized> ItemSource for Box<S> {
    fn list_items(&self) -> Result<Vec<RawItem>, SourceError> {
        (**self).list_items()
    }
}

/// Draws the chart and applies show/hide decisions.
///
/// Called only after a rebuild, always with the full state.
pub trait View {
    fn redraw(&mut self, snapshot: &FilterSnapshot);
}

impl<V: View + ?Sized> View for &mut V {
    fn redraw(&mut self, snapshot: &FilterSnapshot) {
        (**self).redraw(snapshot)
    }
}

/// A view that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl View for NullView {
    fn redraw(&mut self, _snapshot: &FilterSnapshot) {}
}

/// Data needed to draw the histogram chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartModel {
    /// Strictly descending, always ends in `0`
    pub thresholds: Vec<u32>,
    pub top_counts: BTreeMap<u32, usize>,
    pub max_count: u32,
}

impl ChartModel {
    pub fn top_count(&self, threshold: u32) -> Option<usize> {
        self.top_counts.get(&threshold).copied()
    }

    pub fn total(&self) -> usize {
        self.top_count(0).unwrap_or(0)
    }
}

/// Full state handed to a [`View`] on redraw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSnapshot {
    pub chart: ChartModel,
    pub items: Vec<Item>,
    pub selection: u32,
}

impl FilterSnapshot {
    pub fn visibility(&self) -> VisibilityMap {
        self.items
            .iter()
            .map(|item| (item.id.clone(), item.is_visible()))
            .collect()
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_visible())
    }
}
