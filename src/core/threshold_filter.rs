use super::errors::FilterError;
use super::histogram::HistogramIndex;
use super::types::{Item, ItemId, VisibilityMap};
use tracing::debug;

/// Holds the selected threshold and the visibility of every item.
///
/// This is the only place that writes `Item::visible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdFilter {
    selection: u32,
    thresholds: Vec<u32>,
    items: Vec<Item>,
}

impl Default for ThresholdFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdFilter {
    pub fn new() -> Self {
        Self {
            selection: 0,
            thresholds: vec![0],
            items: Vec::new(),
        }
    }

    /// Select a threshold from the current threshold list.
    ///
    /// On rejection neither the selection nor any visibility flag changes.
    pub fn select_threshold(&mut self, threshold: u32) -> Result<(), FilterError> {
        if !self.thresholds.contains(&threshold) {
            return Err(FilterError::InvalidThreshold {
                requested: threshold,
                available: self.thresholds.clone(),
            });
        }

        self.selection = threshold;
        self.apply();
        debug!(
            "Selected threshold {} ({} of {} items visible)",
            threshold,
            self.visible_count(),
            self.items.len()
        );
        Ok(())
    }

    pub fn current_selection(&self) -> u32 {
        self.selection
    }

    /// Last computed visibility of an item; unknown ids are not visible
    pub fn is_visible(&self, id: &ItemId) -> bool {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .map(Item::is_visible)
            .unwrap_or(false)
    }

    pub fn visibility(&self) -> VisibilityMap {
        self.items
            .iter()
            .map(|item| (item.id.clone(), item.visible))
            .collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }

    /// Replace the item set after a rebuild and recompute visibility.
    ///
    /// `selection` must already be a member of `index`.
    pub(crate) fn rebase(&mut self, items: Vec<Item>, index: &HistogramIndex, selection: u32) {
        debug_assert!(index.contains(selection));
        self.items = items;
        self.thresholds = index.thresholds().to_vec();
        self.selection = selection;
        self.apply();
    }

    /// Back to "show all"; threshold 0 is always valid
    pub(crate) fn reset_selection(&mut self) {
        self.selection = 0;
        self.apply();
    }

    fn apply(&mut self) {
        let threshold = self.selection;
        for item in &mut self.items {
            // Threshold 0 shows everything.
            item.visible = item.recommended_count >= threshold;
        }
    }
}
