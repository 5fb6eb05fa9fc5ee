//! Frequency model over recommendation counts and the cumulative "top-N"
//! index derived from it.

use std::collections::BTreeMap;

/// Count -> number of items with exactly that count.
///
/// The `0` bucket always exists (it stands for "show all") and may hold a
/// frequency of zero; every other bucket holds at least one item. Only
/// [`Histogram::new`] and [`Histogram::record`] build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: BTreeMap<u32, usize>,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    pub fn new() -> Self {
        let mut buckets = BTreeMap::new();
        buckets.insert(0, 0);
        Self { buckets }
    }

    pub fn record(&mut self, count: u32) {
        *self.buckets.entry(count).or_insert(0) += 1;
    }

    pub fn frequency(&self, count: u32) -> usize {
        self.buckets.get(&count).copied().unwrap_or(0)
    }

    /// Sum of all frequencies, equal to the number of items recorded
    pub fn total(&self) -> usize {
        self.buckets.values().sum()
    }

    pub fn contains(&self, count: u32) -> bool {
        self.buckets.contains_key(&count)
    }

    /// Buckets in ascending count order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, usize)> + '_ {
        self.buckets.iter().map(|(count, freq)| (*count, *freq))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when no item has been recorded (only the empty `0` bucket remains)
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Number of items whose count is at least `threshold`.
    ///
    /// Works for any threshold, not just the ones present as buckets.
    pub fn top_count(&self, threshold: u32) -> usize {
        self.buckets.range(threshold..).map(|(_, freq)| *freq).sum()
    }
}

impl FromIterator<u32> for Histogram {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut histogram = Histogram::new();
        for count in iter {
            histogram.record(count);
        }
        histogram
    }
}

/// Descending thresholds with their cumulative counts.
///
/// `thresholds` is strictly decreasing and always ends in `0`; `top_counts`
/// is parallel to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramIndex {
    thresholds: Vec<u32>,
    top_counts: Vec<usize>,
}

impl Default for HistogramIndex {
    fn default() -> Self {
        Self::build(&Histogram::new())
    }
}

impl HistogramIndex {
    /// Derive the index with one descending running sum over the buckets
    pub fn build(histogram: &Histogram) -> Self {
        let mut thresholds = Vec::with_capacity(histogram.len() + 1);
        let mut top_counts = Vec::with_capacity(histogram.len() + 1);
        let mut running = 0usize;

        for (count, freq) in histogram.iter().rev() {
            running += freq;
            thresholds.push(count);
            top_counts.push(running);
        }

        // Histogram always carries the 0 bucket, but the index must not rely on it.
        if thresholds.last() != Some(&0) {
            thresholds.push(0);
            top_counts.push(running);
        }

        Self {
            thresholds,
            top_counts,
        }
    }

    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    pub fn contains(&self, threshold: u32) -> bool {
        // Descending order, so search with reversed comparison.
        self.thresholds
            .binary_search_by(|probe| threshold.cmp(probe))
            .is_ok()
    }

    /// Cumulative count for a threshold present in the index
    pub fn top_count(&self, threshold: u32) -> Option<usize> {
        self.thresholds
            .binary_search_by(|probe| threshold.cmp(probe))
            .ok()
            .map(|pos| self.top_counts[pos])
    }

    /// Cumulative count for any threshold, present or not.
    ///
    /// Equals the count of the smallest indexed threshold that is `>= threshold`.
    pub fn top_count_at_least(&self, threshold: u32) -> usize {
        self.thresholds
            .iter()
            .zip(&self.top_counts)
            .take_while(|(t, _)| **t >= threshold)
            .last()
            .map(|(_, top)| *top)
            .unwrap_or(0)
    }

    /// Greatest indexed threshold that is `<= threshold`.
    ///
    /// Always succeeds because `0` is always indexed.
    pub fn nearest_at_or_below(&self, threshold: u32) -> u32 {
        self.thresholds
            .iter()
            .copied()
            .find(|t| *t <= threshold)
            .unwrap_or(0)
    }

    pub fn max_threshold(&self) -> u32 {
        self.thresholds.first().copied().unwrap_or(0)
    }

    /// `(threshold, top_count)` pairs in descending threshold order
    pub fn entries(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.thresholds
            .iter()
            .copied()
            .zip(self.top_counts.iter().copied())
    }

    /// Cumulative counts keyed by threshold
    pub fn cumulative(&self) -> BTreeMap<u32, usize> {
        self.entries().collect()
    }
}
