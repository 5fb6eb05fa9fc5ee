use super::errors::MalformedCountError;
use super::histogram::Histogram;
use super::types::{Item, RawItem};
use tracing::warn;

/// Output of one aggregation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregation {
    pub histogram: Histogram,
    /// Valid items in source enumeration order
    pub items: Vec<Item>,
    /// Highest count seen, `0` when there are no items
    pub max_count: u32,
    /// Items skipped because their count was unusable
    pub malformed: Vec<MalformedCountError>,
}

impl Aggregation {
    pub fn valid_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Scans enumerated items into a histogram and a flat item index
#[derive(Debug, Default, Clone, Copy)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate<I>(&self, raw_items: I) -> Aggregation
    where
        I: IntoIterator<Item = RawItem>,
    {
        let mut aggregation = Aggregation::default();

        for raw in raw_items {
            match raw.count {
                Ok(count) => {
                    aggregation.histogram.record(count);
                    aggregation.max_count = aggregation.max_count.max(count);
                    aggregation.items.push(Item::new(raw.id, count));
                }
                Err(error) => {
                    warn!("Skipping item: {}", error);
                    aggregation.malformed.push(error);
                }
            }
        }

        aggregation
    }
}
