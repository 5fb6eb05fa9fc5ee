use super::count_from_text;
use crate::core::errors::SourceError;
use crate::core::traits::ItemSource;
use crate::core::types::{ItemId, RawItem};

/// Ordered in-memory item list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    entries: Vec<RawItem>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items named `c-0`, `c-1`, ... with the given counts
    pub fn from_counts<I: IntoIterator<Item = u32>>(counts: I) -> Self {
        Self {
            entries: counts
                .into_iter()
                .enumerate()
                .map(|(i, count)| RawItem::valid(format!("c-{i}"), count))
                .collect(),
        }
    }

    pub fn push(&mut self, item: RawItem) {
        self.entries.push(item);
    }

    pub fn push_count(&mut self, id: impl Into<ItemId>, count: u32) {
        self.entries.push(RawItem::valid(id, count));
    }

    /// Append an item whose count still has to be validated
    pub fn push_raw(&mut self, id: impl Into<ItemId>, text: &str) {
        let id = id.into();
        let count = count_from_text(&id, text);
        self.entries.push(RawItem { id, count });
    }

    /// Returns false when no item has this id
    pub fn set_count(&mut self, id: &str, count: u32) -> bool {
        match self.find_mut(id) {
            Some(entry) => {
                entry.count = Ok(count);
                true
            }
            None => false,
        }
    }

    pub fn set_raw(&mut self, id: &str, text: &str) -> bool {
        match self.find_mut(id) {
            Some(entry) => {
                entry.count = count_from_text(&entry.id, text);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id.as_str() != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut RawItem> {
        self.entries.iter_mut().find(|entry| entry.id.as_str() == id)
    }
}

impl ItemSource for MemorySource {
    fn list_items(&self) -> Result<Vec<RawItem>, SourceError> {
        Ok(self.entries.clone())
    }
}
