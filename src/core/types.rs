use crate::core::errors::MalformedCountError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier of an item, owned by the item source.
///
/// It is the only identity preserved across rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Result of reading one item's count: either a validated integer or an
/// explicit malformed-value signal.
pub type CountReading = Result<u32, MalformedCountError>;

/// One entry as enumerated by an [`ItemSource`](crate::core::ItemSource)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub id: ItemId,
    pub count: CountReading,
}

impl RawItem {
    pub fn valid(id: impl Into<ItemId>, count: u32) -> Self {
        Self {
            id: id.into(),
            count: Ok(count),
        }
    }

    pub fn malformed(error: MalformedCountError) -> Self {
        Self {
            id: error.id.clone(),
            count: Err(error),
        }
    }
}

/// An item that passed aggregation.
///
/// `recommended_count` is read-only data from the source; `visible` is
/// derived and only ever written by the threshold filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub recommended_count: u32,
    pub(crate) visible: bool,
}

impl Item {
    pub fn new(id: ItemId, recommended_count: u32) -> Self {
        Self {
            id,
            recommended_count,
            visible: true,
        }
    }

    /// Last visibility decision made by the threshold filter
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Visibility decisions keyed by item id
pub type VisibilityMap = HashMap<ItemId, bool>;
