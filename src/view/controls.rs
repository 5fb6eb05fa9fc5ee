//! Per-item decorations: the "Show: Top N recommendations | All" controls,
//! the highlight border on popular items, and scroll anchoring when a
//! control re-filters the page.
//!
//! The text renderer only uses the controls and highlight. [`ScrollAnchor`]
//! is for views embedded in a scrolling page, which own the element positions.

use crate::config::HighlightConfig;
use crate::core::constants::labels;
use crate::core::traits::ChartModel;
use crate::core::types::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// A clickable control that selects `threshold`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowControl {
    pub threshold: u32,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowControls {
    pub item_id: ItemId,
    pub controls: Vec<ShowControl>,
}

impl ShowControls {
    pub fn for_item(item: &Item, chart: &ChartModel, selection: u32) -> Self {
        let mut controls = Vec::with_capacity(2);

        if item.recommended_count > 0 {
            let threshold = item.recommended_count;
            let top = chart.top_count(threshold).unwrap_or(0);
            controls.push(ShowControl {
                threshold,
                text: format!("{} {top} {}", labels::TOP, labels::RECOMMENDATIONS),
                selected: threshold == selection,
            });
        }

        controls.push(ShowControl {
            threshold: 0,
            text: labels::ALL.to_string(),
            selected: selection == 0,
        });

        Self {
            item_id: item.id.clone(),
            controls,
        }
    }

    /// "Show: Top 3 recommendations | All"
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self.controls.iter().map(|c| c.text.as_str()).collect();
        format!("{} {}", labels::SHOW, parts.join(" | "))
    }
}

/// Left border drawn on popular items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub border_px: u32,
    pub color: String,
}

impl Highlight {
    pub fn for_item(item: &Item, config: &HighlightConfig) -> Option<Self> {
        if item.recommended_count < config.min_count {
            return None;
        }
        Some(Self {
            // round(count / 2) with halves rounding up, plus one
            border_px: item.recommended_count / 2 + item.recommended_count % 2 + 1,
            color: config.color.clone(),
        })
    }
}

/// Keeps a clicked control at the same place in the viewport after the
/// content above it is shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnchor {
    offset_in_viewport: i64,
}

impl ScrollAnchor {
    /// Capture before filtering: the control's page position and current scroll
    pub fn capture(element_pos: i64, scroll: i64) -> Self {
        Self {
            offset_in_viewport: element_pos - scroll,
        }
    }

    /// Scroll position that puts the control back where it was
    pub fn restore(&self, new_element_pos: i64) -> i64 {
        new_element_pos - self.offset_in_viewport
    }
}
