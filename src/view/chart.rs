use crate::config::ChartConfig;
use crate::core::constants::labels;
use crate::core::traits::ChartModel;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowLabel {
    /// Threshold 0, every item
    All,
    Top,
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(labels::ALL),
            Self::Top => f.write_str(labels::TOP),
        }
    }
}

/// One drawable row of the histogram chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    pub id: String,
    pub threshold: u32,
    pub top_count: usize,
    pub label: RowLabel,
    pub bar_width_percent: u32,
    pub selected: bool,
}

impl ChartRow {
    /// "All 12" or "Top 4"
    pub fn count_text(&self) -> String {
        format!("{} {}", self.label, self.top_count)
    }
}

pub fn row_id(prefix: &str, threshold: u32) -> String {
    format!("{prefix}{threshold}")
}

/// Bar width scaled so that `max_count` gets `max_width` percent
pub fn bar_width_percent(threshold: u32, max_count: u32, max_width: u32) -> u32 {
    if max_count == 0 {
        return 0;
    }
    let ratio = f64::from(threshold) / f64::from(max_count);
    (ratio * f64::from(max_width)).round() as u32
}

/// Rows in chart order (highest threshold first)
pub fn build_rows(chart: &ChartModel, selection: u32, config: &ChartConfig) -> Vec<ChartRow> {
    chart
        .thresholds
        .iter()
        .map(|&threshold| ChartRow {
            id: row_id(&config.row_prefix, threshold),
            threshold,
            top_count: chart.top_count(threshold).unwrap_or(0),
            label: if threshold == 0 { RowLabel::All } else { RowLabel::Top },
            bar_width_percent: bar_width_percent(
                threshold,
                chart.max_count,
                config.bar_max_width_percent,
            ),
            selected: threshold == selection,
        })
        .collect()
}
