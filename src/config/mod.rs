pub mod paths;
pub mod validation;

pub use paths::{config_dir, default_config_file};
pub use validation::{ConfigValidator, ValidationReport};

use crate::core::constants::{colors, element_ids, labels, shortcuts};
use crate::core::errors::ConfigError;
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration actions for recfilter
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Validate the configuration file
    Validate,
}

/// Complete recfilter configuration.
///
/// Every section is optional in the TOML file; missing values fall back to
/// the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    pub chart: ChartConfig,
    pub highlight: HighlightConfig,
    pub watcher: WatcherConfig,
    pub logging: LoggingConfig,
    pub shortcuts: ShortcutConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub heading: String,
    /// Text of the link that jumps back to the chart
    pub link_text: String,
    /// Width of the bar for the highest count, in percent of the row
    pub bar_max_width_percent: u32,
    /// Bar color of unselected rows when color output is on
    pub background: String,
    /// Highlight of the selected row when color output is on
    pub selected: String,
    pub row_prefix: String,
    /// Element id of the chart, and of the link that jumps to it
    pub chart_id: String,
    pub chart_link_id: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: labels::CHART_TITLE.to_string(),
            heading: labels::CHART_HEADING.to_string(),
            link_text: labels::CHART_LINK.to_string(),
            bar_max_width_percent: 80,
            background: colors::CHART_BACKGROUND.to_string(),
            selected: colors::CHART_SELECTED.to_string(),
            row_prefix: element_ids::ROW_PREFIX.to_string(),
            chart_id: element_ids::CHART_ID.to_string(),
            chart_link_id: element_ids::CHART_LINK_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Items with at least this many recommendations get a border
    pub min_count: u32,
    pub color: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            min_count: 3,
            color: colors::FAVORITE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    pub max_coalesced_rebuilds: usize,
    pub debounce_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            max_coalesced_rebuilds: 8,
            debounce_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub show_all: String,
    pub jump_to_chart: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            show_all: shortcuts::SHOW_ALL.to_string(),
            jump_to_chart: shortcuts::JUMP_TO_CHART.to_string(),
        }
    }
}

impl FilterConfig {
    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::InvalidToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load and reject invalid values
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|source| ConfigError::SerializeFailed { source })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First invalid value, if any
    pub fn validate(&self) -> Result<(), ConfigError> {
        match ConfigValidator::new().validate(self).errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
