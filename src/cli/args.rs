use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigAction;

/// Main CLI structure for recfilter.
///
/// Reads comments and their recommendation counts from a JSON file, charts
/// how many comments sit at or above each count, and filters to a threshold.
///
/// # Examples
///
/// ```bash
/// # Chart the distribution of recommendations
/// recfilter chart --items comments.json
///
/// # List comments with at least 3 recommendations
/// recfilter filter --items comments.json --threshold 3
///
/// # Redraw whenever the file changes
/// recfilter watch --items comments.json
/// ```
#[derive(Parser)]
#[command(name = "recfilter")]
#[command(about = "Filter comments by recommendation count")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the recommendation chart
    Chart(ChartArgs),

    /// List the comments that meet a threshold
    Filter(FilterArgs),

    /// Redraw the chart whenever the item file changes
    Watch(WatchArgs),

    /// Manage configuration
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output formats for chart and filter commands
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

#[derive(Args, Clone, Debug)]
pub struct ChartArgs {
    /// JSON file with the items
    #[arg(short, long)]
    pub items: PathBuf,

    /// Threshold to mark as selected
    #[arg(short, long)]
    pub threshold: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Highlight the selected row with terminal colors
    #[arg(long)]
    pub color: bool,
}

#[derive(Args, Clone, Debug)]
pub struct FilterArgs {
    /// JSON file with the items
    #[arg(short, long)]
    pub items: PathBuf,

    /// Minimum number of recommendations
    #[arg(short, long)]
    pub threshold: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args, Clone, Debug)]
pub struct WatchArgs {
    /// JSON file with the items
    #[arg(short, long)]
    pub items: PathBuf,

    /// Threshold to start with
    #[arg(short, long)]
    pub threshold: Option<u32>,

    /// Highlight the selected row with terminal colors
    #[arg(long)]
    pub color: bool,
}
