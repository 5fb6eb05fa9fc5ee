pub mod aggregator;
pub mod change_watcher;
pub mod constants;
pub mod errors;
pub mod histogram;
pub mod signal;
pub mod threshold_filter;
pub mod traits;
pub mod types;

pub use aggregator::{Aggregation, Aggregator};
pub use change_watcher::{ChangeWatcher, RebuildReport};
pub use errors::{ConfigError, FilterError, MalformedCountError, MalformedReason, SourceError};
pub use histogram::{Histogram, HistogramIndex};
pub use signal::ChangeSignal;
pub use threshold_filter::ThresholdFilter;
pub use traits::*;
pub use types::*;
