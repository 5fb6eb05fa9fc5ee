use crate::core::errors::{ConfigError, FilterError, SourceError};
use thiserror::Error;

/// Main error type for recfilter.
///
/// Malformed counts never surface here; the aggregator skips and reports them.
#[derive(Error, Debug)]
pub enum RecFilterError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("Item source failed")]
    Source(#[from] SourceError),

    #[error("Configuration error")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize output")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for recfilter operations
pub type RecResult<T> = Result<T, RecFilterError>;
