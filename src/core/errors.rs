/// Domain-specific error types for recfilter using thiserror
///
/// Each concern gets its own enum so callers can match on exactly what went
/// wrong: a single item with an unreadable count, a rejected threshold, a
/// source that could not be read at all, or a bad configuration file.
use crate::core::types::ItemId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why an item's recommendation count could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No count was present at all
    Missing,
    /// The value was not a decimal integer
    NotNumeric,
    /// The value was below zero
    Negative,
    /// The value did not fit in a `u32`
    OutOfRange,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Missing => "count is missing",
            Self::NotNumeric => "count is not a whole number",
            Self::Negative => "count is negative",
            Self::OutOfRange => "count is too large",
        };
        f.write_str(text)
    }
}

/// A single item whose recommendation count is unusable.
///
/// Recovered locally: the item is left out of the histogram, the item index
/// and visibility for that pass, and every other item is still processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed recommendation count for item {id}: {reason} (raw value: {raw:?})")]
pub struct MalformedCountError {
    pub id: ItemId,
    pub raw: String,
    pub reason: MalformedReason,
}

impl MalformedCountError {
    pub fn new(id: ItemId, raw: impl Into<String>, reason: MalformedReason) -> Self {
        Self {
            id,
            raw: raw.into(),
            reason,
        }
    }
}

/// Errors raised by threshold selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Threshold {requested} is not one of the current thresholds {available:?}")]
    InvalidThreshold { requested: u32, available: Vec<u32> },
}

/// Whole-source failures reported by an item source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read item source {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Item source {path} is not valid JSON")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid format in {context}: expected {expected}, found {found}")]
    InvalidFormat {
        context: String,
        expected: String,
        found: String,
    },

    #[error("Failed to watch {path} for changes: {message}")]
    WatchFailed { path: PathBuf, message: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write configuration file {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML in {path}")]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration")]
    SerializeFailed {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Unable to determine the configuration directory for this platform")]
    NoConfigDir,
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
