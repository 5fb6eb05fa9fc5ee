//! # recfilter
//!
//! Filters a list of comments down to the ones with at least a chosen number
//! of recommendations, and charts how many comments sit at or above each
//! recommendation count.
//!
//! The core is a small synchronous state machine:
//!
//! - an [`Aggregator`](core::Aggregator) scans items into a histogram,
//! - a [`HistogramIndex`](core::HistogramIndex) turns that into descending
//!   thresholds with cumulative "top N" counts,
//! - a [`ThresholdFilter`](core::ThresholdFilter) holds the selected threshold
//!   and decides visibility,
//! - a [`ChangeWatcher`](core::ChangeWatcher) owns all of it and rebuilds
//!   whenever the item source signals a change.
//!
//! ## Quick Start
//!
//! ```rust
//! use rec_filter::core::{ChangeWatcher, NullView};
//! use rec_filter::source::MemorySource;
//!
//! let mut watcher = ChangeWatcher::new(MemorySource::from_counts([0, 3, 3, 5]));
//! watcher.initialize(&mut NullView).unwrap();
//! assert_eq!(watcher.chart_model().thresholds, vec![5, 3, 0]);
//!
//! watcher.select_threshold(3).unwrap();
//! assert_eq!(watcher.items().iter().filter(|i| i.is_visible()).count(), 3);
//! ```
//!
//! ## Module Overview
//!
//! - [`core`] - Aggregation, indexing, filtering and change handling
//! - [`source`] - Item sources (in-memory, JSON file) and file change notification
//! - [`view`] - Chart rows, per-item controls, shortcuts and a text renderer
//! - [`config`] - Configuration loading and validation
//! - [`cli`] - Command-line interface

/// Command-line interface and argument parsing
pub mod cli;
/// Configuration management and validation
pub mod config;
/// Aggregation, threshold index, filter and change watcher
pub mod core;
/// Error types and handling utilities
pub mod error;
/// Item sources and change notification
pub mod source;
/// Presentation helpers and renderers
pub mod view;

pub use core::{ChangeWatcher, FilterSnapshot, ItemSource, View};
/// Re-export main error types for convenient error handling
pub use error::{RecFilterError, RecResult};
