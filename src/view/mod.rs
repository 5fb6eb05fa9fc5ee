//! Presentation helpers that turn core state into something drawable.
//!
//! Nothing in here decides visibility; it only reads
//! [`FilterSnapshot`](crate::core::FilterSnapshot) and the chart model.

pub mod chart;
pub mod color;
pub mod controls;
pub mod shortcuts;
pub mod text;

pub use chart::{bar_width_percent, build_rows, row_id, ChartRow, RowLabel};
pub use color::hex_rgb;
pub use controls::{Highlight, ScrollAnchor, ShowControl, ShowControls};
pub use shortcuts::{KeyChord, ShortcutAction, ShortcutMap};
pub use text::TextRenderer;
