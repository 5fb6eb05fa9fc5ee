//! Item sources: where items and their recommendation counts come from.
//!
//! Sources own count validation. They hand the core either a checked `u32`
//! or a [`MalformedCountError`], never display text.

pub mod file_notifier;
pub mod json_file;
pub mod memory;

pub use file_notifier::FileChangeNotifier;
pub use json_file::JsonFileSource;
pub use memory::MemorySource;

use crate::core::errors::{MalformedCountError, MalformedReason};
use crate::core::types::{CountReading, ItemId};

/// Validate a textual recommendation count.
///
/// Surrounding whitespace is ignored; anything other than a plain decimal
/// integer that fits in a `u32` is malformed.
pub fn count_from_text(id: &ItemId, text: &str) -> CountReading {
    let trimmed = text.trim();
    let malformed = |reason| Err(MalformedCountError::new(id.clone(), text, reason));

    if trimmed.is_empty() {
        return malformed(MalformedReason::Missing);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return malformed(MalformedReason::NotNumeric);
    }
    if negative {
        // "-0" is still zero
        return if digits.bytes().all(|b| b == b'0') {
            Ok(0)
        } else {
            malformed(MalformedReason::Negative)
        };
    }

    digits
        .parse::<u32>()
        .or_else(|_| malformed(MalformedReason::OutOfRange))
}
