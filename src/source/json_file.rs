use super::count_from_text;
use crate::core::errors::{MalformedCountError, MalformedReason, SourceError};
use crate::core::traits::ItemSource;
use crate::core::types::{CountReading, ItemId, RawItem};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reads items from a JSON array of `{ "id": ..., "recommended": ... }`.
///
/// The file is re-read on every call, so the source always reflects what is
/// currently on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON document without touching the file system
    pub fn parse(content: &str, context: &Path) -> Result<Vec<RawItem>, SourceError> {
        let document: Value =
            serde_json::from_str(content).map_err(|source| SourceError::InvalidJson {
                path: context.to_path_buf(),
                source,
            })?;

        let entries = document.as_array().ok_or_else(|| SourceError::InvalidFormat {
            context: context.display().to_string(),
            expected: "an array of items".to_string(),
            found: json_kind(&document).to_string(),
        })?;

        let mut items = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let Some(id) = entry.get("id").and_then(item_id) else {
                warn!("Skipping entry {} without a usable id", position);
                continue;
            };
            let count = count_from_value(&id, entry.get("recommended"));
            items.push(RawItem { id, count });
        }
        Ok(items)
    }
}

impl ItemSource for JsonFileSource {
    fn list_items(&self) -> Result<Vec<RawItem>, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;
        Self::parse(&content, &self.path)
    }
}

fn item_id(value: &Value) -> Option<ItemId> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(ItemId::new(s.trim())),
        Value::Number(n) => Some(ItemId::new(n.to_string())),
        _ => None,
    }
}

fn count_from_value(id: &ItemId, value: Option<&Value>) -> CountReading {
    let malformed = |raw: String, reason| Err(MalformedCountError::new(id.clone(), raw, reason));

    match value {
        None | Some(Value::Null) => malformed(String::new(), MalformedReason::Missing),
        Some(Value::String(text)) => count_from_text(id, text),
        Some(Value::Number(n)) => {
            if let Some(unsigned) = n.as_u64() {
                u32::try_from(unsigned)
                    .or_else(|_| malformed(n.to_string(), MalformedReason::OutOfRange))
            } else if n.as_i64().is_some() {
                malformed(n.to_string(), MalformedReason::Negative)
            } else {
                malformed(n.to_string(), MalformedReason::NotNumeric)
            }
        }
        Some(other) => malformed(other.to_string(), MalformedReason::NotNumeric),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
