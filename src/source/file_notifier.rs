//! Raises a [`ChangeSignal`] whenever an item file changes on disk

use crate::core::errors::SourceError;
use crate::core::signal::ChangeSignal;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Keeps a file system watcher alive for as long as it exists.
///
/// The parent directory is watched rather than the file itself so that
/// editors which replace the file atomically are still noticed.
pub struct FileChangeNotifier {
    path: PathBuf,
    _watcher: RecommendedWatcher,
}

impl FileChangeNotifier {
    pub fn watch(path: impl Into<PathBuf>, signal: ChangeSignal) -> Result<Self, SourceError> {
        let path = path.into();
        let file_name = path.file_name().map(OsString::from).ok_or_else(|| {
            SourceError::WatchFailed {
                path: path.clone(),
                message: "path has no file name".to_string(),
            }
        })?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            match result {
                Ok(event) if is_relevant(&event, &file_name) => {
                    debug!("Item file changed: {:?}", event.kind);
                    signal.notify();
                }
                Ok(_) => {}
                Err(e) => warn!("File watcher error: {}", e),
            }
        })
        .map_err(|e| SourceError::WatchFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|e| SourceError::WatchFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;

        debug!("Watching {} for changes", path.display());
        Ok(Self {
            path,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    let kind_matches = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    kind_matches
        && event
            .paths
            .iter()
            .any(|p| p.file_name().map(|n| n == file_name.as_os_str()).unwrap_or(false))
}
