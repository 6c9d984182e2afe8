//! File watcher for development mode.
//!
//! Watches the design file (and optionally the config file) so the bundle can
//! be regenerated whenever either changes. The parent directories are watched
//! rather than the files themselves, since editors often save by replacing.

use crate::error::{CliResult, WatchError};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Event types for file changes.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A watched file was written or replaced.
    Modified(PathBuf),
    /// A watched file was removed.
    Deleted(PathBuf),
    /// An error occurred.
    Error(String),
}

/// Watcher over a fixed set of files.
pub struct FileWatcher {
    files: Vec<PathBuf>,
    debounce_ms: u64,
}

impl FileWatcher {
    /// Create a watcher for a single file.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            files: vec![file.into()],
            debounce_ms: 500,
        }
    }

    /// Also watch `file`.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Set the debounce duration in milliseconds.
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Watched files.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Directories that must be watched to see every file.
    pub fn directories(&self) -> BTreeSet<PathBuf> {
        self.files
            .iter()
            .map(|file| match file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            })
            .collect()
    }

    /// Start watching.
    ///
    /// The debouncer must be kept alive for events to keep arriving.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel::<WatchEvent>();
        let names: BTreeSet<OsString> = self
            .files
            .iter()
            .filter_map(|file| file.file_name().map(OsString::from))
            .collect();

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: Result<Vec<DebouncedEvent>, notify::Error>| match result {
                Ok(events) => {
                    for event in events {
                        if !is_watched(&names, &event.path) {
                            continue;
                        }

                        let watch_event = if event.path.exists() {
                            WatchEvent::Modified(event.path)
                        } else {
                            WatchEvent::Deleted(event.path)
                        };

                        let _ = tx.send(watch_event);
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::Error(e.to_string()));
                }
            },
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        for dir in self.directories() {
            debouncer
                .watcher()
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(|e| WatchError::Notify(format!("{}: {}", dir.display(), e)))?;
        }

        Ok((debouncer, rx))
    }
}

fn is_watched(names: &BTreeSet<OsString>, path: &Path) -> bool {
    path.file_name().is_some_and(|name| names.contains(name))
}

impl WatchEvent {
    /// Get the path associated with this event.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WatchEvent::Modified(p) | WatchEvent::Deleted(p) => Some(p),
            WatchEvent::Error(_) => None,
        }
    }

    /// Check if this is an error event.
    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error(_))
    }

    /// Get the error message if this is an error event.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WatchEvent::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
