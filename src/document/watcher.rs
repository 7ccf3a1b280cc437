//! Background file watching
//!
//! Watches the directory holding a file through the OS notification backend
//! and reports changes to that one file over a channel. Watching the parent
//! directory keeps the watch alive across rename-over saves. The watcher never
//! touches a document; the owning thread drains the channel with
//! [`super::Document::process_watch_events`].

use anyhow::Context;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

/// Message sent from the watcher backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The file was written, created or renamed into place
    Changed(PathBuf),
    /// The file no longer exists
    Removed(PathBuf),
}

/// Handle to a running watcher. Dropping it stops the backend.
pub struct FileWatcher {
    path: PathBuf,
    watcher: Option<RecommendedWatcher>,
}

/// Turn a backend event into a document event if it concerns `target`
fn classify(event: &Event, target: &Path, reported: &Path) -> Option<WatchEvent> {
    if !event.paths.iter().any(|p| p == target || p == reported) {
        return None;
    }
    match event.kind {
        EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {
            // Renames and removals look alike per event; the disk decides
            if target.exists() {
                Some(WatchEvent::Changed(reported.to_path_buf()))
            } else {
                Some(WatchEvent::Removed(reported.to_path_buf()))
            }
        }
        _ => None,
    }
}

fn forward(
    result: notify::Result<Event>,
    target: &Path,
    reported: &Path,
    tx: &Sender<WatchEvent>,
) {
    match result {
        Ok(event) => {
            if let Some(change) = classify(&event, target, reported) {
                tracing::debug!(?change, kind = ?event.kind, "file watcher event");
                // Receiver gone means nobody listens any more
                let _ = tx.send(change);
            }
        }
        Err(err) => tracing::warn!(%err, path = %reported.display(), "file watcher error"),
    }
}

impl FileWatcher {
    /// Start watching `path`, which must exist
    pub fn spawn(path: impl Into<PathBuf>) -> anyhow::Result<(Self, Receiver<WatchEvent>)> {
        let path = path.into();
        anyhow::ensure!(
            path.exists(),
            "cannot watch {}: file does not exist",
            path.display()
        );

        let name = path
            .file_name()
            .with_context(|| format!("cannot watch {}: no file name", path.display()))?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        // Backends report canonical paths on some platforms
        let dir = parent
            .canonicalize()
            .with_context(|| format!("cannot resolve {}", parent.display()))?;
        let target = dir.join(name);

        let (tx, rx) = mpsc::channel();
        let reported = path.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            forward(res, &target, &reported, &tx);
        })
        .context("failed to create file watcher")?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", dir.display()))?;

        tracing::debug!(path = %path.display(), "file watcher started");
        Ok((
            FileWatcher {
                path,
                watcher: Some(watcher),
            },
            rx,
        ))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.watcher.is_some()
    }

    /// Shut the backend down; no events are sent afterwards
    pub fn stop(&mut self) {
        if self.watcher.take().is_some() {
            tracing::debug!(path = %self.path.display(), "file watcher stopped");
        }
    }
}

impl fmt::Debug for FileWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileWatcher")
            .field("path", &self.path)
            .field("running", &self.is_running())
            .finish()
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
