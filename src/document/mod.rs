//! Document management
//! Binds an editing buffer to a file: open, save, reload and watch.
//!
//! A reload never edits the table in place. It reads the file and swaps in a
//! freshly built table, discarding history with the old one.

use crate::buffer::Buffer;
use crate::constants::errors;
use crate::constants::ui::NO_NAME;
use crate::error::{EditError, ErrorReporter, ErrorType, Result};
use crate::settings::EditorSettings;
use crate::table::PieceTable;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::SystemTime;

pub mod watcher;

pub use watcher::{FileWatcher, WatchEvent};

/// Unique identifier for documents
pub type DocumentId = u64;

#[derive(Debug)]
pub struct Document {
    /// Unique document identifier
    pub id: DocumentId,
    /// Editing state over the text
    pub buffer: Buffer,
    /// File path (None if new/unsaved)
    file_path: Option<PathBuf>,
    /// Modification time of the file when we last read or wrote it
    synced_at: Option<SystemTime>,
    /// Errors from watcher-driven reloads land here
    reporter: ErrorReporter,
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| {
        EditError::new(
            ErrorType::Io,
            errors::IO_ERROR,
            format!("{} is not valid UTF-8: {}", path.display(), e),
        )
    })
}

impl Document {
    /// Create a new empty document
    #[must_use]
    pub fn new(id: DocumentId, settings: EditorSettings) -> Self {
        Self::from_text(id, "", settings)
    }

    #[must_use]
    pub fn from_text(id: DocumentId, text: &str, settings: EditorSettings) -> Self {
        Document {
            id,
            buffer: Buffer::new(text, settings),
            file_path: None,
            synced_at: None,
            reporter: ErrorReporter::new(),
        }
    }

    /// Load a document from a file; a missing file opens empty with its path set
    pub fn open(id: DocumentId, path: impl AsRef<Path>, settings: EditorSettings) -> Result<Self> {
        let path = path.as_ref();
        let text = match read_text(path) {
            Ok(text) => text,
            Err(err) if !path.exists() => {
                tracing::debug!(path = %path.display(), %err, "opening new file");
                String::new()
            }
            Err(err) => return Err(err),
        };

        let mut doc = Self::from_text(id, &text, settings);
        doc.file_path = Some(path.to_path_buf());
        doc.synced_at = modified_time(path);
        tracing::debug!(id, path = %path.display(), lines = doc.buffer.table().line_count(), "document opened");
        Ok(doc)
    }

    /// Save document to its current path
    pub fn save(&mut self) -> Result<()> {
        let path = self.file_path.clone().ok_or_else(|| {
            EditError::new(ErrorType::Io, errors::NO_PATH, errors::MSG_NO_FILE_NAME)
        })?;
        self.write_to_file(&path)?;
        self.buffer.mark_saved();
        self.synced_at = modified_time(&path);
        Ok(())
    }

    /// Save document to a new path
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write_to_file(path)?;
        self.file_path = Some(path.to_path_buf());
        self.buffer.mark_saved();
        self.synced_at = modified_time(path);
        Ok(())
    }

    /// Rebuild the table from disk. Refused while there are unsaved changes.
    pub fn reload(&mut self) -> Result<()> {
        let path = self.file_path.clone().ok_or_else(|| {
            EditError::new(ErrorType::Io, errors::NO_PATH, errors::MSG_NO_FILE_NAME)
        })?;
        if self.is_dirty() {
            return Err(EditError::warning(
                ErrorType::Io,
                errors::RELOAD_CONFLICT,
                errors::MSG_UNSAVED_CHANGES,
            ));
        }

        let text = read_text(&path)?;
        self.buffer.replace_table(PieceTable::new(&text));
        self.synced_at = modified_time(&path);
        tracing::debug!(id = self.id, path = %path.display(), "document reloaded");
        Ok(())
    }

    /// Start a background watcher on this document's file
    pub fn watch(&self) -> Result<(FileWatcher, Receiver<WatchEvent>)> {
        let path = self.file_path.clone().ok_or_else(|| {
            EditError::new(ErrorType::Io, errors::NO_PATH, errors::MSG_NO_FILE_NAME)
        })?;
        FileWatcher::spawn(path).map_err(|e| {
            EditError::new(ErrorType::Io, errors::WATCH_FAILED, format!("{:#}", e))
        })
    }

    /// Drain watcher notifications and apply reloads for this document's file.
    ///
    /// Runs on the thread that owns the document. Returns the number of
    /// reloads applied; failures go to the error reporter.
    pub fn process_watch_events(&mut self, events: &Receiver<WatchEvent>) -> usize {
        let mut reloads = 0;
        for event in events.try_iter() {
            let Some(own) = self.file_path.clone() else {
                continue;
            };
            match event {
                WatchEvent::Changed(path) if path == own => {
                    // Our own save bumps the mtime too
                    if modified_time(&path) == self.synced_at {
                        continue;
                    }
                    let result = self.reload();
                    if self.reporter.absorb(result).is_some() {
                        reloads += 1;
                    }
                }
                WatchEvent::Removed(path) if path == own => {
                    self.reporter.report(EditError::warning(
                        ErrorType::Io,
                        errors::FILE_REMOVED,
                        format!("{} was removed from disk", path.display()),
                    ));
                }
                _ => {}
            }
        }
        reloads
    }

    /// Check if document has unsaved changes
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.buffer.is_modified()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.table().is_empty()
    }

    #[must_use]
    pub fn has_path(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        self.file_path = Some(path.as_ref().to_path_buf());
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Get display name for UI (filename or "[No Name]")
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(NO_NAME)
    }

    #[must_use]
    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    /// Atomic write to file; the temp file never outlives a failed write
    fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let text = self.buffer.text();

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let temp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("file")
        ));

        let result = fs::File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(text.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&temp_path, path));

        if let Err(err) = &result {
            tracing::warn!(path = %path.display(), %err, "save failed");
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                tracing::debug!(temp = %temp_path.display(), %cleanup, "temp file not removed");
            }
        }
        result
    }
}
