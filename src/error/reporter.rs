//! Error Reporter
//! Logs and records errors the caller chose not to propagate

use crate::constants::defaults::ERROR_HISTORY;
use crate::error::{EditError, ErrorSeverity};
use std::collections::VecDeque;

/// Fail-open sink for engine errors.
///
/// Every reported error is emitted through `tracing` at a level matching its
/// severity and kept in a bounded history so the UI can surface it later.
#[derive(Debug)]
pub struct ErrorReporter {
    history: VecDeque<EditError>,
    capacity: usize,
}

impl ErrorReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(ERROR_HISTORY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity.min(ERROR_HISTORY)),
            capacity: capacity.max(1),
        }
    }

    pub fn report(&mut self, err: EditError) {
        match err.severity {
            ErrorSeverity::Critical | ErrorSeverity::Error => {
                tracing::error!(code = %err.code, kind = %err.kind, "{}", err.message);
            }
            ErrorSeverity::Warning => {
                tracing::warn!(code = %err.code, kind = %err.kind, "{}", err.message);
            }
            ErrorSeverity::Info => {
                tracing::info!(code = %err.code, kind = %err.kind, "{}", err.message);
            }
        }

        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(err);
    }

    /// Report the error of a failed result and discard it
    pub fn absorb<T>(&mut self, result: Result<T, EditError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    /// Most recently reported error
    #[must_use]
    pub fn last(&self) -> Option<&EditError> {
        self.history.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditError> {
        self.history.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
