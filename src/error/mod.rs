//! Centralized error handling for linelog
//! Defines common error types, severity levels, and error codes

use crate::constants::errors;
use std::fmt;

pub mod reporter;

pub use reporter::ErrorReporter;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - something might be wrong but operation can continue
    Warning,
    /// Standard error - operation failed but the document is untouched
    Error,
    /// Critical error - may lead to data loss
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Line index outside `[0, line_count)`
    OutOfRange,
    /// Character offset that does not address the line
    MalformedOffset,
    /// Text that cannot live inside a single line
    MalformedText,
    /// File system or I/O errors
    Io,
    /// Configuration or settings errors
    Settings,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "OutOfRange"),
            Self::MalformedOffset => write!(f, "MalformedOffset"),
            Self::MalformedText => write!(f, "MalformedText"),
            Self::Io => write!(f, "IO"),
            Self::Settings => write!(f, "Settings"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error raised by the edit log or its callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "LINE_OUT_OF_RANGE")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl EditError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Line index is not in `[0, line_count)`
    pub fn line_out_of_range(line: usize, line_count: usize) -> Self {
        Self::new(
            ErrorType::OutOfRange,
            errors::LINE_OUT_OF_RANGE,
            format!("Line {} out of range (line count: {})", line, line_count),
        )
    }

    /// Offset does not address a character of the line
    pub fn malformed_offset(line: usize, offset: usize, len: usize) -> Self {
        Self::new(
            ErrorType::MalformedOffset,
            errors::MALFORMED_OFFSET,
            format!(
                "Offset {} is not valid on line {} (length: {})",
                offset, line, len
            ),
        )
    }

    /// Text would carry a line break into a single line
    pub fn line_break_in_text(line: usize) -> Self {
        Self::new(
            ErrorType::MalformedText,
            errors::LINE_BREAK_IN_TEXT,
            format!("Text inserted into line {} contains a line break", line),
        )
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for EditError {}

impl From<String> for EditError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, errors::GENERIC_ERROR, msg)
    }
}

impl From<&str> for EditError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, errors::GENERIC_ERROR, msg)
    }
}

impl From<std::io::Error> for EditError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, errors::IO_ERROR, err.to_string())
    }
}

/// Result alias for linelog operations
pub type Result<T> = std::result::Result<T, EditError>;
