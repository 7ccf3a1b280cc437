//! Setting descriptor types
//! Type definitions for declarative setting configuration

use crate::constants::errors;
use crate::error::{EditError, ErrorType};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Integer(usize),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Integer setting with optional min/max bounds
    Integer {
        /// Minimum value (inclusive)
        min: Option<usize>,
        /// Maximum value (inclusive)
        max: Option<usize>,
    },
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation (out of range, etc.)
    ValidationError(String),
    /// Unknown option name
    UnknownOption(String),
    /// Prefix matches more than one option
    Ambiguous { prefix: String, matches: Vec<&'static str> },
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
            SettingError::Ambiguous { prefix, matches } => {
                write!(f, "Ambiguous option '{prefix}': matches {}", matches.join(", "))
            }
        }
    }
}

impl std::error::Error for SettingError {}

impl From<SettingError> for EditError {
    fn from(err: SettingError) -> Self {
        let code = match &err {
            SettingError::ParseError(_) => errors::SETTING_PARSE_ERROR,
            SettingError::ValidationError(_) => errors::SETTING_VALIDATION_ERROR,
            SettingError::UnknownOption(_) | SettingError::Ambiguous { .. } => {
                errors::UNKNOWN_SETTING
            }
        };
        EditError::new(ErrorType::Settings, code, err.to_string())
    }
}

/// Setter function signature
///
/// Function pointers (not trait objects) for static dispatch.
/// Receives parsed and validated `SettingValue`, never raw strings.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor: name, aliases, type, and setter function
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T: 'static> {
    /// Canonical setting name (e.g., "tab_size")
    pub name: &'static str,
    /// Short aliases (e.g., &["ts"])
    pub aliases: &'static [&'static str],
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
}
