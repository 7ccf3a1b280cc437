//! Editor settings
//! Options consumed by the buffer layer, plus a registry that applies
//! `name = value` pairs to them.

pub mod definitions;
pub mod descriptor;
pub mod registry;

pub use definitions::create_settings_registry;
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;

use crate::constants::defaults;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Width of a tab in cells, and the number of spaces a soft tab inserts
    pub tab_size: usize,
    /// Insert spaces instead of a tab character
    pub tabs_are_spaces: bool,
    /// Backspace over a full soft tab at once
    pub hungry_backspace: bool,
    /// Auto-close brackets and type over closing ones
    pub match_braces: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        EditorSettings {
            tab_size: defaults::TAB_SIZE,
            tabs_are_spaces: defaults::TABS_ARE_SPACES,
            hungry_backspace: defaults::HUNGRY_BACKSPACE,
            match_braces: defaults::MATCH_BRACES,
        }
    }
}

impl EditorSettings {
    /// Apply a single `name = value` option
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        create_settings_registry().apply(name, value, self)?;
        Ok(())
    }

    /// Apply `name = value` lines; blank lines and `#` comments are skipped
    pub fn apply_lines(&mut self, source: &str) -> Result<()> {
        for line in source.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, value) = line.split_once('=').unwrap_or((line, "true"));
            self.set(name.trim(), value.trim())?;
        }
        Ok(())
    }

    /// Spaces inserted for one soft tab
    #[must_use]
    pub fn soft_tab(&self) -> String {
        " ".repeat(self.tab_size)
    }
}
