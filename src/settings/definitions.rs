//! Settings definitions
//! Declarative registry of editor options

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use super::EditorSettings;
use crate::constants::defaults::MAX_TAB_SIZE;

fn set_tab_size(settings: &mut EditorSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(n) => {
            settings.tab_size = n;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected integer".to_string())),
    }
}

fn set_tabs_are_spaces(
    settings: &mut EditorSettings,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.tabs_are_spaces = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_hungry_backspace(
    settings: &mut EditorSettings,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.hungry_backspace = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_match_braces(settings: &mut EditorSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.match_braces = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

const EDITOR_SETTINGS: &[SettingDescriptor<EditorSettings>] = &[
    SettingDescriptor {
        name: "tab_size",
        aliases: &["ts", "tabstop"],
        ty: SettingType::Integer {
            min: Some(1),
            max: Some(MAX_TAB_SIZE),
        },
        set: set_tab_size,
    },
    SettingDescriptor {
        name: "tabs_are_spaces",
        aliases: &["et", "expandtab"],
        ty: SettingType::Boolean,
        set: set_tabs_are_spaces,
    },
    SettingDescriptor {
        name: "hungry_backspace",
        aliases: &["hb"],
        ty: SettingType::Boolean,
        set: set_hungry_backspace,
    },
    SettingDescriptor {
        name: "match_braces",
        aliases: &["mb"],
        ty: SettingType::Boolean,
        set: set_match_braces,
    },
];

#[must_use]
pub fn create_settings_registry() -> SettingsRegistry<EditorSettings> {
    SettingsRegistry::new(EDITOR_SETTINGS)
}
