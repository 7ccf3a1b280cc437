//! Settings registry
//! Resolves option names and applies parsed values through descriptors

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};

/// Holds static setting descriptors for one settings struct
#[derive(Debug)]
pub struct SettingsRegistry<T: 'static> {
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    /// Canonical names, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.settings.iter().map(|d| d.name)
    }

    /// Resolve `name` by exact name, alias, or unique prefix of a name
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor<T>, SettingError> {
        let settings: &'static [SettingDescriptor<T>] = self.settings;
        let name = name.trim().to_lowercase();

        if let Some(desc) = settings
            .iter()
            .find(|d| d.name == name || d.aliases.iter().any(|a| *a == name))
        {
            return Ok(desc);
        }

        let matches: Vec<&'static SettingDescriptor<T>> = settings
            .iter()
            .filter(|d| !name.is_empty() && d.name.starts_with(&name))
            .collect();

        match matches.as_slice() {
            [single] => Ok(*single),
            [] => Err(SettingError::UnknownOption(name)),
            many => Err(SettingError::Ambiguous {
                prefix: name,
                matches: many.iter().map(|d| d.name).collect(),
            }),
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(SettingError::ParseError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            SettingType::Integer { min, max } => {
                let val = value.trim().parse::<usize>().map_err(|_| {
                    SettingError::ParseError(format!("Invalid integer value: {value}"))
                })?;

                if let Some(min_val) = min {
                    if val < *min_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is below minimum {min_val}"
                        )));
                    }
                }
                if let Some(max_val) = max {
                    if val > *max_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is above maximum {max_val}"
                        )));
                    }
                }
                Ok(SettingValue::Integer(val))
            }
        }
    }

    /// Resolve `name`, parse `value` and apply it to `target`
    pub fn apply(&self, name: &str, value: &str, target: &mut T) -> Result<(), SettingError> {
        let desc = self.resolve(name)?;
        let typed = Self::parse_value(&desc.ty, value)?;
        (desc.set)(target, typed)?;
        tracing::debug!(setting = desc.name, value, "setting applied");
        Ok(())
    }
}
