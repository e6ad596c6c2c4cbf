use std::path::Path;
use std::sync::{Arc, LazyLock, RwLock};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{NetlistError, Result};
use crate::models::SortField;
use crate::utils::file_get;

// Default value functions for serde
fn default_true() -> bool {
    true
}

/// `[list]` section as written in a settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSection {
    pub sort_field: String,
    pub descending: bool,
    pub hide_hidden: bool,
    #[serde(default = "default_true")]
    pub assign_positions: bool,
}

impl Default for ListSection {
    fn default() -> Self {
        ListSection {
            sort_field: String::new(),
            descending: false,
            hide_hidden: false,
            assign_positions: default_true(),
        }
    }
}

/// Whole settings file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SettingsFile {
    pub list: ListSection,
}

/// How a network list is prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    /// Field to sort by; `None` keeps scan order
    pub sort_field: Option<SortField>,
    pub descending: bool,
    /// Drop networks that do not broadcast an SSID
    pub hide_hidden: bool,
    /// Write each record's index into its list position after sorting
    pub assign_positions: bool,
}

impl Default for ListSettings {
    fn default() -> Self {
        ListSettings {
            sort_field: None,
            descending: false,
            hide_hidden: false,
            assign_positions: default_true(),
        }
    }
}

impl TryFrom<ListSection> for ListSettings {
    type Error = NetlistError;

    fn try_from(section: ListSection) -> Result<Self> {
        let sort_field = match section.sort_field.trim() {
            "" => None,
            name => Some(name.parse::<SortField>()?),
        };
        Ok(ListSettings {
            sort_field,
            descending: section.descending,
            hide_hidden: section.hide_hidden,
            assign_positions: section.assign_positions,
        })
    }
}

/// Settings structure to hold global configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub pref_path: String,
    pub list: ListSettings,
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current() -> Arc<Settings> {
        match GLOBAL.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Parse settings from YAML or TOML text.
    ///
    /// YAML is recognized by a line opening with the `list:` key; anything
    /// else is read as TOML.
    /// Unknown sort fields are rejected.
    pub fn load_from_content(content: &str) -> Result<Self> {
        let file: SettingsFile = if is_yaml_settings(content) {
            serde_yaml::from_str(content)?
        } else {
            toml::from_str(content)?
        };

        Ok(Settings {
            pref_path: String::new(),
            list: ListSettings::try_from(file.list)?,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = file_get(path)?;
        let mut settings = Settings::load_from_content(&content)?;
        settings.pref_path = path.display().to_string();
        info!("Loaded settings from {}", settings.pref_path);
        Ok(settings)
    }
}

fn is_yaml_settings(content: &str) -> bool {
    content
        .lines()
        .any(|line| line.trim_start().starts_with("list:"))
}

// Global settings instance
pub static GLOBAL: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::new())));

fn replace_global(settings: Settings) {
    let settings = Arc::new(settings);
    match GLOBAL.write() {
        Ok(mut guard) => *guard = settings,
        Err(poisoned) => *poisoned.into_inner() = settings,
    }
}

/// Replace the global settings with ones parsed from `content`
pub fn update_settings_from_content(content: &str) -> Result<()> {
    replace_global(Settings::load_from_content(content)?);
    Ok(())
}

/// Replace the global settings with ones read from `path`
pub fn update_settings_from_file<P: AsRef<Path>>(path: P) -> Result<()> {
    replace_global(Settings::load_from_file(path)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_gives_defaults() {
        let settings = Settings::load_from_content("").unwrap();
        assert_eq!(settings.list, ListSettings::default());
        assert!(settings.list.assign_positions);
    }

    #[test]
    fn test_yaml_settings() {
        let content = r#"
list:
  sort_field: rssi
  descending: true
  hide_hidden: true
"#;
        let settings = Settings::load_from_content(content).unwrap();
        assert_eq!(settings.list.sort_field, Some(SortField::Rssi));
        assert!(settings.list.descending);
        assert!(settings.list.hide_hidden);
        assert!(settings.list.assign_positions);
    }

    #[test]
    fn test_toml_settings() {
        let content = r#"
[list]
sort_field = "channel"
assign_positions = false
"#;
        let settings = Settings::load_from_content(content).unwrap();
        assert_eq!(settings.list.sort_field, Some(SortField::Channel));
        assert!(!settings.list.descending);
        assert!(!settings.list.assign_positions);
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let err = Settings::load_from_content("[list]\nsort_field = \"protection\"\n").unwrap_err();
        assert!(matches!(err, NetlistError::InvalidSortField(ref f) if f == "protection"));
    }

    #[test]
    fn test_toml_comment_mentioning_list_key() {
        let content = "# sorted list: strongest first\n[list]\nsort_field = \"rssi\" # list: by signal\n";
        let settings = Settings::load_from_content(content).unwrap();
        assert_eq!(settings.list.sort_field, Some(SortField::Rssi));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Settings::load_from_content("[list\nsort_field = ").unwrap_err();
        assert!(matches!(err, NetlistError::Toml(_)));
    }
}
