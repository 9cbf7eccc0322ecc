// SPDX-License-Identifier: MPL-2.0
//! Persistence for the explicit language override.
//!
//! The override is the only thing this crate stores: a `settings.toml` with a
//! single optional `language` key, kept under the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use locale_lens::settings;
//!
//! let mut stored = settings::load().unwrap_or_default();
//! stored.language = Some("fr".to_string());
//! settings::save(&stored).expect("Failed to save settings");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";
const APP_NAME: &str = "LocaleLens";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub language: Option<String>,
}

/// Location of the settings file, `None` when the platform offers no config
/// directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(SETTINGS_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = default_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = default_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let settings = Settings {
            language: Some("fr".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&settings, &settings_path).expect("failed to save settings");
        let loaded = load_from_path(&settings_path).expect("failed to load settings");

        assert_eq!(loaded.language, settings.language);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&settings_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let settings_path = nested_dir.join("settings.toml");
        let settings = Settings {
            language: Some("en-US".to_string()),
        };

        save_to_path(&settings, &settings_path).expect("save should create directories");
        assert!(settings_path.exists());
    }

    #[test]
    fn cleared_override_round_trips_as_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings_path = temp_dir.path().join("settings.toml");

        save_to_path(&Settings::default(), &settings_path).expect("failed to save settings");
        let loaded = load_from_path(&settings_path).expect("failed to load settings");
        assert!(loaded.language.is_none());
    }
}
