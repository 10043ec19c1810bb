//! Optional per-user defaults.
//!
//! # Storage layout
//!
//! ```text
//! ~/.boardroute/
//!   settings.yaml
//! ```
//!
//! ```yaml
//! design_dir: /home/me/boards
//! locale: de
//! ```
//!
//! Command-line values always win over these.
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::types::{Locale, StartupConfiguration};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub design_dir: Option<PathBuf>,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// `<home>/.boardroute/settings.yaml`. Pure, no I/O.
pub fn settings_path_at(home: &Path) -> PathBuf {
    home.join(".boardroute").join("settings.yaml")
}

/// Load settings from `<home>/.boardroute/settings.yaml`.
///
/// A missing file yields [`Settings::default`]; a malformed one
/// `SettingsError::Parse` with the file path.
pub fn load_at(home: &Path) -> Result<Settings, SettingsError> {
    let path = settings_path_at(home);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
        path: path.clone(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| SettingsError::Parse { path, source })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Settings, SettingsError> {
    load_at(&home()?)
}

impl StartupConfiguration {
    /// Fill in what the command line left unset.
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        if self.design_directory_hint.is_none() {
            self.design_directory_hint = settings.design_dir.clone();
        }
        if self.locale == Locale::Default {
            if let Some(locale) = settings.locale {
                self.locale = locale;
            }
        }
        self
    }
}

fn home() -> Result<PathBuf, SettingsError> {
    dirs::home_dir().ok_or(SettingsError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_path_is_correct() {
        let home = TempDir::new().expect("tempdir");
        assert!(settings_path_at(home.path()).ends_with(".boardroute/settings.yaml"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let home = TempDir::new().expect("tempdir");
        assert_eq!(load_at(home.path()).expect("load"), Settings::default());
    }

    #[test]
    fn command_line_hint_wins() {
        let settings = Settings {
            design_dir: Some(PathBuf::from("/from/settings")),
            locale: Some(Locale::Alternate),
        };
        let config = StartupConfiguration {
            design_directory_hint: Some(PathBuf::from("/from/args")),
            ..StartupConfiguration::default()
        }
        .with_settings(&settings);

        assert_eq!(
            config.design_directory_hint,
            Some(PathBuf::from("/from/args"))
        );
        assert_eq!(config.locale, Locale::Alternate);
    }

    #[test]
    fn empty_settings_change_nothing() {
        let config = StartupConfiguration::default().with_settings(&Settings::default());
        assert_eq!(config, StartupConfiguration::default());
    }
}
