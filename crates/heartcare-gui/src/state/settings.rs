//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use heartcare_client::ApiConfig;
use serde::{Deserialize, Serialize};

use crate::error::{GuiError, Result};
use crate::theme::ThemeMode;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend connection.
    pub api: ApiConfig,

    /// Display settings.
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub theme_mode: ThemeMode,
}

impl DisplaySettings {
    /// Moves to the next theme mode and returns it.
    pub fn cycle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.next();
        self.theme_mode
    }
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(GuiError::SettingsLoad {
                    reason: e.to_string(),
                });
            }
        };
        toml::from_str(&content).map_err(|e| GuiError::SettingsLoad {
            reason: e.to_string(),
        })
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to serialize settings: {e}"),
        })?;

        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to write settings: {e}"),
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "HeartCare", "HeartCare")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.api.base_url = "http://heart.local:8080".to_string();
        settings.display.theme_mode = ThemeMode::Dark;
        settings.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("theme_mode = \"dark\""));
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display]\ntheme_mode = \"system\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.display.theme_mode, ThemeMode::System);
        assert_eq!(settings.api, ApiConfig::default());
    }

    #[test]
    fn test_theme_cycles_light_dark_system() {
        let mut display = DisplaySettings::default();
        assert_eq!(display.cycle_theme(), ThemeMode::Dark);
        assert_eq!(display.cycle_theme(), ThemeMode::System);
        assert_eq!(display.cycle_theme(), ThemeMode::Light);
        assert_eq!(display.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "display = [").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(GuiError::SettingsLoad { .. })
        ));
    }
}
