//! GUI-specific error types.
//!
//! Backend failures travel as [`ApiError`] inside messages and are turned into
//! widget state by the handlers. `GuiError` covers the rest: persisted
//! settings and a backend client that could not be configured.

use heartcare_client::ApiError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// Failed to read or parse the settings file.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad { reason: String },

    /// Failed to write the settings file.
    #[error("Failed to save settings: {reason}")]
    SettingsSave { reason: String },

    /// The backend client could not be built from the configuration.
    #[error("Backend unavailable: {0}")]
    Api(#[from] ApiError),
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => {
                Some("Settings will be reset to defaults if the file is corrupted.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Api(ApiError::InvalidUrl(_) | ApiError::Config(_)) => {
                Some("Check HEARTCARE_API_URL and HEARTCARE_API_TIMEOUT.")
            }
            Self::Api(_) => None,
        }
    }
}

/// Result type for GUI operations.
pub type Result<T> = std::result::Result<T, GuiError>;
