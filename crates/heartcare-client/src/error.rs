//! Error types for backend calls.

use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::ApiClient) and its configuration.
///
/// Payloads are plain strings so the error can travel inside GUI messages,
/// which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never produced a response (refused, timed out, reset).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The backend's `error` field, or the raw body.
        message: String,
    },

    /// The body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The configured base URL is not a usable http(s) URL.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// A configuration value from the environment could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => {
                "Could not reach the prediction service. Please check that it is running."
            }
            Self::Status { status, .. } if *status >= 500 => {
                "The prediction service reported an internal error."
            }
            Self::Status { .. } => "The prediction service rejected the request.",
            Self::Decode(_) => "The prediction service sent an unexpected response.",
            Self::InvalidUrl(_) | Self::Config(_) => {
                "The prediction service address is not configured correctly."
            }
        }
    }

    /// Whether the request reached the backend.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ApiError::Transport("connection refused".to_string());
        assert!(err.user_message().contains("running"));

        let err = ApiError::Status {
            status: 500,
            message: "model not loaded".to_string(),
        };
        assert!(err.user_message().contains("internal error"));

        let err = ApiError::Status {
            status: 400,
            message: "missing field".to_string(),
        };
        assert!(err.user_message().contains("rejected"));
    }

    #[test]
    fn test_display_keeps_backend_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Missing required field: age".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "backend returned 400: Missing required field: age"
        );
    }

    #[test]
    fn test_json_errors_are_decode_errors() {
        let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_transport());
    }
}
