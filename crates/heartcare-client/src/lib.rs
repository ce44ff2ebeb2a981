//! HTTP client for the HeartCare prediction backend.
//!
//! The backend exposes three endpoints:
//!
//! - `GET /api/statistics` - aggregate prediction counters
//! - `GET /api/feature-importance` - ordered feature weights
//! - `POST /api/predict` - a risk assessment for one patient
//!
//! Every call is a one-shot `async fn`, so front ends can hand them straight
//! to their executor (`Task::perform` in iced, `#[tokio::main]` in the CLI).
//! There is no retry and no caching.
//!
//! # Example
//!
//! ```no_run
//! use heartcare_client::{ApiClient, ApiConfig};
//!
//! async fn show_totals() -> heartcare_client::Result<()> {
//!     let config = ApiConfig::default().apply_env()?;
//!     let client = ApiClient::new(&config)?;
//!     let stats = client.statistics().await?;
//!     println!("{} predictions", stats.total_predictions);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::{
    ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_TIMEOUT, ENV_API_URL,
};
pub use error::{ApiError, Result};
