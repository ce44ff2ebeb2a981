//! Async client for the three backend endpoints.

use heartcare_model::{FeatureImportance, PatientInput, PredictionResult, StatisticsSummary};
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

const STATISTICS_PATH: &str = "/api/statistics";
const FEATURE_IMPORTANCE_PATH: &str = "/api/feature-importance";
const PREDICT_PATH: &str = "/api/predict";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("heartcare/", env!("CARGO_PKG_VERSION"));

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the HeartCare prediction backend.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/statistics`.
    pub async fn statistics(&self) -> Result<StatisticsSummary> {
        let url = self.endpoint(STATISTICS_PATH)?;
        tracing::debug!(%url, "fetching statistics");

        let response = self.client.get(url).send().await?;
        handle_response(response).await
    }

    /// `GET /api/feature-importance`. Entry order follows the response.
    pub async fn feature_importance(&self) -> Result<FeatureImportance> {
        let url = self.endpoint(FEATURE_IMPORTANCE_PATH)?;
        tracing::debug!(%url, "fetching feature importance");

        let response = self.client.get(url).send().await?;
        handle_response(response).await
    }

    /// `POST /api/predict` with the form values as a JSON body.
    pub async fn predict(&self, input: &PatientInput) -> Result<PredictionResult> {
        let url = self.endpoint(PREDICT_PATH)?;
        tracing::debug!(%url, "requesting prediction");

        let response = self.client.post(url).json(input).send().await?;
        let result: PredictionResult = handle_response(response).await?;

        tracing::info!(
            category = %result.risk_category,
            probability = result.risk_probability,
            factors = result.risk_factors.len(),
            "prediction received"
        );
        Ok(result)
    }

    /// Appends `path` to the base URL, keeping any path prefix of the base.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}")).map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other:?}"
        ))),
    }
}

/// Checks the status and decodes the body.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// The `error` field of a JSON error body, or the trimmed text itself.
fn error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.error);
    }
    let text = body.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = ApiClient::new(&ApiConfig::with_base_url("http://host:8000/heart/")).unwrap();
        assert_eq!(
            client.endpoint(PREDICT_PATH).unwrap().as_str(),
            "http://host:8000/heart/api/predict"
        );
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(STATISTICS_PATH).unwrap().as_str(),
            "http://127.0.0.1:5000/api/statistics"
        );
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        assert!(matches!(
            ApiClient::new(&ApiConfig::with_base_url("not a url")),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new(&ApiConfig::with_base_url("ftp://host/")),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error": "Model not loaded"}"#).as_deref(),
            Some("Model not loaded")
        );
        assert_eq!(error_message("Bad Gateway\n").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_message("   "), None);
    }
}
