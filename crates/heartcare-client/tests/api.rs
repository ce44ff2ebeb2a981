//! End-to-end tests against an in-process backend.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use heartcare_client::{ApiClient, ApiConfig, ApiError};
use heartcare_model::{PatientField, PatientInput, RiskCategory};
use serde_json::{Value, json};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String) -> ApiClient {
    ApiClient::new(&ApiConfig::with_base_url(base_url)).unwrap()
}

fn patient() -> PatientInput {
    [
        (PatientField::Age, "63"),
        (PatientField::Sex, "1"),
        (PatientField::Cp, "3"),
        (PatientField::Trtbps, "145"),
        (PatientField::Chol, "233"),
        (PatientField::Fbs, "1"),
        (PatientField::Restecg, "0"),
        (PatientField::Thalachh, "150"),
        (PatientField::Exng, "0"),
        (PatientField::Oldpeak, "2.3"),
        (PatientField::Slp, "0"),
        (PatientField::Caa, "0"),
        (PatientField::Thall, "1"),
    ]
    .into_iter()
    .fold(PatientInput::default(), |input, (field, value)| {
        input.with(field, value)
    })
}

#[tokio::test]
async fn fetches_statistics() {
    let router = Router::new().route(
        "/api/statistics",
        get(|| async {
            Json(json!({
                "total_predictions": 1247,
                "high_risk_count": 312,
                "medium_risk_count": 498,
                "low_risk_count": 437
            }))
        }),
    );
    let stats = client(serve(router).await).statistics().await.unwrap();
    assert_eq!(stats.total_predictions, 1247);
    assert_eq!(stats.low_risk_count, 437);
}

#[tokio::test]
async fn feature_importance_keeps_response_order() {
    let router = Router::new().route(
        "/api/feature-importance",
        get(|| async {
            (
                [("content-type", "application/json")],
                r#"{"oldpeak": 0.2, "cp": 0.5, "age": 0.3}"#,
            )
        }),
    );
    let importance = client(serve(router).await)
        .feature_importance()
        .await
        .unwrap();
    let keys: Vec<_> = importance.entries().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["oldpeak", "cp", "age"]);
}

#[tokio::test]
async fn predict_posts_form_values_verbatim() {
    let router = Router::new().route(
        "/api/predict",
        post(|Json(body): Json<Value>| async move {
            // Every value must arrive as the string the user typed.
            assert_eq!(body["age"], "63");
            assert_eq!(body["oldpeak"], "2.3");
            assert_eq!(body.as_object().map(|o| o.len()), Some(13));
            Json(json!({
                "prediction": 1,
                "risk_probability": 81.24,
                "risk_category": "High Risk",
                "explanation": "URGENT",
                "risk_factors": [
                    {"factor": "Age", "value": 63, "severity": "High",
                     "description": "Age 63 is a significant risk factor"}
                ]
            }))
        }),
    );
    let result = client(serve(router).await).predict(&patient()).await.unwrap();
    assert_eq!(result.risk_category, RiskCategory::High);
    assert_eq!(result.probability_text(), "81.2%");
    assert_eq!(result.risk_factors[0].severity.css_class(), "high");
}

#[tokio::test]
async fn non_success_status_carries_backend_message() {
    let router = Router::new().route(
        "/api/predict",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing required field: thall"})),
            )
        }),
    );
    let err = client(serve(router).await)
        .predict(&patient())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "Missing required field: thall".to_string(),
        }
    );
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_text() {
    let router = Router::new().route(
        "/api/statistics",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
    );
    let err = client(serve(router).await).statistics().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status { status: 500, ref message } if message == "model crashed"
    ));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route(
        "/api/statistics",
        get(|| async { Json(json!({"total_predictions": "lots"})) }),
    );
    let err = client(serve(router).await).statistics().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}"))
        .statistics()
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn slow_backend_times_out() {
    let router = Router::new().route(
        "/api/statistics",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let config = ApiConfig {
        timeout_secs: 1,
        ..ApiConfig::with_base_url(serve(router).await)
    };
    let err = ApiClient::new(&config)
        .unwrap()
        .statistics()
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
