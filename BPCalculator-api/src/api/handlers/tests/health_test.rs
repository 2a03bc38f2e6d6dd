use std::sync::Arc;

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse, Extension};
use serde_json::Value;

use bp_calculator_domain::health::ComponentStatus;
use bp_calculator_domain::testing::MockHealthService;

use crate::api::handlers::health::{
    create_health_service, health_check, initialize_server_start_time, HealthService,
};
use crate::config::ServerConfig;

async fn check(service: HealthService) -> (StatusCode, Value) {
    let config = Arc::new(ServerConfig {
        environment: "test".to_string(),
        ..ServerConfig::default()
    });
    let response = health_check(Extension(service), Extension(config))
        .await
        .into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_check_response() {
    initialize_server_start_time();

    let (status, body) = check(create_health_service()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["components"]["classifier"]["status"], "ok");
    assert!(body["version"].is_string());
    assert!(body["uptime"].is_number());
}

#[tokio::test]
async fn test_health_check_degraded() {
    let service: HealthService = Arc::new(MockHealthService::new(ComponentStatus::Degraded));
    let (status, body) = check(service).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert!(body["components"]["classifier"]["message"].is_string());
}

#[tokio::test]
async fn test_health_check_unhealthy() {
    let service: HealthService = Arc::new(MockHealthService::new(ComponentStatus::Unhealthy));
    let (status, body) = check(service).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["components"]["classifier"]["status"], "error");
}
