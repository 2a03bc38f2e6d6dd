use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use bp_calculator_domain::testing::MockBloodPressureService;
use bp_calculator_domain::{BloodPressureCategory, BloodPressureField, ClassificationError};

use crate::api::handlers::blood_pressure::{
    calculate_category, create_service, get_category_explanation, get_form_defaults,
    list_categories, BloodPressureService,
};
use crate::entities::blood_pressure::CalculateBloodPressureRequest;

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn calculate(service: BloodPressureService, systolic: i64, diastolic: i64) -> Response {
    calculate_category(
        State(service),
        Ok(Json(CalculateBloodPressureRequest { systolic, diastolic })),
    )
    .await
    .into_response()
}

#[tokio::test]
async fn test_form_defaults() {
    let response = get_form_defaults().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["systolic"], 100);
    assert_eq!(body["diastolic"], 60);
    assert_eq!(body["systolic_bounds"]["min"], 70);
    assert_eq!(body["diastolic_bounds"]["max"], 100);
}

#[tokio::test]
async fn test_calculate_category_with_default_service() {
    let response = calculate(create_service(), 139, 89).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["category"], "PreHigh");
    assert_eq!(body["label"], "Pre-High Blood Pressure");
    assert!(body["explanation"].as_str().unwrap().contains("lifestyle"));
}

#[tokio::test]
async fn test_calculate_category_uses_injected_service() {
    let mock = Arc::new(MockBloodPressureService::new().with_category(BloodPressureCategory::High));
    let response = calculate(mock.clone(), 115, 75).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.call_count(), 1);

    let body = body_json(response).await;
    assert_eq!(body["category"], "High");
}

#[tokio::test]
async fn test_calculate_category_invalid_relationship() {
    let response = calculate(create_service(), 90, 100).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid_relationship");
    assert_eq!(body["message"], "Systolic pressure must be greater than diastolic pressure");
}

#[tokio::test]
async fn test_calculate_category_out_of_range() {
    let mock = Arc::new(
        MockBloodPressureService::new()
            .with_failure(ClassificationError::out_of_range(BloodPressureField::Diastolic, 101)),
    );
    let response = calculate(mock, 150, 101).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "out_of_range");
    assert_eq!(body["details"]["field"], "diastolic");
    assert_eq!(body["details"]["min"], 40);
}

#[tokio::test]
async fn test_calculate_category_beyond_32_bits() {
    let response = calculate(create_service(), 3_000_000_000, 80).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "out_of_range");
    assert_eq!(body["details"]["field"], "systolic");
    assert_eq!(body["details"]["value"], 3_000_000_000i64);
}

#[tokio::test]
async fn test_list_categories() {
    let response = list_categories().await.into_response();
    let body = body_json(response).await;
    let categories = body.as_array().unwrap();

    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["category"], "Low");
    assert_eq!(categories[3]["label"], "High Blood Pressure");
}

#[tokio::test]
async fn test_category_explanation_lookup() {
    let response = get_category_explanation(Path("ideal".to_string()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["explanation"].as_str().unwrap().contains("healthy"));

    let response = get_category_explanation(Path("Crisis".to_string()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().starts_with("Unable to determine category"));
}
