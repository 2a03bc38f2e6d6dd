use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument, warn};

use bp_calculator_domain::entities::blood_pressure::{BloodPressureCategory, BloodPressureReading};
use bp_calculator_domain::services::{
    create_default_blood_pressure_service, BloodPressureServiceTrait,
};

use crate::entities::blood_pressure::{
    BloodPressureCategoryResponse, BloodPressureFormDefaults, CalculateBloodPressureRequest,
    CategoryExplanation,
};
use crate::entities::common::ErrorResponse;

/// Service type for dependency injection
pub type BloodPressureService = Arc<dyn BloodPressureServiceTrait>;

/// Create a default service for the handlers to use
pub fn create_service() -> BloodPressureService {
    Arc::new(create_default_blood_pressure_service())
}

/// Get the initial form values
#[utoipa::path(
    get,
    path = "/api/v1/bloodpressure",
    responses(
        (status = 200, description = "Form defaults and accepted bounds", body = BloodPressureFormDefaults),
    ),
    tag = "blood_pressure"
)]
#[instrument]
pub async fn get_form_defaults() -> impl IntoResponse {
    let defaults = BloodPressureFormDefaults::default();
    info!(
        systolic = defaults.systolic,
        diastolic = defaults.diastolic,
        "Blood pressure calculator loaded with default values"
    );
    (StatusCode::OK, Json(defaults))
}

/// Calculate the category of a blood pressure reading
#[utoipa::path(
    post,
    path = "/api/v1/bloodpressure/category",
    request_body = CalculateBloodPressureRequest,
    responses(
        (status = 200, description = "Blood pressure category calculated", body = BloodPressureCategoryResponse),
        (status = 400, description = "Reading failed validation or body is not valid JSON", body = ErrorResponse),
        (status = 415, description = "Body is not sent as application/json", body = ErrorResponse),
        (status = 422, description = "Body does not hold two integers", body = ErrorResponse),
    ),
    tag = "blood_pressure"
)]
#[instrument(skip_all)]
pub async fn calculate_category(
    State(service): State<BloodPressureService>,
    payload: Result<Json<CalculateBloodPressureRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected blood pressure request body: {}", rejection.body_text());
        ErrorResponse::from(rejection)
    })?;

    info!(
        systolic = request.systolic,
        diastolic = request.diastolic,
        "Blood pressure calculation requested"
    );

    let reading = BloodPressureReading::from(request);

    match service.calculate(&reading) {
        Ok(assessment) => {
            info!(category = ?assessment.category, "Blood pressure calculation successful");
            Ok((StatusCode::OK, Json(BloodPressureCategoryResponse::from(assessment))))
        }
        Err(e) => {
            warn!(kind = e.kind(), "Blood pressure calculation failed: {}", e);
            Err(ErrorResponse::from(e))
        }
    }
}

/// List every category with its explanation
#[utoipa::path(
    get,
    path = "/api/v1/bloodpressure/categories",
    responses(
        (status = 200, description = "All blood pressure categories", body = [CategoryExplanation]),
    ),
    tag = "blood_pressure"
)]
#[instrument]
pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<CategoryExplanation> = BloodPressureCategory::ALL
        .into_iter()
        .map(CategoryExplanation::from)
        .collect();
    Json(categories)
}

/// Get the explanation for a single category
#[utoipa::path(
    get,
    path = "/api/v1/bloodpressure/categories/{name}",
    params(
        ("name" = String, Path, description = "Category identifier (Low, Ideal, PreHigh, High)")
    ),
    responses(
        (status = 200, description = "Category explanation", body = CategoryExplanation),
        (status = 404, description = "Unknown category", body = ErrorResponse),
    ),
    tag = "blood_pressure"
)]
#[instrument]
pub async fn get_category_explanation(
    Path(name): Path<String>,
) -> Result<Json<CategoryExplanation>, ErrorResponse> {
    match name.parse::<BloodPressureCategory>() {
        Ok(category) => Ok(Json(CategoryExplanation::from(category))),
        Err(e) => {
            info!("{}", e);
            Err(ErrorResponse::not_found(bp_calculator_domain::explain_by_name(&name)))
        }
    }
}
