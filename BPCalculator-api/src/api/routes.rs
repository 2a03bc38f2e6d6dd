use std::sync::Arc;

use axum::{routing::get, routing::post, Extension, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{
    blood_pressure::{self, BloodPressureService},
    health::{self, HealthService},
};
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router with the default services
pub fn create_app(config: &ServerConfig) -> Router {
    create_app_with_services(config, blood_pressure::create_service(), health::create_health_service())
}

/// Create the application router around the given services
pub fn create_app_with_services(
    config: &ServerConfig,
    blood_pressure_service: BloodPressureService,
    health_service: HealthService,
) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        // Define specific routes before parametrized routes to avoid conflicts
        .route("/bloodpressure", get(blood_pressure::get_form_defaults))
        .route("/bloodpressure/category", post(blood_pressure::calculate_category))
        .route("/bloodpressure/categories", get(blood_pressure::list_categories))
        .route("/bloodpressure/categories/:name", get(blood_pressure::get_category_explanation))
        .with_state(blood_pressure_service);

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(Arc::new(config.clone())));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .merge(configure_swagger_routes())
        .layer(TraceLayer::new_for_http());

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Health check service initialized");

    app
}
