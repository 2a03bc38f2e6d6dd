use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Blood pressure endpoints
        crate::api::handlers::blood_pressure::get_form_defaults,
        crate::api::handlers::blood_pressure::calculate_category,
        crate::api::handlers::blood_pressure::list_categories,
        crate::api::handlers::blood_pressure::get_category_explanation
    ),
    components(
        schemas(
            // Entities
            crate::entities::blood_pressure::CalculateBloodPressureRequest,
            crate::entities::blood_pressure::BloodPressureCategoryResponse,
            crate::entities::blood_pressure::BloodPressureFormDefaults,
            crate::entities::blood_pressure::FieldBounds,
            crate::entities::blood_pressure::CategoryExplanation,
            crate::entities::common::ErrorResponse,

            // Domain types
            bp_calculator_domain::entities::blood_pressure::BloodPressureCategory,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "blood_pressure", description = "Blood pressure category calculation endpoints")
    ),
    info(
        title = "BP Calculator API",
        version = "0.1.0",
        description = "Classifies blood pressure readings and explains the result",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
