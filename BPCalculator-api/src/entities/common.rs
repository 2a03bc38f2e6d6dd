use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use bp_calculator_domain::ClassificationError;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(message: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    fn status(&self) -> StatusCode {
        match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "invalid_relationship" | "out_of_range" | "malformed_body" => StatusCode::BAD_REQUEST,
            "unsupported_media_type" => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "invalid_body" => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ClassificationError> for ErrorResponse {
    fn from(err: ClassificationError) -> Self {
        let details = match &err {
            ClassificationError::InvalidRelationship { systolic, diastolic } => json!({
                "systolic": systolic,
                "diastolic": diastolic,
            }),
            ClassificationError::OutOfRange { field, value, min, max } => json!({
                "field": field,
                "value": value,
                "min": min,
                "max": max,
            }),
        };

        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
            details: Some(details),
        }
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match &rejection {
            JsonRejection::JsonSyntaxError(_) => "malformed_body",
            JsonRejection::MissingJsonContentType(_) => "unsupported_media_type",
            _ => "invalid_body",
        };

        Self {
            error: error.to_string(),
            message: rejection.body_text(),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_calculator_domain::BloodPressureField;

    #[test]
    fn test_out_of_range_conversion() {
        let err = ClassificationError::out_of_range(BloodPressureField::Diastolic, 101);
        let response = ErrorResponse::from(err);

        assert_eq!(response.error, "out_of_range");
        assert_eq!(response.message, "Diastolic pressure must be between 40 and 100");
        let details = response.details.as_ref().unwrap();
        assert_eq!(details["field"], "diastolic");
        assert_eq!(details["max"], 100);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_relationship_conversion() {
        let err = ClassificationError::InvalidRelationship { systolic: 90, diastolic: 100 };
        let response = ErrorResponse::from(err);

        assert_eq!(response.error, "invalid_relationship");
        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorResponse::not_found("x").status(), StatusCode::NOT_FOUND);

        let codes = [
            ("malformed_body", StatusCode::BAD_REQUEST),
            ("unsupported_media_type", StatusCode::UNSUPPORTED_MEDIA_TYPE),
            ("invalid_body", StatusCode::UNPROCESSABLE_ENTITY),
        ];
        for (error, status) in codes {
            let response = ErrorResponse { error: error.to_string(), message: String::new(), details: None };
            assert_eq!(response.status(), status);
        }
    }
}
