use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bp_calculator_domain::entities::blood_pressure::{
    BloodPressureAssessment, BloodPressureCategory, BloodPressureReading, DIASTOLIC_MAX,
    DIASTOLIC_MIN, SYSTOLIC_MAX, SYSTOLIC_MIN,
};

/// Systolic value pre-filled in the form
pub const DEFAULT_SYSTOLIC: i64 = 100;
/// Diastolic value pre-filled in the form
pub const DEFAULT_DIASTOLIC: i64 = 60;

/// Request payload for calculating a blood pressure category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateBloodPressureRequest {
    /// Systolic blood pressure in mmHg (the higher number)
    #[schema(example = 120)]
    pub systolic: i64,

    /// Diastolic blood pressure in mmHg (the lower number)
    #[schema(example = 80)]
    pub diastolic: i64,
}

impl From<CalculateBloodPressureRequest> for BloodPressureReading {
    fn from(request: CalculateBloodPressureRequest) -> Self {
        BloodPressureReading::new(request.systolic, request.diastolic)
    }
}

/// Public representation of a calculated blood pressure category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BloodPressureCategoryResponse {
    /// Systolic value that was classified
    pub systolic: i64,

    /// Diastolic value that was classified
    pub diastolic: i64,

    /// Category identifier (Low, Ideal, PreHigh, High)
    pub category: BloodPressureCategory,

    /// Display label of the category
    pub label: String,

    /// Explanation of what the category means
    pub explanation: String,
}

impl From<BloodPressureAssessment> for BloodPressureCategoryResponse {
    fn from(assessment: BloodPressureAssessment) -> Self {
        Self {
            systolic: assessment.reading.systolic,
            diastolic: assessment.reading.diastolic,
            category: assessment.category,
            label: assessment.label,
            explanation: assessment.explanation,
        }
    }
}

/// Inclusive bounds accepted for a field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldBounds {
    /// Lowest accepted value
    pub min: i64,
    /// Highest accepted value
    pub max: i64,
}

/// Initial form values and the accepted bounds
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BloodPressureFormDefaults {
    /// Pre-filled systolic value
    pub systolic: i64,

    /// Pre-filled diastolic value
    pub diastolic: i64,

    /// Accepted systolic range
    pub systolic_bounds: FieldBounds,

    /// Accepted diastolic range
    pub diastolic_bounds: FieldBounds,
}

impl Default for BloodPressureFormDefaults {
    fn default() -> Self {
        Self {
            systolic: DEFAULT_SYSTOLIC,
            diastolic: DEFAULT_DIASTOLIC,
            systolic_bounds: FieldBounds { min: SYSTOLIC_MIN, max: SYSTOLIC_MAX },
            diastolic_bounds: FieldBounds { min: DIASTOLIC_MIN, max: DIASTOLIC_MAX },
        }
    }
}

/// A category with its label and explanation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryExplanation {
    /// Category identifier
    pub category: BloodPressureCategory,

    /// Display label
    pub label: String,

    /// Explanation text
    pub explanation: String,
}

impl From<BloodPressureCategory> for CategoryExplanation {
    fn from(category: BloodPressureCategory) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            explanation: category.explanation().to_string(),
        }
    }
}
