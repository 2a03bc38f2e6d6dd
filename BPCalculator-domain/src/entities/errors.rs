use thiserror::Error;

use crate::entities::blood_pressure::BloodPressureField;

/// Errors raised while classifying a reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Systolic was not strictly greater than diastolic
    #[error("Systolic pressure must be greater than diastolic pressure")]
    InvalidRelationship { systolic: i64, diastolic: i64 },

    /// A single field fell outside its inclusive bounds
    #[error("{field} pressure must be between {min} and {max}")]
    OutOfRange {
        field: BloodPressureField,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ClassificationError {
    /// Build an out of range error for a field using its configured bounds
    pub fn out_of_range(field: BloodPressureField, value: i64) -> Self {
        let (min, max) = field.bounds();
        ClassificationError::OutOfRange { field, value, min, max }
    }

    /// Machine-readable error code
    pub fn kind(&self) -> &'static str {
        match self {
            ClassificationError::InvalidRelationship { .. } => "invalid_relationship",
            ClassificationError::OutOfRange { .. } => "out_of_range",
        }
    }

    /// The offending field, if the error concerns a single field
    pub fn field(&self) -> Option<BloodPressureField> {
        match self {
            ClassificationError::InvalidRelationship { .. } => None,
            ClassificationError::OutOfRange { field, .. } => Some(*field),
        }
    }
}
