// Domain entities and value objects
pub mod blood_pressure;
pub mod errors;

// Re-export common types for easier imports
pub use blood_pressure::{
    BloodPressureAssessment, BloodPressureCategory, BloodPressureField, BloodPressureReading,
};
pub use errors::ClassificationError;
