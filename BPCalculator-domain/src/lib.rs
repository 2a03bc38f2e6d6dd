// BPCalculator Domain
// This crate contains the blood pressure classification logic

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;

// Re-export common types for easier imports
pub use crate::entities::blood_pressure::{
    BloodPressureAssessment, BloodPressureCategory, BloodPressureField, BloodPressureReading,
};
pub use crate::entities::errors::ClassificationError;
pub use crate::services::classifier::{classify, explain, explain_by_name};
