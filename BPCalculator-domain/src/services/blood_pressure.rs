use crate::entities::blood_pressure::{
    BloodPressureAssessment, BloodPressureCategory, BloodPressureReading,
};
use crate::entities::errors::ClassificationError;
use crate::services::classifier;

/// Trait for blood pressure service operations
pub trait BloodPressureServiceTrait: Send + Sync {
    /// Classify a reading and build the assessment shown to the user
    fn calculate(
        &self,
        reading: &BloodPressureReading,
    ) -> Result<BloodPressureAssessment, ClassificationError>;

    /// Get the explanation for a category
    fn explain(&self, category: BloodPressureCategory) -> &'static str {
        classifier::explain(category)
    }
}

/// Blood pressure service for domain logic
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodPressureService;

impl BloodPressureService {
    /// Create a new blood pressure service
    pub fn new() -> Self {
        Self
    }
}

impl BloodPressureServiceTrait for BloodPressureService {
    fn calculate(
        &self,
        reading: &BloodPressureReading,
    ) -> Result<BloodPressureAssessment, ClassificationError> {
        reading.assess()
    }
}

/// Create the default blood pressure service
pub fn create_default_blood_pressure_service() -> impl BloodPressureServiceTrait {
    BloodPressureService::new()
}

/// Create a mock blood pressure service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_blood_pressure_service() -> crate::testing::MockBloodPressureService {
    crate::testing::MockBloodPressureService::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_valid_reading() {
        let service = BloodPressureService::new();
        let assessment = service.calculate(&BloodPressureReading::new(130, 85)).unwrap();

        assert_eq!(assessment.category, BloodPressureCategory::PreHigh);
        assert_eq!(assessment.label, "Pre-High Blood Pressure");
        assert_eq!(assessment.reading, BloodPressureReading::new(130, 85));
    }

    #[test]
    fn test_calculate_propagates_classification_errors() {
        let service = BloodPressureService::new();

        let result = service.calculate(&BloodPressureReading::new(80, 80));
        assert!(result.unwrap_err().to_string().contains("greater than"));

        let result = service.calculate(&BloodPressureReading::new(100, 101));
        assert!(matches!(result, Err(ClassificationError::InvalidRelationship { .. })));

        let result = service.calculate(&BloodPressureReading::new(150, 101));
        assert!(result.unwrap_err().to_string().contains("Diastolic"));
    }

    #[test]
    fn test_default_service_explains_every_category() {
        let service = create_default_blood_pressure_service();
        for category in BloodPressureCategory::ALL {
            assert!(!service.explain(category).is_empty());
        }
    }
}
