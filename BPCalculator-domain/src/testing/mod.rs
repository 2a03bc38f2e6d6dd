// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::entities::blood_pressure::{
    BloodPressureAssessment, BloodPressureCategory, BloodPressureReading,
};
use crate::entities::errors::ClassificationError;
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth};
use crate::services::blood_pressure::BloodPressureServiceTrait;

/// Mock implementation of the BloodPressureServiceTrait for testing
#[derive(Debug, Default)]
pub struct MockBloodPressureService {
    category: Option<BloodPressureCategory>,
    failure: Option<ClassificationError>,
    calls: AtomicUsize,
}

impl MockBloodPressureService {
    /// Create a new mock that delegates to the real classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return a fixed category for every reading
    pub fn with_category(mut self, category: BloodPressureCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Configure the mock to fail every calculation with the given error
    pub fn with_failure(mut self, error: ClassificationError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Number of times `calculate` has been called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BloodPressureServiceTrait for MockBloodPressureService {
    fn calculate(
        &self,
        reading: &BloodPressureReading,
    ) -> Result<BloodPressureAssessment, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        match self.category {
            Some(category) => Ok(BloodPressureAssessment::new(*reading, category)),
            None => reading.assess(),
        }
    }
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug, Clone)]
pub struct MockHealthService {
    status: ComponentStatus,
}

impl MockHealthService {
    /// Create a mock reporting the given classifier status
    pub fn new(status: ComponentStatus) -> Self {
        Self { status }
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let details = match self.status {
            ComponentStatus::Healthy => None,
            ComponentStatus::Degraded => Some("Classifier is responding slowly".to_string()),
            ComponentStatus::Unhealthy => Some("Classifier self-check failed".to_string()),
        };

        let components = vec![(
            "classifier".to_string(),
            HealthComponent {
                status: self.status.clone(),
                details,
            },
        )]
        .into_iter()
        .collect();

        SystemHealth::from_components(components)
    }
}

/// Create a mock health service that reports healthy
pub fn create_mock_health_service() -> MockHealthService {
    MockHealthService::new(ComponentStatus::Healthy)
}
