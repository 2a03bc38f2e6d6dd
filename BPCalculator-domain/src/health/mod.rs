//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use crate::entities::blood_pressure::BloodPressureCategory;
use crate::entities::errors::ClassificationError;
use crate::services::classifier::classify;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a system health report whose status is the worst component status
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

type Expectation = Result<BloodPressureCategory, &'static str>;

/// Reference readings run through the classifier by the self-check
const SELF_CHECK_CASES: [(i64, i64, Expectation); 6] = [
    (85, 55, Ok(BloodPressureCategory::Low)),
    (115, 75, Ok(BloodPressureCategory::Ideal)),
    (130, 85, Ok(BloodPressureCategory::PreHigh)),
    (160, 100, Ok(BloodPressureCategory::High)),
    (90, 100, Err("invalid_relationship")),
    (191, 80, Err("out_of_range")),
];

/// Run the classifier self-check.
///
/// Returns the list of mismatches; empty when every reference reading
/// classifies as expected.
pub fn run_classifier_self_check() -> Vec<String> {
    SELF_CHECK_CASES
        .iter()
        .filter_map(|&(systolic, diastolic, expected)| {
            let actual = classify(systolic, diastolic).map_err(|e: ClassificationError| e.kind());
            if actual == expected {
                None
            } else {
                Some(format!(
                    "({}, {}) expected {:?}, got {:?}",
                    systolic, diastolic, expected, actual
                ))
            }
        })
        .collect()
}

/// Check the classifier component
pub fn check_classifier() -> HealthComponent {
    let failures = run_classifier_self_check();
    if failures.is_empty() {
        HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        }
    } else {
        warn!("Classifier self-check failed: {}", failures.join("; "));
        HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(format!("Self-check failed: {}", failures.join("; "))),
        }
    }
}

/// Health service backed by the classifier self-check
#[derive(Debug, Default)]
pub struct ClassifierHealthService;

impl ClassifierHealthService {
    /// Create a new health service
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HealthServiceTrait for ClassifierHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let components = vec![("classifier".to_string(), check_classifier())]
            .into_iter()
            .collect();
        SystemHealth::from_components(components)
    }
}
