use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::errors::ClassificationError;
use crate::services::classifier;

/// Lowest accepted systolic value (mmHg)
pub const SYSTOLIC_MIN: i64 = 70;
/// Highest accepted systolic value (mmHg)
pub const SYSTOLIC_MAX: i64 = 190;
/// Lowest accepted diastolic value (mmHg)
pub const DIASTOLIC_MIN: i64 = 40;
/// Highest accepted diastolic value (mmHg)
pub const DIASTOLIC_MAX: i64 = 100;

/// Domain model for a blood pressure reading.
///
/// Construction never validates; bounds and the systolic/diastolic
/// relationship are checked when the reading is classified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureReading {
    /// Systolic blood pressure (the higher number)
    pub systolic: i64,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: i64,
}

impl BloodPressureReading {
    /// Create a new reading from raw values
    pub fn new(systolic: i64, diastolic: i64) -> Self {
        Self { systolic, diastolic }
    }

    /// Classify this reading
    pub fn category(&self) -> Result<BloodPressureCategory, ClassificationError> {
        classifier::classify(self.systolic, self.diastolic)
    }

    /// Classify this reading and attach the label and explanation
    pub fn assess(&self) -> Result<BloodPressureAssessment, ClassificationError> {
        let category = self.category()?;
        Ok(BloodPressureAssessment::new(*self, category))
    }
}

/// Blood pressure category based on measurements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureCategory {
    /// Low blood pressure (systolic < 90 or diastolic < 60)
    Low,

    /// Ideal blood pressure (systolic 90-119 and diastolic 60-79)
    Ideal,

    /// Pre-high blood pressure (systolic 120-139 or diastolic 80-89)
    PreHigh,

    /// High blood pressure (systolic ≥ 140 or diastolic ≥ 90)
    High,
}

impl BloodPressureCategory {
    /// Every category, lowest first
    pub const ALL: [BloodPressureCategory; 4] = [
        BloodPressureCategory::Low,
        BloodPressureCategory::Ideal,
        BloodPressureCategory::PreHigh,
        BloodPressureCategory::High,
    ];

    /// Human-readable display label
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Low => "Low Blood Pressure",
            BloodPressureCategory::Ideal => "Ideal Blood Pressure",
            BloodPressureCategory::PreHigh => "Pre-High Blood Pressure",
            BloodPressureCategory::High => "High Blood Pressure",
        }
    }

    /// Identifier used on the wire and accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            BloodPressureCategory::Low => "Low",
            BloodPressureCategory::Ideal => "Ideal",
            BloodPressureCategory::PreHigh => "PreHigh",
            BloodPressureCategory::High => "High",
        }
    }

    /// Explanatory message for this category
    pub fn explanation(&self) -> &'static str {
        classifier::explain(*self)
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown blood pressure category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for BloodPressureCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        BloodPressureCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// The field of a reading that failed a bounds check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BloodPressureField {
    Systolic,
    Diastolic,
}

impl BloodPressureField {
    /// Inclusive bounds accepted for this field
    pub fn bounds(&self) -> (i64, i64) {
        match self {
            BloodPressureField::Systolic => (SYSTOLIC_MIN, SYSTOLIC_MAX),
            BloodPressureField::Diastolic => (DIASTOLIC_MIN, DIASTOLIC_MAX),
        }
    }
}

impl fmt::Display for BloodPressureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloodPressureField::Systolic => f.write_str("Systolic"),
            BloodPressureField::Diastolic => f.write_str("Diastolic"),
        }
    }
}

/// A classified reading with its label and explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureAssessment {
    /// The reading that was classified
    pub reading: BloodPressureReading,

    /// Resulting category
    pub category: BloodPressureCategory,

    /// Display label of the category
    pub label: String,

    /// Explanation shown to the user
    pub explanation: String,
}

impl BloodPressureAssessment {
    /// Build an assessment for an already classified reading
    pub fn new(reading: BloodPressureReading, category: BloodPressureCategory) -> Self {
        Self {
            reading,
            category,
            label: category.label().to_string(),
            explanation: category.explanation().to_string(),
        }
    }
}
