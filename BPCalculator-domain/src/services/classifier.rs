use crate::entities::blood_pressure::{
    BloodPressureCategory, BloodPressureField, DIASTOLIC_MAX, DIASTOLIC_MIN, SYSTOLIC_MAX,
    SYSTOLIC_MIN,
};
use crate::entities::errors::ClassificationError;

/// Returned by `explain_by_name` for names that are not a category
pub const UNKNOWN_CATEGORY_EXPLANATION: &str =
    "Unable to determine category. Please ensure valid input values.";

/// Categorize a blood pressure reading.
///
/// The relationship check runs before the range checks, and the rule chain
/// is tested top to bottom: High, PreHigh, Ideal, then Low for anything left.
pub fn classify(systolic: i64, diastolic: i64) -> Result<BloodPressureCategory, ClassificationError> {
    if systolic <= diastolic {
        return Err(ClassificationError::InvalidRelationship { systolic, diastolic });
    }

    if !(SYSTOLIC_MIN..=SYSTOLIC_MAX).contains(&systolic) {
        return Err(ClassificationError::out_of_range(BloodPressureField::Systolic, systolic));
    }

    if !(DIASTOLIC_MIN..=DIASTOLIC_MAX).contains(&diastolic) {
        return Err(ClassificationError::out_of_range(BloodPressureField::Diastolic, diastolic));
    }

    let category = if systolic >= 140 || diastolic >= 90 {
        BloodPressureCategory::High
    } else if (120..=139).contains(&systolic) || (80..=89).contains(&diastolic) {
        BloodPressureCategory::PreHigh
    } else if (90..=119).contains(&systolic) && (60..=79).contains(&diastolic) {
        BloodPressureCategory::Ideal
    } else {
        BloodPressureCategory::Low
    };

    Ok(category)
}

/// User-facing explanation for a category
pub fn explain(category: BloodPressureCategory) -> &'static str {
    match category {
        BloodPressureCategory::Low => {
            "Your blood pressure is low. If you experience dizziness, weakness, or fatigue, \
             please consult a healthcare provider."
        }
        BloodPressureCategory::Ideal => {
            "Your blood pressure is ideal and healthy. Keep maintaining your current lifestyle \
             with regular exercise and a balanced diet."
        }
        BloodPressureCategory::PreHigh => {
            "Your blood pressure is pre-high (prehypertension). Consider lifestyle changes such as \
             reducing salt intake, exercising regularly, and managing stress."
        }
        BloodPressureCategory::High => {
            "Your blood pressure is high. Please consult a healthcare provider for proper evaluation \
             and treatment. Monitor your BP regularly."
        }
    }
}

/// Explanation for a category given by name, with a fallback for unknown names
pub fn explain_by_name(name: &str) -> &'static str {
    name.parse::<BloodPressureCategory>()
        .map(explain)
        .unwrap_or(UNKNOWN_CATEGORY_EXPLANATION)
}
