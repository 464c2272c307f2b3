use crate::entities::{BloodPressureCategory, Classification};

/// Categorize blood pressure based on measurements
///
/// Tiers are checked from most to least severe and either pressure alone is
/// enough to trigger a tier. The function is total: every pair maps to
/// exactly one category.
pub fn categorize_blood_pressure(systolic: i32, diastolic: i32) -> BloodPressureCategory {
    if systolic >= 180 || diastolic >= 120 {
        BloodPressureCategory::HypertensiveCrisis
    } else if systolic >= 140 || diastolic >= 90 {
        BloodPressureCategory::HighBloodPressure
    } else if systolic >= 120 || diastolic >= 80 {
        BloodPressureCategory::Elevated
    } else {
        BloodPressureCategory::Normal
    }
}

/// Classify a pressure pair into its label and severity rank
pub fn classify(systolic: i32, diastolic: i32) -> Classification {
    categorize_blood_pressure(systolic, diastolic).into()
}
