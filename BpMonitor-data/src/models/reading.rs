use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blood pressure category assigned to a reading
///
/// Variants are declared in ascending severity so the derived ordering
/// matches the severity rank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BloodPressureCategory {
    /// Neither pressure reaches an elevated threshold
    #[serde(rename = "Normal")]
    Normal,

    /// Systolic >= 120 or diastolic >= 80
    #[serde(rename = "Elevated")]
    Elevated,

    /// Systolic >= 140 or diastolic >= 90
    #[serde(rename = "High Blood Pressure")]
    HighBloodPressure,

    /// Systolic >= 180 or diastolic >= 120
    #[serde(rename = "Hypertensive Crisis")]
    HypertensiveCrisis,
}

impl BloodPressureCategory {
    /// All categories, lowest severity first
    pub const ALL: [BloodPressureCategory; 4] = [
        BloodPressureCategory::Normal,
        BloodPressureCategory::Elevated,
        BloodPressureCategory::HighBloodPressure,
        BloodPressureCategory::HypertensiveCrisis,
    ];

    /// Human readable status label
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::HighBloodPressure => "High Blood Pressure",
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis",
        }
    }

    /// Ordinal used for sorting and color coding (0..=3)
    pub fn severity_rank(&self) -> u8 {
        match self {
            BloodPressureCategory::Normal => 0,
            BloodPressureCategory::Elevated => 1,
            BloodPressureCategory::HighBloodPressure => 2,
            BloodPressureCategory::HypertensiveCrisis => 3,
        }
    }

    /// Display color hint for the presentation layer
    pub fn color(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "green",
            BloodPressureCategory::Elevated => "yellow",
            BloodPressureCategory::HighBloodPressure => "orange",
            BloodPressureCategory::HypertensiveCrisis => "red",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Storage model for a classified blood pressure reading
///
/// A reading is built once at measurement time and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique identifier for the reading
    pub id: Uuid,

    /// When the reading was taken
    pub timestamp: DateTime<Utc>,

    /// Systolic blood pressure in mmHg (the higher number)
    pub systolic: i32,

    /// Diastolic blood pressure in mmHg (the lower number)
    pub diastolic: i32,

    /// Status label the reading was classified into
    pub status: BloodPressureCategory,

    /// Severity rank of `status`
    pub severity_rank: u8,
}

impl Reading {
    /// Create a reading stamped with the current time
    pub fn new(systolic: i32, diastolic: i32, status: BloodPressureCategory) -> Self {
        Self::with_timestamp(Utc::now(), systolic, diastolic, status)
    }

    /// Create a reading with an explicit timestamp
    pub fn with_timestamp(
        timestamp: DateTime<Utc>,
        systolic: i32,
        diastolic: i32,
        status: BloodPressureCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            systolic,
            diastolic,
            status,
            severity_rank: status.severity_rank(),
        }
    }
}
