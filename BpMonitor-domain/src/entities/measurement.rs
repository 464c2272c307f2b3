use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bp_monitor_data::models::{BloodPressureCategory, Reading};

/// Result of classifying a pressure pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Category the pair falls into
    pub category: BloodPressureCategory,

    /// Status label, e.g. "Elevated"
    pub label: &'static str,

    /// Ordinal severity, 0 (normal) to 3 (crisis)
    pub severity_rank: u8,
}

impl From<BloodPressureCategory> for Classification {
    fn from(category: BloodPressureCategory) -> Self {
        Self {
            category,
            label: category.label(),
            severity_rank: category.severity_rank(),
        }
    }
}

/// Sampled PPG waveform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PpgSignal {
    /// Sample times in seconds
    pub times: Vec<f64>,

    /// Amplitude at each sample time
    pub series: Vec<f64>,
}

impl PpgSignal {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterate (time, amplitude) pairs for plotting
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.series.iter().copied())
    }
}

/// Everything a signal source produces for one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpgMeasurement {
    pub signal: PpgSignal,
    pub systolic: i32,
    pub diastolic: i32,
}

/// Output of one "take a measurement" action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementOutcome {
    /// The reading that was appended to history
    pub reading: Reading,

    /// Classification of the reading
    pub classification: Classification,

    /// Waveform the pressures were "estimated" from
    pub signal: PpgSignal,
}

/// Column view of the history used for the trend chart
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TrendSeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub systolic: Vec<i32>,
    pub diastolic: Vec<i32>,
}

impl TrendSeries {
    /// Build the trend columns from readings in history order
    pub fn from_readings(readings: &[Reading]) -> Self {
        let mut trend = Self {
            timestamps: Vec::with_capacity(readings.len()),
            systolic: Vec::with_capacity(readings.len()),
            diastolic: Vec::with_capacity(readings.len()),
        };
        for reading in readings {
            trend.timestamps.push(reading.timestamp);
            trend.systolic.push(reading.systolic);
            trend.diastolic.push(reading.diastolic);
        }
        trend
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_from_category() {
        let classification = Classification::from(BloodPressureCategory::HighBloodPressure);
        assert_eq!(classification.label, "High Blood Pressure");
        assert_eq!(classification.severity_rank, 2);
    }

    #[test]
    fn test_trend_columns_follow_reading_order() {
        let readings = vec![
            Reading::new(185, 70, BloodPressureCategory::HypertensiveCrisis),
            Reading::new(130, 85, BloodPressureCategory::Elevated),
        ];

        let trend = TrendSeries::from_readings(&readings);

        assert_eq!(trend.len(), 2);
        assert_eq!(trend.systolic, vec![185, 130]);
        assert_eq!(trend.diastolic, vec![70, 85]);
        assert_eq!(trend.timestamps[0], readings[0].timestamp);
    }

    #[test]
    fn test_signal_points_pair_times_with_samples() {
        let signal = PpgSignal {
            times: vec![0.0, 0.5],
            series: vec![0.1, -0.2],
        };
        let points: Vec<(f64, f64)> = signal.points().collect();
        assert_eq!(points, vec![(0.0, 0.1), (0.5, -0.2)]);
    }
}
