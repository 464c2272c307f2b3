// Domain entities and value objects
pub mod measurement;

// Re-export common types for easier imports
pub use bp_monitor_data::models::{BloodPressureCategory, Reading};
pub use measurement::{Classification, MeasurementOutcome, PpgMeasurement, PpgSignal, TrendSeries};
