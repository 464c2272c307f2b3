pub mod reading;

pub use reading::{BloodPressureCategory, Reading};
