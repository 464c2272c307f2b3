use tracing::debug;

use super::errors::RepositoryError;
use crate::models::reading::Reading;

/// Append-only, insertion-ordered log of the readings taken in one session
///
/// The log is owned by the session that creates it. Readings can be added and
/// read back but never removed, reordered, or modified.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    readings: Vec<Reading>,
}

impl HistoryLog {
    /// Create an empty history for a new session
    pub fn new() -> Self {
        Self { readings: Vec::new() }
    }

    /// Add a reading to the end of the log
    pub fn append(&mut self, reading: Reading) {
        debug!(
            id = %reading.id,
            systolic = reading.systolic,
            diastolic = reading.diastolic,
            position = self.readings.len(),
            "Appending reading to history"
        );
        self.readings.push(reading);
    }

    /// All readings, oldest first
    pub fn all(&self) -> &[Reading] {
        &self.readings
    }

    /// Owned copy of the current contents, unaffected by later appends
    pub fn snapshot(&self) -> Vec<Reading> {
        self.readings.clone()
    }

    /// The most recently appended reading
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Index into a rotating list of `tips_count` tips, derived from the log length
    pub fn tip_index(&self, tips_count: usize) -> Result<usize, RepositoryError> {
        if tips_count == 0 {
            return Err(RepositoryError::InvalidArgument(
                "tips_count must be greater than zero".to_string(),
            ));
        }
        Ok(self.readings.len() % tips_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reading::BloodPressureCategory;

    fn reading(systolic: i32, diastolic: i32) -> Reading {
        Reading::new(systolic, diastolic, BloodPressureCategory::Normal)
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = HistoryLog::new();
        assert!(history.is_empty());
        assert!(history.all().is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_append_preserves_order_and_content() {
        let mut history = HistoryLog::new();
        let appended: Vec<Reading> = (0..10).map(|i| reading(100 + i, 60 + i)).collect();

        for r in &appended {
            history.append(r.clone());
        }

        assert_eq!(history.len(), appended.len());
        assert_eq!(history.all(), appended.as_slice());
        assert_eq!(history.latest(), appended.last());
    }

    #[test]
    fn test_snapshot_survives_later_appends() {
        let mut history = HistoryLog::new();
        history.append(reading(118, 76));
        let before = history.snapshot();

        history.append(reading(142, 91));

        assert_eq!(before.len(), 1);
        assert_eq!(before[0], history.all()[0]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_tip_index_cycles_with_length() {
        let mut history = HistoryLog::new();
        let mut seen = Vec::new();
        for _ in 0..16 {
            seen.push(history.tip_index(8).unwrap());
            history.append(reading(120, 80));
        }
        let expected: Vec<usize> = (0..8).chain(0..8).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_tip_index_rejects_zero() {
        let history = HistoryLog::new();
        let result = history.tip_index(0);
        assert!(matches!(result, Err(RepositoryError::InvalidArgument(_))));
        assert!(result.unwrap_err().to_string().contains("tips_count"));
    }
}
