use thiserror::Error;
use tracing::{info, warn};

use bp_monitor_data::repository::{HistoryLog, RepositoryError};

use crate::entities::{BloodPressureCategory, MeasurementOutcome, Reading, TrendSeries};
use crate::resources::{HEALTH_TIPS, PROVIDER_STUB_MESSAGE};
use crate::services::classifier::classify;
use crate::services::signal::{SignalError, SignalSource};

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The signal source failed; history is left untouched
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// History log error
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Drives the measurement workflow for a single user session
///
/// The session owns its signal source and its history. History is created
/// empty by [`MeasurementSession::new`] and dropped with the session.
#[derive(Debug)]
pub struct MeasurementSession<S: SignalSource> {
    source: S,
    history: HistoryLog,
}

impl<S: SignalSource> MeasurementSession<S> {
    /// Start a new session with an empty history
    pub fn new(source: S) -> Self {
        Self {
            source,
            history: HistoryLog::new(),
        }
    }

    /// Take a measurement: generate, classify, then append to history
    pub fn measure(&mut self) -> Result<MeasurementOutcome, SessionError> {
        let measurement = self.source.generate()?;
        let classification = classify(measurement.systolic, measurement.diastolic);
        let reading = Reading::new(
            measurement.systolic,
            measurement.diastolic,
            classification.category,
        );

        info!(
            systolic = reading.systolic,
            diastolic = reading.diastolic,
            status = classification.label,
            "Measurement complete"
        );
        if classification.category == BloodPressureCategory::HypertensiveCrisis {
            warn!(
                systolic = reading.systolic,
                diastolic = reading.diastolic,
                "Reading is in the hypertensive crisis range"
            );
        }

        self.history.append(reading.clone());

        Ok(MeasurementOutcome {
            reading,
            classification,
            signal: measurement.signal,
        })
    }

    /// Readings taken so far, oldest first
    pub fn history(&self) -> &[Reading] {
        self.history.all()
    }

    /// Direct read access to the underlying log
    pub fn history_log(&self) -> &HistoryLog {
        &self.history
    }

    /// Most recent reading, if any
    pub fn latest(&self) -> Option<&Reading> {
        self.history.latest()
    }

    /// Trend chart columns for the current history
    pub fn trend(&self) -> TrendSeries {
        TrendSeries::from_readings(self.history.all())
    }

    /// Health tip for the current history length
    pub fn tip_of_the_day(&self) -> Result<&'static str, SessionError> {
        self.tip_from(&HEALTH_TIPS)
    }

    /// Pick a tip from `tips` using the history length
    pub fn tip_from<'a>(&self, tips: &[&'a str]) -> Result<&'a str, SessionError> {
        let index = self.history.tip_index(tips.len())?;
        Ok(tips[index])
    }

    /// Telemedicine stub; does not touch history
    pub fn connect_provider(&self) -> &'static str {
        info!("Provider connection requested (stub)");
        PROVIDER_STUB_MESSAGE
    }

    /// End the session, handing back the source and the final history
    pub fn finish(self) -> (S, Vec<Reading>) {
        info!(readings = self.history.len(), "Session finished");
        (self.source, self.history.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PpgMeasurement, PpgSignal};
    use crate::services::signal::MockSignalSource;
    use mockall::Sequence;

    fn measurement(systolic: i32, diastolic: i32) -> PpgMeasurement {
        PpgMeasurement {
            signal: PpgSignal {
                times: vec![0.0, 1.0],
                series: vec![0.0, 0.5],
            },
            systolic,
            diastolic,
        }
    }

    fn scripted(pairs: &[(i32, i32)]) -> MockSignalSource {
        let mut mock = MockSignalSource::new();
        let mut seq = Sequence::new();
        for &(s, d) in pairs {
            mock.expect_generate()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move || Ok(measurement(s, d)));
        }
        mock
    }

    #[test]
    fn test_measure_classifies_and_appends() {
        let mut session = MeasurementSession::new(scripted(&[(185, 70), (130, 85), (110, 70)]));

        let labels: Vec<&str> = (0..3)
            .map(|_| session.measure().unwrap().classification.label)
            .collect();

        assert_eq!(labels, vec!["Hypertensive Crisis", "Elevated", "Normal"]);
        let pairs: Vec<(i32, i32)> = session
            .history()
            .iter()
            .map(|r| (r.systolic, r.diastolic))
            .collect();
        assert_eq!(pairs, vec![(185, 70), (130, 85), (110, 70)]);
        assert_eq!(session.history_log().tip_index(8).unwrap(), 3);
    }

    #[test]
    fn test_outcome_reading_matches_history_entry() {
        let mut session = MeasurementSession::new(scripted(&[(150, 95)]));
        let outcome = session.measure().unwrap();

        assert_eq!(session.latest(), Some(&outcome.reading));
        assert_eq!(outcome.reading.severity_rank, 2);
        assert_eq!(outcome.signal.len(), 2);
    }

    #[test]
    fn test_signal_failure_leaves_history_untouched() {
        let mut mock = MockSignalSource::new();
        mock.expect_generate()
            .times(1)
            .returning(|| Err(SignalError::Acquisition("sensor covered".to_string())));
        let mut session = MeasurementSession::new(mock);

        let result = session.measure();

        assert!(matches!(result, Err(SessionError::Signal(_))));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_tip_rotates_with_history() {
        let mut session = MeasurementSession::new(scripted(&[(110, 70), (112, 72)]));
        assert_eq!(session.tip_of_the_day().unwrap(), HEALTH_TIPS[0]);

        session.measure().unwrap();
        assert_eq!(session.tip_of_the_day().unwrap(), HEALTH_TIPS[1]);

        session.measure().unwrap();
        assert_eq!(session.tip_from(&["a", "b"]).unwrap(), "a");
    }

    #[test]
    fn test_tip_from_empty_list_is_invalid_argument() {
        let session = MeasurementSession::new(MockSignalSource::new());
        let result = session.tip_from(&[]);
        assert!(matches!(
            result,
            Err(SessionError::Repository(RepositoryError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_connect_provider_is_a_stub() {
        let session = MeasurementSession::new(MockSignalSource::new());
        assert!(session.connect_provider().contains("healthcare provider"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_finish_returns_history() {
        let mut session = MeasurementSession::new(scripted(&[(120, 70)]));
        session.measure().unwrap();

        let (_source, readings) = session.finish();

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].status, BloodPressureCategory::Elevated);
    }
}
