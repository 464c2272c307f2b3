// Testing utilities for the domain layer
// This module is only available in tests or when the "mock" feature is enabled

use std::collections::VecDeque;

use crate::entities::{PpgMeasurement, PpgSignal};
use crate::services::signal::{SignalError, SignalSource};

/// Signal source that replays a fixed list of pressure pairs
///
/// Each call to `generate` returns the next pair with a short flat waveform.
/// Once the script is exhausted every call fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSignalSource {
    pending: VecDeque<(i32, i32)>,
}

impl ScriptedSignalSource {
    /// Create a source that will return `pairs` in order
    pub fn new(pairs: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            pending: pairs.into_iter().collect(),
        }
    }

    /// Queue another pair at the end of the script
    pub fn with_reading(mut self, systolic: i32, diastolic: i32) -> Self {
        self.pending.push_back((systolic, diastolic));
        self
    }

    /// Pairs not yet returned
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl SignalSource for ScriptedSignalSource {
    fn generate(&mut self) -> Result<PpgMeasurement, SignalError> {
        let (systolic, diastolic) = self
            .pending
            .pop_front()
            .ok_or_else(|| SignalError::Acquisition("scripted source exhausted".to_string()))?;

        Ok(PpgMeasurement {
            signal: PpgSignal {
                times: vec![0.0, 0.5, 1.0],
                series: vec![0.0, 0.0, 0.0],
            },
            systolic,
            diastolic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_fails() {
        let mut source = ScriptedSignalSource::new([(120, 80)]).with_reading(140, 90);
        assert_eq!(source.remaining(), 2);

        assert_eq!(source.generate().unwrap().systolic, 120);
        assert_eq!(source.generate().unwrap().diastolic, 90);
        assert!(matches!(source.generate(), Err(SignalError::Acquisition(_))));
    }
}
