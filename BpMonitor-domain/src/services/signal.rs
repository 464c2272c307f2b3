use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use thiserror::Error;
use tracing::debug;

use crate::config::SignalConfig;
use crate::entities::{PpgMeasurement, PpgSignal};

/// Relative amplitude of the second harmonic in the simulated waveform
const HARMONIC_AMPLITUDE: f64 = 0.5;

/// Signal source errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    /// The source was configured with unusable parameters
    #[error("Invalid signal parameter: {0}")]
    InvalidParameter(String),

    /// The source could not produce a measurement
    #[error("Signal acquisition failed: {0}")]
    Acquisition(String),
}

/// Supplies one PPG waveform and pressure pair per measurement
#[cfg_attr(test, mockall::automock)]
pub trait SignalSource {
    /// Produce the next measurement
    fn generate(&mut self) -> Result<PpgMeasurement, SignalError>;
}

/// Synthetic PPG source
///
/// The waveform is a pulse fundamental plus its second harmonic with additive
/// gaussian noise. Pressures are drawn uniformly from the configured ranges
/// and bear no relation to the waveform.
#[derive(Debug, Clone)]
pub struct SimulatedPpgSource {
    config: SignalConfig,
    noise: Normal<f64>,
    rng: StdRng,
}

impl SimulatedPpgSource {
    /// Create a source from a validated configuration
    pub fn new(config: SignalConfig) -> Result<Self, SignalError> {
        config
            .check()
            .map_err(|e| SignalError::InvalidParameter(e.to_string()))?;

        let noise = Normal::new(0.0, config.noise_std)
            .map_err(|e| SignalError::InvalidParameter(e.to_string()))?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, noise, rng })
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Evenly spaced sample times over `[0, duration]`, both ends included
    fn sample_times(&self) -> Vec<f64> {
        let n = self.config.sample_count;
        let step = self.config.duration_secs / (n - 1) as f64;
        (0..n).map(|i| i as f64 * step).collect()
    }
}

impl SignalSource for SimulatedPpgSource {
    fn generate(&mut self) -> Result<PpgMeasurement, SignalError> {
        let times = self.sample_times();
        let f = self.config.heart_rate_hz;

        let series = times
            .iter()
            .map(|&t| {
                let clean = (2.0 * PI * f * t).sin()
                    + HARMONIC_AMPLITUDE * (2.0 * PI * 2.0 * f * t).sin();
                clean + self.rng.sample(self.noise)
            })
            .collect();

        let systolic = self
            .rng
            .gen_range(self.config.systolic_min..self.config.systolic_max);
        let diastolic = self
            .rng
            .gen_range(self.config.diastolic_min..self.config.diastolic_max);

        debug!(
            samples = self.config.sample_count,
            systolic, diastolic, "Generated simulated PPG measurement"
        );

        Ok(PpgMeasurement {
            signal: PpgSignal { times, series },
            systolic,
            diastolic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SignalConfig {
        SignalConfig {
            seed: Some(seed),
            ..SignalConfig::default()
        }
    }

    #[test]
    fn test_default_shape() {
        let mut source = SimulatedPpgSource::new(seeded(7)).unwrap();
        let measurement = source.generate().unwrap();

        assert_eq!(measurement.signal.times.len(), 500);
        assert_eq!(measurement.signal.series.len(), 500);
        assert_eq!(measurement.signal.times[0], 0.0);
        assert!((measurement.signal.times[499] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_pressures_stay_in_configured_ranges() {
        let mut source = SimulatedPpgSource::new(seeded(11)).unwrap();
        for _ in 0..200 {
            let m = source.generate().unwrap();
            assert!((100..160).contains(&m.systolic), "systolic {}", m.systolic);
            assert!((60..100).contains(&m.diastolic), "diastolic {}", m.diastolic);
        }
    }

    #[test]
    fn test_same_seed_reproduces_session() {
        let mut a = SimulatedPpgSource::new(seeded(2024)).unwrap();
        let mut b = SimulatedPpgSource::new(seeded(2024)).unwrap();
        for _ in 0..3 {
            assert_eq!(a.generate().unwrap(), b.generate().unwrap());
        }
    }

    #[test]
    fn test_noise_free_waveform_matches_formula() {
        let config = SignalConfig {
            noise_std: 0.0,
            sample_count: 11,
            duration_secs: 1.0,
            ..seeded(1)
        };
        let mut source = SimulatedPpgSource::new(config).unwrap();
        let signal = source.generate().unwrap().signal;

        for (t, y) in signal.points() {
            let expected = (2.0 * PI * 1.2 * t).sin() + 0.5 * (2.0 * PI * 2.4 * t).sin();
            assert!((y - expected).abs() < 1e-9, "t={t}: {y} != {expected}");
        }
    }

    #[test]
    fn test_nan_duration_is_rejected() {
        let config = SignalConfig {
            duration_secs: f64::NAN,
            ..SignalConfig::default()
        };
        let result = SimulatedPpgSource::new(config);
        assert!(matches!(result, Err(SignalError::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SignalConfig {
            sample_count: 1,
            ..SignalConfig::default()
        };
        let result = SimulatedPpgSource::new(config);
        assert!(matches!(result, Err(SignalError::InvalidParameter(_))));
    }
}
