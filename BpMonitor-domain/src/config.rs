//! Configuration for the simulated signal source
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file) and fall back to the defaults of the demo when unset.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

pub const ENV_DURATION_SECS: &str = "BP_SIGNAL_DURATION_SECS";
pub const ENV_SAMPLES: &str = "BP_SIGNAL_SAMPLES";
pub const ENV_HEART_RATE_HZ: &str = "BP_SIGNAL_HEART_RATE_HZ";
pub const ENV_NOISE_STD: &str = "BP_SIGNAL_NOISE_STD";
pub const ENV_SEED: &str = "BP_SIGNAL_SEED";
pub const ENV_SYSTOLIC_MIN: &str = "BP_SYSTOLIC_MIN";
pub const ENV_SYSTOLIC_MAX: &str = "BP_SYSTOLIC_MAX";
pub const ENV_DIASTOLIC_MIN: &str = "BP_DIASTOLIC_MIN";
pub const ENV_DIASTOLIC_MAX: &str = "BP_DIASTOLIC_MAX";

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable could not be parsed
    #[error("Invalid value {value:?} for {var}")]
    Parse { var: String, value: String },

    /// Parsed values are outside their allowed ranges
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Parameters of the simulated PPG signal and pressure ranges
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SignalConfig {
    /// Length of the recorded waveform in seconds
    #[validate(range(min = 0.1, max = 600.0, message = "Duration must be between 0.1 and 600 seconds"))]
    pub duration_secs: f64,

    /// Number of samples, including both endpoints
    #[validate(range(min = 2, max = 100000, message = "Sample count must be between 2 and 100000"))]
    pub sample_count: u32,

    /// Fundamental pulse frequency in Hz
    #[validate(range(min = 0.1, max = 5.0, message = "Heart rate must be between 0.1 and 5 Hz"))]
    pub heart_rate_hz: f64,

    /// Standard deviation of the additive gaussian noise
    #[validate(range(min = 0.0, max = 10.0, message = "Noise std must be between 0 and 10"))]
    pub noise_std: f64,

    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,

    /// Lower bound of simulated systolic pressure (inclusive)
    #[validate(range(min = 0, max = 400, message = "Systolic bounds must be between 0 and 400"))]
    pub systolic_min: i32,

    /// Upper bound of simulated systolic pressure (exclusive)
    #[validate(range(min = 0, max = 400, message = "Systolic bounds must be between 0 and 400"))]
    pub systolic_max: i32,

    /// Lower bound of simulated diastolic pressure (inclusive)
    #[validate(range(min = 0, max = 300, message = "Diastolic bounds must be between 0 and 300"))]
    pub diastolic_min: i32,

    /// Upper bound of simulated diastolic pressure (exclusive)
    #[validate(range(min = 0, max = 300, message = "Diastolic bounds must be between 0 and 300"))]
    pub diastolic_max: i32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            sample_count: 500,
            heart_rate_hz: 1.2,
            noise_std: 0.1,
            seed: None,
            systolic_min: 100,
            systolic_max: 160,
            diastolic_min: 60,
            diastolic_max: 100,
        }
    }
}

impl SignalConfig {
    /// Load configuration from `.env` (if present) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            debug!(".env file not found, using process environment only");
        }
        Self::from_env()
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let seed = match lookup(ENV_SEED) {
            Some(raw) => Some(parse_var(ENV_SEED, &raw)?),
            None => None,
        };

        let config = Self {
            duration_secs: read_var(&lookup, ENV_DURATION_SECS, defaults.duration_secs)?,
            sample_count: read_var(&lookup, ENV_SAMPLES, defaults.sample_count)?,
            heart_rate_hz: read_var(&lookup, ENV_HEART_RATE_HZ, defaults.heart_rate_hz)?,
            noise_std: read_var(&lookup, ENV_NOISE_STD, defaults.noise_std)?,
            seed,
            systolic_min: read_var(&lookup, ENV_SYSTOLIC_MIN, defaults.systolic_min)?,
            systolic_max: read_var(&lookup, ENV_SYSTOLIC_MAX, defaults.systolic_max)?,
            diastolic_min: read_var(&lookup, ENV_DIASTOLIC_MIN, defaults.diastolic_min)?,
            diastolic_max: read_var(&lookup, ENV_DIASTOLIC_MAX, defaults.diastolic_max)?,
        };

        config.check()?;
        Ok(config)
    }

    /// Validate ranges and bound ordering
    pub fn check(&self) -> Result<(), ConfigError> {
        // Range rules compare with < and >, which NaN passes
        for (field, value) in [
            ("duration_secs", self.duration_secs),
            ("heart_rate_hz", self.heart_rate_hz),
            ("noise_std", self.noise_std),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "{}: must be a finite number",
                    field
                )));
            }
        }

        if let Err(validation_errors) = self.validate() {
            let mut messages: Vec<String> = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect();
            messages.sort();
            return Err(ConfigError::Validation(messages.join("; ")));
        }

        // Ranges are half-open, so each needs at least one value
        if self.systolic_min >= self.systolic_max {
            return Err(ConfigError::Validation(
                "systolic_min must be less than systolic_max".to_string(),
            ));
        }
        if self.diastolic_min >= self.diastolic_max {
            return Err(ConfigError::Validation(
                "diastolic_min must be less than diastolic_max".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| {
        warn!(var = name, value = raw, "Unparsable configuration value");
        ConfigError::Parse {
            var: name.to_string(),
            value: raw.to_string(),
        }
    })
}

fn read_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => parse_var(name, &raw),
        None => Ok(default),
    }
}
