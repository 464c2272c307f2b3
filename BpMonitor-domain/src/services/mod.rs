pub mod classifier;
pub mod session;
pub mod signal;

// Domain services
// This module contains business logic implementations.

// Re-export service types and entry points
pub use classifier::{categorize_blood_pressure, classify};
pub use session::{MeasurementSession, SessionError};
pub use signal::{SignalError, SignalSource, SimulatedPpgSource};

/// Start a session backed by the simulated PPG source
pub fn create_simulated_session(
    config: crate::config::SignalConfig,
) -> Result<MeasurementSession<SimulatedPpgSource>, SignalError> {
    Ok(MeasurementSession::new(SimulatedPpgSource::new(config)?))
}
