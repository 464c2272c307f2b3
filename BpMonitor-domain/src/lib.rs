// BpMonitor Domain
// This crate contains the business logic for the BpMonitor application

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Environment-driven configuration
pub mod config;

// Static health tips and local resources
pub mod resources;

// Re-export the data layer for convenience
pub use bp_monitor_data as data;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
