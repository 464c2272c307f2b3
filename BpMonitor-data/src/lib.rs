// BpMonitor Data
// This crate holds the reading record and the session-scoped history log

// Storage models
pub mod models;

// Append-only session storage
pub mod repository;
