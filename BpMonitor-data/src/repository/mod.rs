// Repository module structure
pub mod errors;
mod history;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use history::HistoryLog;
