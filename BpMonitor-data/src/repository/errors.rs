use thiserror::Error;

/// Error type for history log operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A caller supplied an argument the operation cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
