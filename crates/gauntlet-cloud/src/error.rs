//! Error types for cloud platform operations

use thiserror::Error;

/// Cloud platform error type
#[derive(Error, Debug)]
pub enum CloudError {
    /// No server matched the requested name or ID
    #[error("Server not found: {0}")]
    ServerNotFound(String),

    /// The server is not in a state that allows the operation
    #[error("Invalid server state for {operation}: {status}")]
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// Status the server was in
        status: String,
    },

    /// Transport or provider failure
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type for cloud operations
pub type CloudResult<T> = Result<T, CloudError>;
