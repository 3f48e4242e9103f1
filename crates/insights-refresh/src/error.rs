//! Error types for the refresh controller

use thiserror::Error;

/// Result type alias for refresh operations
pub type Result<T> = std::result::Result<T, RefreshError>;

/// Errors that can occur while driving the refresh controller
#[derive(Error, Debug)]
pub enum RefreshError {
    /// `start` was called twice
    #[error("Refresh controller already started")]
    AlreadyStarted,

    /// The controller was shut down
    #[error("Refresh controller has been shut down")]
    ShutDown,

    /// No tokio runtime to schedule timers on
    #[error("Runtime error: {message}")]
    Runtime {
        /// Error message
        message: String,
    },

    /// Core error
    #[error(transparent)]
    Core(#[from] insights_core::Error),
}

impl RefreshError {
    /// Create a runtime error
    #[must_use]
    pub fn runtime<S: Into<String>>(message: S) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }
}
