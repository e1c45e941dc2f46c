use std::io;
use thiserror::Error;

use crate::actors::messages::{ActorError, DeliveryError};

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The transport could not deliver a reply. Never retried.
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Represents errors specific to the actor system, such as communication failures.
    #[error("Actor error: {0}")]
    Actor(#[from] ActorError),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., out-of-range settings).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparseable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl AppError {
    /// True when the supervisor mailbox is gone and no further request can succeed.
    ///
    /// Timeouts and delivery failures are per-request; callers keep going.
    pub fn is_supervisor_gone(&self) -> bool {
        matches!(self, AppError::Actor(ActorError::ChannelClosed(_)))
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Delivery(e) => AppError::Delivery(e.clone()),
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Timeout(s) => AppError::Timeout(s.clone()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
