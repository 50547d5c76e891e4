//! Error types for the Order actor.

use crate::tracker::TrackerError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order payload was rejected on creation.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// A status change or completion was refused.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
