//! Error types for the session actor.

use thiserror::Error;

/// Errors raised while talking to the session actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The actor has stopped and no longer accepts requests.
    #[error("Session actor closed")]
    ActorClosed,

    /// The actor dropped the reply channel without answering.
    #[error("Session actor dropped response channel")]
    ActorDropped,

    /// The actor task panicked or was cancelled.
    #[error("Session task failed: {0}")]
    TaskFailed(String),
}
