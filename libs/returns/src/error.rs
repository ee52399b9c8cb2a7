//! Calculator error types.

use thiserror::Error;

/// Errors returned by [`ActorReturnCalculator::compute`](crate::ActorReturnCalculator::compute).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnError {
    /// The actor name was empty or whitespace only.
    #[error("actor name must not be empty")]
    InvalidInput,

    /// No cast appearance matched the actor name.
    #[error("actor not found: {actor}")]
    NotFound { actor: String },
}
