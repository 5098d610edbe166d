//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can surface through the cart client.
///
/// Note how small this is: invalid toppings, unknown order types, and stale
/// line indexes are deliberately NOT errors: they are ignored by the entity
/// (see the cart actions module).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// No cart with that id.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
