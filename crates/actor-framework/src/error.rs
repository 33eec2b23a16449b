//! # Framework Errors
//!
//! Common error type shared by all actors and clients. Entity-specific
//! failures are carried boxed inside [`FrameworkError::EntityError`] and
//! mapped back to the concrete error type by the domain clients.

/// Errors produced by the actor runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
