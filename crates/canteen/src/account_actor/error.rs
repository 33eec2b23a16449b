//! Error types for the account actor.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// The requested account was not found.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// A required field was empty at creation time.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Balance operations only apply to student accounts.
    #[error("Not a student account: {0}")]
    NotAStudent(String),

    /// The debit exceeds the available e-wallet balance.
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u64, available: u64 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AccountError {
    fn from(msg: String) -> Self {
        AccountError::ActorCommunicationError(msg)
    }
}
