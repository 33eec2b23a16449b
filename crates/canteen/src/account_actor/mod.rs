//! # Account Actor
//!
//! Owns the account directory. Besides CRUD it handles the e-wallet balance
//! actions: `Debit` validates funds before decrementing, `Credit` is the
//! parent top-up path. Both are student-only operations.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Account;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the account actor and its generic client.
pub fn new() -> (ResourceActor<Account>, ResourceClient<Account>) {
    ResourceActor::new(32)
}
