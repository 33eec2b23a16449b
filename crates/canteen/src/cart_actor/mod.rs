//! # Cart Actor
//!
//! Owns every account's cart. Mutations arrive as [`CartAction`]s and apply
//! the pure rules in [`crate::model::cart`]; the `Totals` action is the
//! read-only counterpart for derived values.
//!
//! One cart per account is a convention maintained by the session layer,
//! which creates a cart on first login and reuses it afterwards.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Cart;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the cart actor and its generic client.
pub fn new() -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(32)
}
