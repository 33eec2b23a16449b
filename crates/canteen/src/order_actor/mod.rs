//! # Order Actor
//!
//! Owns the set of orders and applies validated status transitions. The
//! actor's context is an [`AccountClient`], used in `on_create` to reject
//! orders for accounts that do not exist.
//!
//! The "active" and "completed" collections of the UI are derived views
//! over this single store, filtered by status.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the order actor and its generic client.
///
/// The paired [`crate::clients::AccountClient`] context goes into
/// `actor.run(...)`, not here.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
