//! # Menu Actor
//!
//! Owns the menu catalog. Plain CRUD with no context dependencies; the one
//! domain rule lives in the client layer: dishes are retired by flipping
//! `available`, never deleted.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the menu actor and its generic client.
pub fn new() -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(32)
}
