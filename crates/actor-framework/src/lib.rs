//! # Actor Framework
//!
//! Building blocks for type-safe resource actors: each stateful resource type
//! (menu items, carts, orders, accounts, …) gets its own actor that owns its
//! collection and processes messages sequentially in a dedicated Tokio task.
//!
//! The framework separates three layers:
//!
//! 1. **Entity layer** ([`ActorEntity`]) — domain state and business rules.
//! 2. **Runtime layer** ([`ResourceActor`]) — the message loop and the store.
//! 3. **Interface layer** ([`ResourceClient`]) — cloneable, type-safe handles.
//!
//! Business logic is written once in the entity trait; the framework supplies
//! the CRUD + Action message plumbing, error propagation, and tracing.
//!
//! ## Concurrency model
//!
//! - One Tokio task per actor; messages are processed sequentially within it,
//!   so the store needs no locks.
//! - Actors run in parallel with each other; clients are cheap clones of an
//!   mpsc sender.
//! - Dependencies between actors are injected late, as context passed to
//!   [`ResourceActor::run`], which keeps construction free of cycles.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], an in-memory stand-in
//! with the same wire format as the real client, for deterministic unit tests
//! of client-side logic without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
