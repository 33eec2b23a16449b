//! # ActorEntity Trait
//!
//! Contract that every resource type must satisfy to be managed by a
//! [`crate::ResourceActor`]. Associated types pin the DTOs to the entity, so a
//! cart payload can never be sent to the order actor; the compiler rules that
//! class of bug out entirely.
//!
//! `on_create` and `on_delete` are provided methods with no-op defaults;
//! implement them only when creation or removal has side effects (for example
//! validating against another actor through the injected context).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource entity managed by a [`crate::ResourceActor`].
///
/// The `Context` associated type carries runtime dependencies (typically
/// clients of other actors). It is handed to `run()` rather than to a
/// constructor, so mutually-dependent actors can be created before any of
/// them is wired.
///
/// Each entity defines a single error type covering all of its operations.
/// One enum per actor keeps client-side pattern matching manageable, at the
/// cost of some theoretical precision per action.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. `From<u32>` lets the actor mint ids from its
    /// internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. debiting a balance).
    type Action: Send + Sync + Debug;

    /// Result type returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` when the
    /// entity stands alone.
    type Context: Send + Sync;

    /// Error type for this entity's operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from a freshly minted id and the create payload.
    /// Called synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction, before the entity is inserted into the store.
    /// A failure here aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to the entity in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
