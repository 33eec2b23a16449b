//! # Generic Messages
//!
//! Wire format between a [`crate::ResourceClient`] and its
//! [`crate::ResourceActor`]. The variants map to the standard resource
//! lifecycle (create, read, list, update, delete) plus an `Action` escape
//! hatch for operations that do not fit the CRUD mold.
//!
//! Every variant carries a oneshot responder; the actor answers exactly once
//! per request.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// Generic over `T: ActorEntity`, so payload types are tied to the entity at
/// compile time.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every entity currently in the store. Collection-level
    /// queries (status buckets, per-account filters, date ranges) are built
    /// on top of this by the domain clients.
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
