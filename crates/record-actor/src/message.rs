//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`, plus the
//! change notifications the actor broadcasts after each committed mutation.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The variants map onto the record lifecycle: create, read one, read all, replace and
/// remove. They are generic over `T: ActorEntity`, so a customer payload can only ever be
/// sent to a customer actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
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
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Operation name, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "create",
            ResourceRequest::Get { .. } => "get",
            ResourceRequest::List { .. } => "list",
            ResourceRequest::Update { .. } => "update",
            ResourceRequest::Delete { .. } => "delete",
        }
    }
}

/// Notification published after a mutation has been committed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent<Id> {
    Created(Id),
    Updated(Id),
    Deleted(Id),
}
