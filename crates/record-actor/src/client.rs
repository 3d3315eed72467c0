//! # Generic Client
//!
//! This module defines the generic client for communicating with a record actor.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, StoreEvent};
use tokio::sync::{broadcast, mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` is the async handle to a `ResourceActor<T>`. It forwards each
/// request over a Tokio mpsc channel and awaits the answer on a oneshot channel.
///
/// * **Cloneable** – holds only channel senders, so cloning is inexpensive.
/// * **Observable** – [`ResourceClient::subscribe`] yields the store's change notifications.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    events: broadcast::Sender<StoreEvent<T::Id>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(
        sender: mpsc::Sender<ResourceRequest<T>>,
        events: broadcast::Sender<StoreEvent<T::Id>>,
    ) -> Self {
        Self { sender, events }
    }

    /// Stores a new record and returns it with its generated id.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Create { params, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Get { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Every record, in creation order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::List { respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Delete { id, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Receives a [`StoreEvent`] for every mutation committed after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent<T::Id>> {
        self.events.subscribe()
    }

    async fn request(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
