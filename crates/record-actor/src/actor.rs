//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of records
//! and processes every request against it sequentially. It is the "server" half of the actor
//! pattern; [`ResourceClient`] is the other half.

use crate::client::ResourceClient;
use crate::entity::{ActorEntity, UniqueKey};
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, StoreEvent};
use std::collections::HashMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Capacity of the change-notification channel. Slow subscribers see `Lagged` past this.
const EVENT_CAPACITY: usize = 64;

/// The generic actor that manages a collection of records.
///
/// The actor owns the records, their creation order and the unique index, and it is the only
/// task that ever touches them, so none of it sits behind a lock.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and a cloneable client.
/// 2.  **Run**: spawn `actor.run(context)` on the runtime.
/// 3.  **Use**: send requests through the client; drop every client to stop the actor.
///
/// ```rust
/// use record_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.0 })
///     }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = update.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate("hello".into())).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     client.delete(note.id).await.unwrap();
/// }
/// ```
///
/// # Operations
///
/// * **Create**: takes the next id from the counter, builds the record with
///   `from_create_params`, runs `on_create`, checks the unique index, then stores it.
/// * **Get**: returns a clone of the record, or `None`.
/// * **List**: returns clones of every record in creation order.
/// * **Update**: runs `on_update` on a copy, checks the unique index (ignoring the record's
///   own keys) and only then replaces the stored record.
/// * **Delete**: runs `on_delete`, then removes the record and its index entries.
///
/// Every committed create, update and delete is published as a [`StoreEvent`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    unique_index: HashMap<UniqueKey, T::Id>,
    events: broadcast::Sender<StoreEvent<T::Id>>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; once it is full, client calls
    /// wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            order: Vec::new(),
            unique_index: HashMap::new(),
            events: events.clone(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender, events);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to each lifecycle hook.
    pub async fn run(mut self, context: T::Context) {
        // "Customer" rather than "customer_records::model::customer::Customer"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let keys = item.unique_keys();
                    if let Some(key) = self.conflicting_key(&keys, None) {
                        warn!(entity_type, %key, "Create rejected, duplicate key");
                        let _ = respond_to.send(Err(conflict(key)));
                        continue;
                    }

                    self.next_id += 1;
                    self.index(&id, keys);
                    self.order.push(id.clone());
                    self.records.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.records.len(), "Created");
                    self.publish(StoreEvent::Created(id));
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.records.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.records.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut candidate = current.clone();
                    if let Err(e) = candidate.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let keys = candidate.unique_keys();
                    if let Some(key) = self.conflicting_key(&keys, Some(&id)) {
                        warn!(entity_type, %id, %key, "Update rejected, duplicate key");
                        let _ = respond_to.send(Err(conflict(key)));
                        continue;
                    }

                    if let Some(previous) = self.records.insert(id.clone(), candidate.clone()) {
                        self.unindex(&previous);
                    }
                    self.index(&id, keys);
                    info!(entity_type, %id, "Updated");
                    self.publish(StoreEvent::Updated(id));
                    let _ = respond_to.send(Ok(candidate));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.records.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    if let Some(removed) = self.records.remove(&id) {
                        self.unindex(&removed);
                    }
                    self.order.retain(|existing| existing != &id);
                    info!(entity_type, %id, size = self.records.len(), "Deleted");
                    self.publish(StoreEvent::Deleted(id));
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }

    /// First key already held by a record other than `owner`.
    fn conflicting_key(&self, keys: &[UniqueKey], owner: Option<&T::Id>) -> Option<UniqueKey> {
        keys.iter()
            .find(|key| {
                self.unique_index
                    .get(*key)
                    .is_some_and(|holder| Some(holder) != owner)
            })
            .cloned()
    }

    fn index(&mut self, id: &T::Id, keys: Vec<UniqueKey>) {
        for key in keys {
            self.unique_index.insert(key, id.clone());
        }
    }

    fn unindex(&mut self, record: &T) {
        for key in record.unique_keys() {
            self.unique_index.remove(&key);
        }
    }

    fn publish(&self, event: StoreEvent<T::Id>) {
        // No subscribers is the normal case for a headless store.
        let _ = self.events.send(event);
    }
}

fn conflict(key: UniqueKey) -> FrameworkError {
    FrameworkError::Conflict {
        field: key.field,
        value: key.value,
    }
}
