//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type (a customer, for instance) implements
//! to be kept by the generic [`ResourceActor`](crate::ResourceActor). It names the associated
//! types for the id, the create and update payloads, the injected context and the error, and
//! provides the lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Uniqueness
//! Records may declare unique keys through [`ActorEntity::unique_keys`]. The actor keeps an
//! index of every key held by a stored record and refuses a create or an update that would
//! make two records share one. Records without unique fields keep the default (no keys).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A field value that must not be shared by two records of the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueKey {
    /// Name of the constrained field, as it appears on the wire.
    pub field: &'static str,
    /// Canonical string form of the value.
    pub value: String,
}

impl UniqueKey {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl Display for UniqueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can await other actors. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`, which lets
/// dependencies be wired after the actor and its client exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data applied to an existing record.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// One error enum per record type rather than one per operation: clients match a single
    /// type whatever they called.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the generated ID and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Keys that must stay unique across every stored record of this type.
    fn unique_keys(&self) -> Vec<UniqueKey> {
        Vec::new()
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on a working copy of the record when an update request is received.
    /// The copy only replaces the stored record if the hook and the unique index accept it.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
