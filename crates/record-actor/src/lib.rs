//! # Record Actor
//!
//! Building blocks for keeping a collection of records inside a Tokio actor: one task owns
//! the records and answers CRUD requests sent over a channel, so the records themselves need
//! no locks.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`ActorEntity`]) - the record type, its payloads, hooks and unique keys
//! 2. **Runtime Layer** ([`ResourceActor`]) - request processing, ordering, unique index, events
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async handles
//!
//! ## Operations
//!
//! Every store answers the same five requests: create, get, list (creation order), update
//! and delete. Updates replace the stored record only once the record's own hook and the
//! unique index accept the new value, so a rejected write never leaves a half-applied record
//! behind.
//!
//! ## Change Notifications
//!
//! Each committed mutation is broadcast as a [`StoreEvent`]. Anything that mirrors the store
//! (a cache, a view) subscribes with [`ResourceClient::subscribe`] instead of polling.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor, so actors that
//! depend on one another can all be created first and wired when they start.
//!
//! ## Testing
//!
//! See the [`mock`] module for a client that answers from queued expectations.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, UniqueKey};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, StoreEvent};
