//! Type-safe wrappers around [`ResourceClient`](record_actor::ResourceClient).

pub mod customer_client;

pub use customer_client::*;
