//! Starting and stopping the customer store.

pub mod customer_system;

pub use customer_system::*;
