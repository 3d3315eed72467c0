//! Customer data structures: the stored record, its id, the typed draft and the wire payload.

pub mod customer;

pub use customer::*;
