//! Customer record store: the [`Customer`] entity kept by a
//! [`ResourceActor`](record_actor::ResourceActor).

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use record_actor::ResourceActor;

/// Creates a new Customer actor and its client.
///
/// Ids are handed out by the actor, starting at 1.
pub fn new() -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = CustomerClient::new(generic_client);

    (actor, client)
}
