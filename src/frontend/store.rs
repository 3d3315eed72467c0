//! Client-side list of customers.
//!
//! The store holds the last list fetched from the API and publishes it on a
//! [`watch`] channel. Writes never patch the list locally: after a successful write the
//! caller reloads it with [`CustomerListStore::refresh`], so what subscribers see is always
//! what the server returned. A failed reload leaves the previous list in place.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, instrument};

use super::transport::{CustomerApi, TransportError};
use crate::model::{Customer, CustomerId, CustomerPayload};

pub struct CustomerListStore {
    api: Arc<dyn CustomerApi>,
    customers: watch::Sender<Vec<Customer>>,
}

impl CustomerListStore {
    pub fn new(api: Arc<dyn CustomerApi>) -> Self {
        let (customers, _) = watch::channel(Vec::new());
        Self { api, customers }
    }

    /// Receives the full list after every load.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Customer>> {
        self.customers.subscribe()
    }

    /// The list as last loaded.
    pub fn list(&self) -> Vec<Customer> {
        self.customers.borrow().clone()
    }

    /// Replaces the list with a fresh copy from the API.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<(), TransportError> {
        let customers = self.api.list().await?;
        debug!(count = customers.len(), "Customer list loaded");
        self.customers.send_replace(customers);
        Ok(())
    }

    /// Fetches one customer straight from the API, bypassing the list.
    #[instrument(skip(self))]
    pub async fn get(&self, id: CustomerId) -> Result<Customer, TransportError> {
        self.api.get(id).await
    }

    /// POSTs `payload`. The list is left as it was.
    pub async fn create(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        self.api.create(payload).await
    }

    /// PUTs `payload`. The list is left as it was.
    pub async fn update(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        self.api.update(payload).await
    }

    /// DELETEs customer `id`. The list is left as it was.
    pub async fn delete(&self, id: CustomerId) -> Result<(), TransportError> {
        self.api.delete(id).await
    }
}
