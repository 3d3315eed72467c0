use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient, StoreEvent};
use tokio::sync::broadcast;
use tracing::{debug, instrument};

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerDraft, CustomerId};

/// Client for interacting with the Customer actor.
///
/// `get`, `list` and `delete` come from [`ActorClient`]; creating and replacing take a
/// [`CustomerDraft`] that has already been cast through the schema.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, draft))]
    pub async fn create_customer(&self, draft: CustomerDraft) -> Result<Customer, CustomerError> {
        debug!(?draft, "create_customer called");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Overwrites every field of customer `id`.
    #[instrument(skip(self, draft))]
    pub async fn replace_customer(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<Customer, CustomerError> {
        debug!(?draft, "replace_customer called");
        self.inner.update(id, draft).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but an unknown id is an error.
    #[instrument(skip(self))]
    pub async fn find_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.get(id)
            .await?
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent<CustomerId>> {
        self.inner.subscribe()
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::from(e)
    }
}
