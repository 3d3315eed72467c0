//! Read-only view of a single customer. Always fetched fresh through
//! [`CustomerListStore::get`]; the list itself is never loaded or consulted.

use std::sync::Arc;

use tracing::instrument;

use super::localized_dob;
use super::store::CustomerListStore;
use super::transport::{CustomerApi, TransportError};
use crate::model::{Customer, CustomerId};

#[derive(Debug, thiserror::Error)]
pub enum DetailError {
    #[error("customer {0} not found")]
    NotFound(CustomerId),
    #[error("failed to load customer: {0}")]
    Status(u16),
    #[error("failed to load customer: {0}")]
    Transport(reqwest::Error),
}

impl From<TransportError> for DetailError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Status(status) => DetailError::Status(status),
            TransportError::Http(e) => DetailError::Transport(e),
        }
    }
}

pub struct CustomerDetail {
    store: CustomerListStore,
}

impl CustomerDetail {
    pub fn new(api: Arc<dyn CustomerApi>) -> Self {
        Self {
            store: CustomerListStore::new(api),
        }
    }

    #[instrument(skip(self))]
    pub async fn load(&self, id: CustomerId) -> Result<Customer, DetailError> {
        match self.store.get(id).await {
            Err(TransportError::Status(404)) => Err(DetailError::NotFound(id)),
            other => Ok(other?),
        }
    }

    /// Name as a heading, then one labelled line per field.
    pub fn render(customer: &Customer, date_format: &str) -> String {
        format!(
            "{}\nDate of Birth: {}\nMember Number: {}\nInterests: {}\n",
            customer.name,
            localized_dob(customer.dob, date_format),
            customer.member_number,
            customer.interests,
        )
    }
}
