//! HTTP access to the customer API, as seen from the client side.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument};

use crate::model::{Customer, CustomerId, CustomerPayload};

/// Why a request to the customer API did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status. The body is not inspected.
    #[error("server answered {0}")]
    Status(u16),
    /// The request never completed or the answer could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The five calls the customer screens make.
///
/// [`HttpCustomerApi`] is the real implementation; tests substitute their own.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, TransportError>;
    async fn get(&self, id: CustomerId) -> Result<Customer, TransportError>;
    async fn create(&self, payload: &CustomerPayload) -> Result<Customer, TransportError>;
    /// Replaces the customer named by `payload.id`.
    async fn update(&self, payload: &CustomerPayload) -> Result<Customer, TransportError>;
    async fn delete(&self, id: CustomerId) -> Result<(), TransportError>;
}

/// `reqwest` implementation of [`CustomerApi`].
///
/// No timeout is set: a request that hangs blocks the interaction that issued it.
#[derive(Debug, Clone)]
pub struct HttpCustomerApi {
    client: Client,
    base_url: String,
}

impl HttpCustomerApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection(&self) -> String {
        format!("{}/customer", self.base_url)
    }

    fn item(&self, id: CustomerId) -> String {
        format!("{}/customer/{}", self.base_url, id)
    }
}

/// Any non-2xx status becomes [`TransportError::Status`].
fn check(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        debug!(status = status.as_u16(), "Request rejected");
        Err(TransportError::Status(status.as_u16()))
    }
}

#[async_trait]
impl CustomerApi for HttpCustomerApi {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Customer>, TransportError> {
        let response = self.client.get(self.collection()).send().await?;
        Ok(check(response)?.json().await?)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: CustomerId) -> Result<Customer, TransportError> {
        let response = self.client.get(self.item(id)).send().await?;
        Ok(check(response)?.json().await?)
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        debug!(?payload, "POST");
        let response = self
            .client
            .post(self.collection())
            .json(payload)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    #[instrument(skip(self, payload))]
    async fn update(&self, payload: &CustomerPayload) -> Result<Customer, TransportError> {
        debug!(?payload, "PUT");
        let response = self
            .client
            .put(self.collection())
            .json(payload)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CustomerId) -> Result<(), TransportError> {
        let response = self.client.delete(self.item(id)).send().await?;
        check(response)?;
        Ok(())
    }
}
