//! # HTTP API
//!
//! | Method | Path | Handler | Success |
//! |--------|------|---------|---------|
//! | GET | /customer | `list_customers` | 200, array in creation order |
//! | POST | /customer | `create_customer` | 201, the stored customer |
//! | PUT | /customer | `update_customer` | 200, the replaced customer |
//! | GET | /customer/{id} | `get_customer` | 200, the customer |
//! | DELETE | /customer/{id} | `delete_customer` | 204 |
//!
//! Failures carry an [`ApiError`] body; see [`error`] for the status table.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiErrorResponse};

use std::future::Future;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::clients::CustomerClient;
use handlers::{create_customer, delete_customer, get_customer, list_customers, update_customer};

/// Builds the router over a running customer store.
pub fn router(client: CustomerClient) -> Router {
    Router::new()
        .route(
            "/customer",
            get(list_customers).post(create_customer).put(update_customer),
        )
        .route("/customer/{id}", get(get_customer).delete(delete_customer))
        .with_state(client)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, client: CustomerClient, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(client).layer(TraceLayer::new_for_http());
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Customer API listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
