//! Handlers for the `/customer` resource.
//!
//! Each handler casts its input, makes one call on the [`CustomerClient`] and turns the
//! answer into JSON. Failures become an [`ApiErrorResponse`] through `?`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use record_actor::ActorClient;
use tracing::info;

use super::error::ApiErrorResponse;
use crate::clients::CustomerClient;
use crate::model::{Customer, CustomerId, CustomerPayload};
use crate::schema;

/// GET /customer - every customer, in creation order.
pub async fn list_customers(
    State(client): State<CustomerClient>,
) -> Result<Json<Vec<Customer>>, ApiErrorResponse> {
    Ok(Json(client.list().await?))
}

/// GET /customer/{id}
///
/// - `200 OK` - the customer
/// - `400 Bad Request` - `id` is not a customer id
/// - `404 Not Found` - no such customer
pub async fn get_customer(
    State(client): State<CustomerClient>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiErrorResponse> {
    let id: CustomerId = id.parse()?;
    Ok(Json(client.find_customer(id).await?))
}

/// POST /customer
///
/// An `_id` in the body is ignored; the store assigns one.
///
/// - `201 Created` - the stored customer
/// - `400 Bad Request` - schema violation
/// - `409 Conflict` - `memberNumber` already in use
pub async fn create_customer(
    State(client): State<CustomerClient>,
    body: Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiErrorResponse> {
    let Json(payload) = body?;
    let draft = schema::cast(&payload)?;
    let customer = client.create_customer(draft).await?;
    info!(id = %customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customer
///
/// Replaces every field of the customer named by the body's `_id`.
///
/// - `200 OK` - the replaced customer
/// - `400 Bad Request` - missing or malformed `_id`, schema violation
/// - `404 Not Found` - no such customer
/// - `409 Conflict` - `memberNumber` held by another customer
pub async fn update_customer(
    State(client): State<CustomerClient>,
    body: Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<Json<Customer>, ApiErrorResponse> {
    let Json(payload) = body?;
    let id: CustomerId = payload
        .id
        .as_deref()
        .ok_or_else(ApiErrorResponse::missing_id)?
        .parse()?;
    let draft = schema::cast(&payload)?;
    let customer = client.replace_customer(id, draft).await?;
    info!(%id, "Customer replaced");
    Ok(Json(customer))
}

/// DELETE /customer/{id}
///
/// - `204 No Content` - removed
/// - `400 Bad Request` - `id` is not a customer id
/// - `404 Not Found` - no such customer
pub async fn delete_customer(
    State(client): State<CustomerClient>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let id: CustomerId = id.parse()?;
    client.delete(id).await?;
    info!(%id, "Customer deleted");
    Ok(StatusCode::NO_CONTENT)
}
