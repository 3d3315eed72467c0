//! Error bodies of the customer API.
//!
//! Every failure answers with a status code and a JSON body:
//!
//! ```json
//! { "code": "DUPLICATE_MEMBER_NUMBER", "message": "Member number already in use: 1001" }
//! ```
//!
//! | Error | HTTP Status | Code |
//! |-------|-------------|------|
//! | `SchemaError` | 400 | VALIDATION_ERROR |
//! | `InvalidCustomerId`, missing `_id` | 400 | INVALID_CUSTOMER_ID |
//! | malformed JSON body | 400 | BAD_REQUEST |
//! | `CustomerError::NotFound` | 404 | CUSTOMER_NOT_FOUND |
//! | `CustomerError::DuplicateMemberNumber` | 409 | DUPLICATE_MEMBER_NUMBER |
//! | `CustomerError::ActorCommunicationError` | 500 | INTERNAL_ERROR |

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::customer_actor::CustomerError;
use crate::model::InvalidCustomerId;
use crate::schema::SchemaError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// A machine-readable error code.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Response wrapper that pairs an [`ApiError`] with its status code.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    #[must_use]
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            error: ApiError::new(code, message),
        }
    }

    /// `PUT /customer` without an `_id` in the body.
    #[must_use]
    pub fn missing_id() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "INVALID_CUSTOMER_ID",
            "`_id` is required to replace a customer",
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CustomerError> for ApiErrorResponse {
    fn from(error: CustomerError) -> Self {
        let message = error.to_string();
        match error {
            CustomerError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "CUSTOMER_NOT_FOUND", message)
            }
            CustomerError::DuplicateMemberNumber(_) => {
                Self::new(StatusCode::CONFLICT, "DUPLICATE_MEMBER_NUMBER", message)
            }
            CustomerError::Validation(schema_error) => schema_error.into(),
            CustomerError::ActorCommunicationError(_) => {
                tracing::error!(%message, "Customer store unavailable");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
        }
    }
}

impl From<SchemaError> for ApiErrorResponse {
    fn from(error: SchemaError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", error.to_string())
    }
}

impl From<InvalidCustomerId> for ApiErrorResponse {
    fn from(error: InvalidCustomerId) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_CUSTOMER_ID", error.to_string())
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", rejection.body_text())
    }
}
