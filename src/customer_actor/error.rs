//! Error types for the Customer actor.

use record_actor::FrameworkError;
use thiserror::Error;

use crate::schema::SchemaError;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// No customer carries the requested id.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Another customer already holds this member number.
    #[error("Member number already in use: {0}")]
    DuplicateMemberNumber(String),

    /// The customer data does not satisfy the schema.
    #[error("Customer validation error: {0}")]
    Validation(#[from] SchemaError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CustomerError {
    fn from(msg: String) -> Self {
        CustomerError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            FrameworkError::Conflict { value, .. } => CustomerError::DuplicateMemberNumber(value),
            // Hooks only ever fail with a CustomerError.
            FrameworkError::EntityError(inner) => match inner.downcast::<CustomerError>() {
                Ok(customer_error) => *customer_error,
                Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
            },
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}
