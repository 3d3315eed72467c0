//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, shared by every record type.
//! Record-specific failures travel inside [`FrameworkError::EntityError`].

/// Errors that can occur within the record actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unique constraint violated: {field}={value}")]
    Conflict { field: &'static str, value: String },
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
