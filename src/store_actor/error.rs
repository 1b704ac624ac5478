use crate::actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("store not found: {0}")]
    NotFound(String),
    #[error("store validation error: {0}")]
    ValidationError(String),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        StoreError::ActorCommunicationError(e.to_string())
    }
}
