use crate::actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("menu not found: {0}")]
    NotFound(String),
    #[error("menu is currently unavailable: {0}")]
    Unavailable(String),
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("price must not be negative, got {0}")]
    InvalidPrice(f64),
    #[error("max_order must be positive")]
    InvalidMaxOrder,
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        MenuError::ActorCommunicationError(e.to_string())
    }
}
