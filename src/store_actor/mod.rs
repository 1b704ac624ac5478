//! Store-specific actor wiring: `Entity` impl and error type.

pub mod entity;
pub mod error;

pub use error::*;
