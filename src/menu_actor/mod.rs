//! Menu-specific actor wiring: stock-reservation actions, `Entity` impl,
//! and error type.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
