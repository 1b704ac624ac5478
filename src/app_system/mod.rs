//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod system;
pub mod tracing;

pub use self::config::*;
pub use self::system::*;
pub use self::tracing::*;
