//! Hand-written service actors: collection-shaped state and
//! orchestration that the generic `ResourceActor` does not cover.

pub mod asset_service;
pub mod identity_service;
pub mod order_service;
pub mod sales_service;

pub use asset_service::*;
pub use identity_service::*;
pub use order_service::*;
pub use sales_service::*;
