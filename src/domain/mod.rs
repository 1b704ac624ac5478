pub mod menu;
pub mod order;
pub mod sale;
pub mod store;
pub mod user;

pub use menu::*;
pub use order::*;
pub use sale::*;
pub use store::*;
pub use user::*;
