#[macro_use]
mod macros;

pub mod asset_client;
pub mod identity_client;
pub mod menu_client;
pub mod order_client;
pub mod sales_client;
pub mod store_client;

pub use asset_client::AssetClient;
pub use identity_client::IdentityClient;
pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use sales_client::SalesClient;
pub use store_client::StoreClient;
