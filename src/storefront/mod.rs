//! Customer-facing surface: unauthenticated browsing and order
//! placement.

use crate::actors::{OrderError, SalesError};
use crate::clients::{MenuClient, OrderClient, SalesClient, StoreClient};
use crate::domain::{Menu, Order, Store};
use crate::menu_actor::MenuError;
use crate::store_actor::StoreError;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Menu(#[from] MenuError),
    #[error("{0}")]
    Sales(#[from] SalesError),
}

/// A store page: the store itself, its menus in listing order, and the
/// current best seller if one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDetail {
    pub store: Store,
    pub menus: Vec<Menu>,
    pub best_seller: Option<Menu>,
}

#[derive(Clone)]
pub struct Storefront {
    store_client: StoreClient,
    menu_client: MenuClient,
    order_client: OrderClient,
    sales_client: SalesClient,
}

impl Storefront {
    pub fn new(
        store_client: StoreClient,
        menu_client: MenuClient,
        order_client: OrderClient,
        sales_client: SalesClient,
    ) -> Self {
        Self { store_client, menu_client, order_client, sales_client }
    }

    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<Store>, StorefrontError> {
        debug!("Listing stores");
        Ok(self.store_client.list_stores().await?)
    }

    #[instrument(skip(self))]
    pub async fn store_detail(&self, store_id: String) -> Result<StoreDetail, StorefrontError> {
        debug!("Fetching store detail");
        let store = self
            .store_client
            .get_store(store_id.clone())
            .await?
            .ok_or_else(|| StoreError::NotFound(store_id.clone()))?;
        let menus = self.menu_client.list_by_store(store_id.clone()).await?;
        let best_seller = self.sales_client.best_seller(store_id).await?;
        Ok(StoreDetail { store, menus, best_seller })
    }

    /// Every store's best seller, stores without one omitted.
    #[instrument(skip(self))]
    pub async fn best_sellers(&self) -> Result<Vec<(Store, Menu)>, StorefrontError> {
        debug!("Collecting best sellers");
        let mut result = Vec::new();
        for store in self.store_client.list_stores().await? {
            if let Some(menu) = self.sales_client.best_seller(store.id.clone()).await? {
                result.push((store, menu));
            }
        }
        Ok(result)
    }

    /// Order placement pass-through. Admission errors come back typed so
    /// the boundary can render the right message.
    #[instrument(skip(self))]
    pub async fn place_order(&self, menu_id: String, quantity: u32) -> Result<Order, OrderError> {
        self.order_client.place_order(menu_id, quantity).await
    }
}
