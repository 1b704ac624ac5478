use super::config::AppConfig;
use crate::actor_framework::ResourceActor;
use crate::actors::{AssetService, IdentityService, OrderService, SalesService};
use crate::admin::AdminPortal;
use crate::clients::{
    AssetClient, IdentityClient, MenuClient, OrderClient, SalesClient, StoreClient,
};
use crate::domain::{Menu, Store};
use crate::storefront::Storefront;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and
/// handling shutdown.
pub struct AppSystem {
    pub store_client: StoreClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub sales_client: SalesClient,
    pub identity_client: IdentityClient,
    pub asset_client: AssetClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AppSystem {
    pub fn new(config: &AppConfig) -> Self {
        let buffer = config.channel_buffer;

        // 1. Resource actors for the plain CRUD entities
        let (store_actor, store_resource_client) =
            ResourceActor::<Store>::new(buffer, sequential_ids("store"));
        let store_client = StoreClient::new(store_resource_client);
        let store_handle = tokio::spawn(store_actor.run());

        let (menu_actor, menu_resource_client) =
            ResourceActor::<Menu>::new(buffer, sequential_ids("menu"));
        let menu_client = MenuClient::new(menu_resource_client);
        let menu_handle = tokio::spawn(menu_actor.run());

        // 2. Hand-written service actors
        let (order_service, order_sender) =
            OrderService::new(buffer, menu_client.clone(), sequential_ids("order"));
        let order_client = OrderClient::new(order_sender);
        let order_handle = tokio::spawn(order_service.run());

        let (sales_service, sales_sender) =
            SalesService::new(buffer, menu_client.clone(), sequential_ids("sale"));
        let sales_client = SalesClient::new(sales_sender);
        let sales_handle = tokio::spawn(sales_service.run());

        let (identity_service, identity_sender) =
            IdentityService::new(buffer, config.bootstrap_admin(), sequential_ids("user"));
        let identity_client = IdentityClient::new(identity_sender);
        let identity_handle = tokio::spawn(identity_service.run());

        let (asset_service, asset_sender) = AssetService::new(buffer);
        let asset_client = AssetClient::new(asset_sender);
        let asset_handle = tokio::spawn(asset_service.run());

        Self {
            store_client,
            menu_client,
            order_client,
            sales_client,
            identity_client,
            asset_client,
            handles: vec![
                store_handle,
                menu_handle,
                order_handle,
                sales_handle,
                identity_handle,
                asset_handle,
            ],
        }
    }

    /// Administrative surface over this system's actors.
    pub fn admin_portal(&self) -> AdminPortal {
        AdminPortal::new(
            self.store_client.clone(),
            self.menu_client.clone(),
            self.order_client.clone(),
            self.sales_client.clone(),
            self.asset_client.clone(),
        )
    }

    /// Customer-facing surface over this system's actors.
    pub fn storefront(&self) -> Storefront {
        Storefront::new(
            self.store_client.clone(),
            self.menu_client.clone(),
            self.order_client.clone(),
            self.sales_client.clone(),
        )
    }

    /// Shuts the system down by dropping every client (closing the
    /// mailboxes) and waiting for the actor tasks to finish. Any portal
    /// or storefront handed out by this system must be dropped first,
    /// since they hold client clones that keep mailboxes open.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.sales_client);
        drop(self.identity_client);
        drop(self.asset_client);
        drop(self.menu_client);
        drop(self.store_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
