//! Multi-vendor food ordering: stores list menus, customers place orders
//! bounded by stock and a cumulative per-menu cap, an administrator
//! records sales that feed a per-store best-seller ranking.
//!
//! Every piece of mutable state lives inside an actor; the order
//! admission actor serializes the validate-and-commit sequence so stock
//! can never go negative and the cap can never be oversubscribed.

mod actor_framework;
mod actors;
mod admin;
mod app_system;
mod clients;
mod domain;
mod menu_actor;
mod messages;
mod store_actor;
mod storefront;

#[cfg(test)]
mod mock_framework;

#[cfg(test)]
mod integration_tests;

use crate::actors::OrderError;
use crate::admin::{AuthContext, ImageUpload};
use crate::app_system::{setup_tracing, AppConfig, AppSystem};
use crate::domain::{MenuCreate, StoreCreate};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env();
    info!("Starting food ordering system");

    let system = AppSystem::new(&config);

    // Authenticate the bootstrap admin and derive the caller context the
    // admin surface requires.
    let admin_user = system
        .identity_client
        .authenticate(config.admin_username.clone(), config.admin_password.clone())
        .await
        .map_err(|e| e.to_string())?
        .ok_or("bootstrap admin login failed")?;
    let ctx = AuthContext::for_user(&admin_user);
    info!(username = %ctx.username, "Admin authenticated");

    // Scope the surfaces so their client clones are dropped before
    // shutdown.
    {
        let portal = system.admin_portal();
        let storefront = system.storefront();

        let span = tracing::info_span!("catalog_setup");
        let menu_id = async {
            let store_id = portal
                .create_store(&ctx, StoreCreate { name: "Warung Bu Galuh".into() })
                .await
                .map_err(|e| e.to_string())?;
            info!(store_id = %store_id, "Store created");

            let image = ImageUpload {
                filename: "nasi_goreng.jpg".into(),
                bytes: vec![0xff, 0xd8, 0xff, 0xe0],
            };
            let menu_id = portal
                .create_menu(
                    &ctx,
                    MenuCreate::new("Nasi Goreng", 15_000.0, store_id.clone())
                        .with_stock(10)
                        .with_max_order(12),
                    Some(image),
                )
                .await
                .map_err(|e| e.to_string())?;
            info!(menu_id = %menu_id, "Menu created");
            Ok::<String, String>(menu_id)
        }
        .instrument(span)
        .await?;

        let span = tracing::info_span!("order_flow");
        async {
            let order = storefront
                .place_order(menu_id.clone(), 5)
                .await
                .map_err(|e| e.to_string())?;
            info!(order_id = %order.id, "Order admitted");

            // A second oversized order is expected to bounce off the
            // cumulative cap.
            match storefront.place_order(menu_id.clone(), 8).await {
                Ok(order) => error!(order_id = %order.id, "Oversized order unexpectedly admitted"),
                Err(OrderError::CapExceeded { max_order }) => {
                    warn!(max_order, "Order rejected as expected")
                }
                Err(e) => error!(error = %e, "Order rejected for an unexpected reason"),
            }
            Ok::<(), String>(())
        }
        .instrument(span)
        .await?;

        let span = tracing::info_span!("sales_ledger");
        async {
            for _ in 0..3 {
                portal.record_sale(&ctx, menu_id.clone(), 1).await.map_err(|e| e.to_string())?;
            }
            let stores = storefront.list_stores().await.map_err(|e| e.to_string())?;
            for store in stores {
                let detail =
                    storefront.store_detail(store.id.clone()).await.map_err(|e| e.to_string())?;
                match detail.best_seller {
                    Some(menu) => info!(store = %store.name, best_seller = %menu.name, "Best seller"),
                    None => info!(store = %store.name, "No best seller yet"),
                }
            }
            let summary = portal.dashboard(&ctx).await.map_err(|e| e.to_string())?;
            info!(
                total_stores = summary.total_stores,
                total_menus = summary.total_menus,
                total_sales = summary.total_sales,
                "Dashboard"
            );
            Ok::<(), String>(())
        }
        .instrument(span)
        .await?;
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
