#[cfg(test)]
mod tests {
    use crate::actor_framework::Entity;
    use crate::actors::{IdentityError, OrderError, OrderService};
    use crate::admin::{AdminError, AuthContext, DashboardSummary, ImageUpload};
    use crate::app_system::{AppConfig, AppSystem};
    use crate::clients::{MenuClient, OrderClient};
    use crate::domain::{Menu, MenuCreate, MenuPatch, Role, StoreCreate, StorePatch};
    use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
    use crate::mock_framework::{create_mock_client, expect_action, expect_get};

    async fn admin_ctx(system: &AppSystem, config: &AppConfig) -> AuthContext {
        let user = system
            .identity_client
            .authenticate(config.admin_username.clone(), config.admin_password.clone())
            .await
            .unwrap()
            .expect("bootstrap admin should exist");
        AuthContext::for_user(&user)
    }

    /// System with one store and one menu, returning (system, ctx,
    /// store_id, menu_id).
    async fn seeded_system(stock: u32, max_order: u32) -> (AppSystem, AuthContext, String, String) {
        let config = AppConfig::default();
        let system = AppSystem::new(&config);
        let ctx = admin_ctx(&system, &config).await;
        let portal = system.admin_portal();

        let store_id = portal
            .create_store(&ctx, StoreCreate { name: "Warung Makan".into() })
            .await
            .unwrap();
        let menu_id = portal
            .create_menu(
                &ctx,
                MenuCreate::new("Nasi Goreng", 15_000.0, store_id.clone())
                    .with_stock(stock)
                    .with_max_order(max_order),
                None,
            )
            .await
            .unwrap();
        (system, ctx, store_id, menu_id)
    }

    async fn stock_of(system: &AppSystem, menu_id: &str) -> u32 {
        system.menu_client.get_menu(menu_id.to_string()).await.unwrap().unwrap().stock
    }

    // --- Order admission ---

    #[tokio::test]
    async fn admission_decrements_stock_and_stops_at_zero() {
        let (system, _ctx, _store_id, menu_id) = seeded_system(10, 100).await;
        let orders = system.order_client.clone();

        let order = orders.place_order(menu_id.clone(), 5).await.unwrap();
        assert_eq!(order.quantity, 5);
        assert_eq!(order.status, "pending");
        assert_eq!(stock_of(&system, &menu_id).await, 5);

        let err = orders.place_order(menu_id.clone(), 8).await.unwrap_err();
        assert_eq!(err, OrderError::InsufficientStock { requested: 8, available: 5 });
        assert_eq!(stock_of(&system, &menu_id).await, 5);

        orders.place_order(menu_id.clone(), 5).await.unwrap();
        assert_eq!(stock_of(&system, &menu_id).await, 0);

        let err = orders.place_order(menu_id.clone(), 1).await.unwrap_err();
        assert_eq!(err, OrderError::InsufficientStock { requested: 1, available: 0 });

        assert_eq!(orders.sum_by_menu(menu_id.clone()).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn cap_is_checked_before_stock_when_both_would_reject() {
        let (system, _ctx, _store_id, menu_id) = seeded_system(10, 12).await;
        let orders = system.order_client.clone();

        orders.place_order(menu_id.clone(), 5).await.unwrap();

        // 5 already ordered; 8 more breaks the cap of 12 and also
        // exceeds the remaining stock of 5. The cap verdict wins.
        let err = orders.place_order(menu_id.clone(), 8).await.unwrap_err();
        assert_eq!(err, OrderError::CapExceeded { max_order: 12 });
        assert_eq!(stock_of(&system, &menu_id).await, 5);

        // Cumulative 10 still within the cap of 12.
        orders.place_order(menu_id.clone(), 5).await.unwrap();
        assert_eq!(stock_of(&system, &menu_id).await, 0);

        // Cap would still allow one more portion; stock does not.
        let err = orders.place_order(menu_id.clone(), 1).await.unwrap_err();
        assert_eq!(err, OrderError::InsufficientStock { requested: 1, available: 0 });
    }

    #[tokio::test]
    async fn cap_is_enforced_regardless_of_available_stock() {
        let (system, _ctx, _store_id, menu_id) = seeded_system(100, 10).await;
        let orders = system.order_client.clone();

        orders.place_order(menu_id.clone(), 9).await.unwrap();

        let err = orders.place_order(menu_id.clone(), 2).await.unwrap_err();
        assert_eq!(err, OrderError::CapExceeded { max_order: 10 });

        // The rejected order left nothing behind.
        assert_eq!(orders.sum_by_menu(menu_id.clone()).await.unwrap(), 9);
        assert_eq!(stock_of(&system, &menu_id).await, 91);
    }

    #[tokio::test]
    async fn concurrent_full_stock_orders_admit_exactly_one() {
        let (system, _ctx, _store_id, menu_id) = seeded_system(5, 100).await;

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let orders = system.order_client.clone();
            let menu_id = menu_id.clone();
            tasks.push(tokio::spawn(async move { orders.place_order(menu_id, 5).await }));
        }

        let mut admitted = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(order) => {
                    admitted += 1;
                    assert_eq!(order.quantity, 5);
                }
                Err(err) => assert_eq!(
                    err,
                    OrderError::InsufficientStock { requested: 5, available: 0 }
                ),
            }
        }
        assert_eq!(admitted, 1);
        assert_eq!(stock_of(&system, &menu_id).await, 0);
        assert_eq!(system.order_client.sum_by_menu(menu_id).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn rejections_happen_in_documented_order_and_leave_no_state() {
        let (system, ctx, _store_id, menu_id) = seeded_system(10, 20).await;
        let orders = system.order_client.clone();

        let err = orders.place_order("menu_99".to_string(), 1).await.unwrap_err();
        assert_eq!(err, OrderError::MenuNotFound("menu_99".to_string()));

        let err = orders.place_order(menu_id.clone(), 0).await.unwrap_err();
        assert_eq!(err, OrderError::InvalidQuantity(0));

        // Flag the menu out of stock; availability outranks the stock
        // level check.
        let portal = system.admin_portal();
        portal
            .update_menu(
                &ctx,
                menu_id.clone(),
                MenuPatch { in_stock: Some(false), ..Default::default() },
                None,
            )
            .await
            .unwrap();
        let err = orders.place_order(menu_id.clone(), 1).await.unwrap_err();
        assert!(matches!(err, OrderError::Unavailable(_)));

        assert_eq!(orders.sum_by_menu(menu_id.clone()).await.unwrap(), 0);
        assert_eq!(stock_of(&system, &menu_id).await, 10);
        assert_eq!(orders.list_by_menu(menu_id).await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn restock_through_admin_edit_allows_new_admissions() {
        let (system, ctx, _store_id, menu_id) = seeded_system(2, 50).await;
        let orders = system.order_client.clone();
        let portal = system.admin_portal();

        orders.place_order(menu_id.clone(), 2).await.unwrap();
        assert_eq!(stock_of(&system, &menu_id).await, 0);

        portal
            .update_menu(
                &ctx,
                menu_id.clone(),
                MenuPatch { stock: Some(7), ..Default::default() },
                None,
            )
            .await
            .unwrap();
        orders.place_order(menu_id.clone(), 3).await.unwrap();
        assert_eq!(stock_of(&system, &menu_id).await, 4);
    }

    // --- Cascade deletion ---

    #[tokio::test]
    async fn deleting_a_menu_removes_its_orders_and_sales() {
        let (system, ctx, _store_id, menu_id) = seeded_system(50, 50).await;
        let portal = system.admin_portal();

        system.order_client.place_order(menu_id.clone(), 3).await.unwrap();
        system.order_client.place_order(menu_id.clone(), 4).await.unwrap();
        portal.record_sale(&ctx, menu_id.clone(), 2).await.unwrap();

        portal.delete_menu(&ctx, menu_id.clone()).await.unwrap();

        assert_eq!(system.menu_client.get_menu(menu_id.clone()).await.unwrap(), None);
        assert_eq!(system.order_client.list_by_menu(menu_id.clone()).await.unwrap(), vec![]);
        assert_eq!(system.order_client.sum_by_menu(menu_id.clone()).await.unwrap(), 0);
        assert_eq!(system.sales_client.count_by_menu(menu_id.clone()).await.unwrap(), 0);

        // A second delete reports the menu as gone.
        let err = portal.delete_menu(&ctx, menu_id.clone()).await.unwrap_err();
        assert_eq!(err, AdminError::Menu(MenuError::NotFound(menu_id)));
    }

    #[tokio::test]
    async fn deleting_a_store_cascades_through_all_its_menus() {
        let (system, ctx, store_id, menu_id) = seeded_system(50, 50).await;
        let portal = system.admin_portal();

        let second_menu = portal
            .create_menu(&ctx, MenuCreate::new("Es Teh", 5_000.0, store_id.clone()), None)
            .await
            .unwrap();
        system.order_client.place_order(second_menu.clone(), 1).await.unwrap();
        portal.record_sale(&ctx, menu_id.clone(), 1).await.unwrap();

        portal.delete_store(&ctx, store_id.clone()).await.unwrap();

        assert_eq!(system.store_client.get_store(store_id).await.unwrap(), None);
        assert_eq!(system.menu_client.list_menus().await.unwrap(), vec![]);
        assert_eq!(system.order_client.list_by_menu(second_menu).await.unwrap(), vec![]);
        assert_eq!(system.sales_client.count_by_menu(menu_id).await.unwrap(), 0);
    }

    // --- Best seller ---

    #[tokio::test]
    async fn best_seller_counts_sale_records_not_quantities() {
        let (system, ctx, store_id, menu_a) = seeded_system(50, 50).await;
        let portal = system.admin_portal();
        let storefront = system.storefront();

        let menu_b = portal
            .create_menu(&ctx, MenuCreate::new("Sate Ayam", 20_000.0, store_id.clone()), None)
            .await
            .unwrap();
        let _menu_c = portal
            .create_menu(&ctx, MenuCreate::new("Es Teh", 5_000.0, store_id.clone()), None)
            .await
            .unwrap();

        // No sales yet: no best seller even though menus exist.
        assert_eq!(system.sales_client.best_seller(store_id.clone()).await.unwrap(), None);

        // A: 3 records, B: 5 records (one of large quantity to show
        // counting, not summing), C: none.
        for _ in 0..3 {
            portal.record_sale(&ctx, menu_a.clone(), 10).await.unwrap();
        }
        for _ in 0..5 {
            portal.record_sale(&ctx, menu_b.clone(), 1).await.unwrap();
        }

        let best = system.sales_client.best_seller(store_id.clone()).await.unwrap().unwrap();
        assert_eq!(best.id, menu_b);

        let detail = storefront.store_detail(store_id).await.unwrap();
        assert_eq!(detail.best_seller.unwrap().id, menu_b);
    }

    #[tokio::test]
    async fn best_seller_tie_keeps_first_menu_in_listing_order() {
        let (system, ctx, store_id, menu_a) = seeded_system(50, 50).await;
        let portal = system.admin_portal();

        let menu_b = portal
            .create_menu(&ctx, MenuCreate::new("Sate Ayam", 20_000.0, store_id.clone()), None)
            .await
            .unwrap();
        for menu in [&menu_a, &menu_b] {
            portal.record_sale(&ctx, menu.clone(), 1).await.unwrap();
            portal.record_sale(&ctx, menu.clone(), 1).await.unwrap();
        }

        let best = system.sales_client.best_seller(store_id).await.unwrap().unwrap();
        assert_eq!(best.id, menu_a);
    }

    #[tokio::test]
    async fn sales_are_recorded_without_touching_stock_or_cap() {
        let (system, ctx, _store_id, menu_id) = seeded_system(5, 5).await;
        let portal = system.admin_portal();

        // Far beyond both stock and cap; the ledger accepts it anyway.
        let sale = portal.record_sale(&ctx, menu_id.clone(), 40).await.unwrap();
        assert_eq!(sale.quantity, 40);
        assert_eq!(stock_of(&system, &menu_id).await, 5);
        assert_eq!(system.order_client.sum_by_menu(menu_id).await.unwrap(), 0);
    }

    // --- Authorization and identity ---

    #[tokio::test]
    async fn non_admin_callers_are_rejected_before_any_mutation() {
        let config = AppConfig::default();
        let system = AppSystem::new(&config);
        let portal = system.admin_portal();

        let user_id = system
            .identity_client
            .register("budi".into(), "rahasia".into(), Role::User)
            .await
            .unwrap();
        let user = system.identity_client.get_user(user_id).await.unwrap().unwrap();
        let ctx = AuthContext::for_user(&user);

        let err = portal
            .create_store(&ctx, StoreCreate { name: "Warung Budi".into() })
            .await
            .unwrap_err();
        assert_eq!(err, AdminError::Unauthorized);
        assert_eq!(system.store_client.list_stores().await.unwrap(), vec![]);

        let err = portal.record_sale(&ctx, "menu_1".into(), 1).await.unwrap_err();
        assert_eq!(err, AdminError::Unauthorized);
    }

    #[tokio::test]
    async fn authentication_compares_credentials_verbatim() {
        let config = AppConfig::default();
        let system = AppSystem::new(&config);

        let user = system
            .identity_client
            .authenticate(config.admin_username.clone(), config.admin_password.clone())
            .await
            .unwrap()
            .unwrap();
        assert!(user.is_admin());

        let miss = system
            .identity_client
            .authenticate(config.admin_username.clone(), "wrong".into())
            .await
            .unwrap();
        assert_eq!(miss, None);

        let err = system
            .identity_client
            .register(config.admin_username, "other".into(), Role::User)
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::AlreadyExists(_)));
    }

    // --- Image uploads ---

    #[tokio::test]
    async fn menu_creation_stores_the_upload_and_keeps_only_a_reference() {
        let (system, ctx, store_id, _menu_id) = seeded_system(10, 10).await;
        let portal = system.admin_portal();

        let bytes = vec![1, 2, 3, 4];
        let menu_id = portal
            .create_menu(
                &ctx,
                MenuCreate::new("Bakso", 12_000.0, store_id),
                Some(ImageUpload { filename: "bakso.jpg".into(), bytes: bytes.clone() }),
            )
            .await
            .unwrap();

        let menu = system.menu_client.get_menu(menu_id).await.unwrap().unwrap();
        let reference = menu.image_url.expect("image reference should be set");
        assert!(reference.starts_with("images/"));
        assert!(reference.ends_with("bakso.jpg"));

        let fetched = system.asset_client.fetch_asset(reference).await.unwrap();
        assert_eq!(fetched, Some(bytes));
    }

    #[tokio::test]
    async fn admin_edits_dashboard_and_storefront_views_line_up() {
        let (system, ctx, store_id, menu_id) = seeded_system(10, 10).await;
        let portal = system.admin_portal();
        let storefront = system.storefront();

        let store = portal
            .update_store(&ctx, store_id.clone(), StorePatch { name: Some("Warung Baru".into()) })
            .await
            .unwrap();
        assert_eq!(store.name, "Warung Baru");

        portal.record_sale(&ctx, menu_id.clone(), 1).await.unwrap();
        let summary = portal.dashboard(&ctx).await.unwrap();
        assert_eq!(
            summary,
            DashboardSummary { total_stores: 1, total_menus: 1, total_sales: 1 }
        );

        let best = storefront.best_sellers().await.unwrap();
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].0.name, "Warung Baru");
        assert_eq!(best[0].1.id, menu_id);

        let order = storefront.place_order(menu_id, 2).await.unwrap();
        let fetched = system.order_client.get_order(order.id.clone()).await.unwrap();
        assert_eq!(fetched, Some(order));
    }

    // --- System lifecycle ---

    #[tokio::test]
    async fn shutdown_stops_all_actors() {
        let (system, _ctx, _store_id, menu_id) = seeded_system(10, 10).await;
        system.order_client.place_order(menu_id, 1).await.unwrap();
        system.shutdown().await.unwrap();
    }

    // --- Admission against a scripted menu actor ---

    #[tokio::test]
    async fn admission_surfaces_a_menu_deleted_between_lookup_and_reservation() {
        let (menu_client_inner, mut menu_rx) = create_mock_client::<Menu>(10);
        let menu_client = MenuClient::new(menu_client_inner);
        let (service, sender) = OrderService::new(10, menu_client, || "order_1".to_string());
        tokio::spawn(service.run());
        let orders = OrderClient::new(sender);

        let order_task =
            tokio::spawn(async move { orders.place_order("menu_1".to_string(), 2).await });

        let (id, responder) = expect_get(&mut menu_rx).await.expect("Expected Menu Get");
        assert_eq!(id, "menu_1");
        let menu = Menu::from_create_params(
            "menu_1".to_string(),
            MenuCreate::new("Nasi Goreng", 15_000.0, "store_1").with_stock(10),
        )
        .unwrap();
        responder.send(Ok(Some(menu))).unwrap();

        // The menu vanishes before the reservation lands.
        let (id, action, responder) =
            expect_action(&mut menu_rx).await.expect("Expected Menu Action");
        assert_eq!(id, "menu_1");
        match action {
            MenuAction::Reserve(qty) => assert_eq!(qty, 2),
            other => panic!("Unexpected action: {:?}", other),
        }
        responder.send(Err(MenuError::NotFound("menu_1".to_string()))).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(result, Err(OrderError::MenuNotFound("menu_1".to_string())));
    }

    #[tokio::test]
    async fn admission_sends_exactly_one_reservation_for_the_requested_quantity() {
        let (menu_client_inner, mut menu_rx) = create_mock_client::<Menu>(10);
        let menu_client = MenuClient::new(menu_client_inner);
        let (service, sender) = OrderService::new(10, menu_client, || "order_1".to_string());
        tokio::spawn(service.run());
        let orders = OrderClient::new(sender);

        let order_task =
            tokio::spawn(async move { orders.place_order("menu_1".to_string(), 4).await });

        let (_, responder) = expect_get(&mut menu_rx).await.expect("Expected Menu Get");
        let menu = Menu::from_create_params(
            "menu_1".to_string(),
            MenuCreate::new("Nasi Goreng", 15_000.0, "store_7").with_stock(10),
        )
        .unwrap();
        responder.send(Ok(Some(menu))).unwrap();

        let (_, action, responder) =
            expect_action(&mut menu_rx).await.expect("Expected Menu Action");
        assert!(matches!(action, MenuAction::Reserve(4)));
        responder.send(Ok(MenuActionResult::Reserved)).unwrap();

        let order = order_task.await.unwrap().unwrap();
        assert_eq!(order.id, "order_1");
        assert_eq!(order.store_id, "store_7");
        assert_eq!(order.quantity, 4);
    }
}
