//! Administrative surface: store/menu CRUD with cascade deletes, sale
//! recording, and dashboard totals.
//!
//! Authorization is evaluated here, once, as an explicit predicate on a
//! caller-supplied [`AuthContext`]; the actors themselves never look at
//! roles or any ambient session state.

use crate::actors::{AssetError, OrderError, SalesError};
use crate::clients::{AssetClient, MenuClient, OrderClient, SalesClient, StoreClient};
use crate::domain::{Menu, MenuCreate, MenuPatch, Role, Sale, Store, StoreCreate, StorePatch, User};
use crate::menu_actor::MenuError;
use crate::store_actor::StoreError;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    #[error("access denied: administrator role required")]
    Unauthorized,
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Menu(#[from] MenuError),
    #[error("{0}")]
    Order(#[from] OrderError),
    #[error("{0}")]
    Sales(#[from] SalesError),
    #[error("{0}")]
    Asset(#[from] AssetError),
}

/// Pre-authorized caller identity, derived from an authenticated user at
/// the request boundary and passed in explicitly.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl AuthContext {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// An uploaded image, as received at the boundary.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Headline figures for the admin landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_stores: usize,
    pub total_menus: usize,
    pub total_sales: usize,
}

pub struct AdminPortal {
    store_client: StoreClient,
    menu_client: MenuClient,
    order_client: OrderClient,
    sales_client: SalesClient,
    asset_client: AssetClient,
}

impl AdminPortal {
    pub fn new(
        store_client: StoreClient,
        menu_client: MenuClient,
        order_client: OrderClient,
        sales_client: SalesClient,
        asset_client: AssetClient,
    ) -> Self {
        Self { store_client, menu_client, order_client, sales_client, asset_client }
    }

    fn authorize(&self, ctx: &AuthContext) -> Result<(), AdminError> {
        if ctx.is_admin() {
            Ok(())
        } else {
            warn!(username = %ctx.username, "Access denied");
            Err(AdminError::Unauthorized)
        }
    }

    // --- Stores ---

    #[instrument(skip(self, ctx), fields(username = %ctx.username))]
    pub async fn create_store(
        &self,
        ctx: &AuthContext,
        params: StoreCreate,
    ) -> Result<String, AdminError> {
        self.authorize(ctx)?;
        Ok(self.store_client.create_store(params).await?)
    }

    #[instrument(skip(self, ctx), fields(username = %ctx.username))]
    pub async fn update_store(
        &self,
        ctx: &AuthContext,
        id: String,
        patch: StorePatch,
    ) -> Result<Store, AdminError> {
        self.authorize(ctx)?;
        Ok(self.store_client.update_store(id, patch).await?)
    }

    /// Deletes a store and everything hanging off it: each owned menu is
    /// removed through the same cascade as [`delete_menu`], so no order
    /// or sale is left pointing at a dead menu.
    ///
    /// [`delete_menu`]: AdminPortal::delete_menu
    #[instrument(skip(self, ctx), fields(username = %ctx.username))]
    pub async fn delete_store(&self, ctx: &AuthContext, id: String) -> Result<(), AdminError> {
        self.authorize(ctx)?;
        if self.store_client.get_store(id.clone()).await?.is_none() {
            return Err(StoreError::NotFound(id).into());
        }
        let menus = self.menu_client.list_by_store(id.clone()).await?;
        for menu in menus {
            self.cascade_delete_menu(menu.id).await?;
        }
        self.store_client.delete_store(id.clone()).await?;
        info!(store_id = %id, "Store deleted");
        Ok(())
    }

    // --- Menus ---

    #[instrument(skip(self, ctx, params, image), fields(username = %ctx.username))]
    pub async fn create_menu(
        &self,
        ctx: &AuthContext,
        mut params: MenuCreate,
        image: Option<ImageUpload>,
    ) -> Result<String, AdminError> {
        self.authorize(ctx)?;
        if self.store_client.get_store(params.store_id.clone()).await?.is_none() {
            return Err(StoreError::NotFound(params.store_id).into());
        }
        if let Some(upload) = image {
            let reference = self.asset_client.store_asset(upload.filename, upload.bytes).await?;
            params.image_url = Some(reference);
        }
        let id = self.menu_client.create_menu(params).await?;
        info!(menu_id = %id, "Menu created");
        Ok(id)
    }

    #[instrument(skip(self, ctx, patch, image), fields(username = %ctx.username))]
    pub async fn update_menu(
        &self,
        ctx: &AuthContext,
        id: String,
        mut patch: MenuPatch,
        image: Option<ImageUpload>,
    ) -> Result<Menu, AdminError> {
        self.authorize(ctx)?;
        if let Some(upload) = image {
            let reference = self.asset_client.store_asset(upload.filename, upload.bytes).await?;
            patch.image_url = Some(reference);
        }
        Ok(self.menu_client.update_menu(id, patch).await?)
    }

    /// Deletes a menu, first removing every order and sale that
    /// references it so no dangling reference survives.
    #[instrument(skip(self, ctx), fields(username = %ctx.username))]
    pub async fn delete_menu(&self, ctx: &AuthContext, id: String) -> Result<(), AdminError> {
        self.authorize(ctx)?;
        if self.menu_client.get_menu(id.clone()).await?.is_none() {
            return Err(MenuError::NotFound(id).into());
        }
        self.cascade_delete_menu(id).await
    }

    async fn cascade_delete_menu(&self, id: String) -> Result<(), AdminError> {
        self.order_client.delete_by_menu(id.clone()).await?;
        self.sales_client.delete_by_menu(id.clone()).await?;
        self.menu_client.delete_menu(id.clone()).await?;
        info!(menu_id = %id, "Menu deleted with dependent orders and sales");
        Ok(())
    }

    // --- Sales ---

    #[instrument(skip(self, ctx), fields(username = %ctx.username))]
    pub async fn record_sale(
        &self,
        ctx: &AuthContext,
        menu_id: String,
        quantity: u32,
    ) -> Result<Sale, AdminError> {
        self.authorize(ctx)?;
        Ok(self.sales_client.record_sale(menu_id, quantity).await?)
    }

    // --- Dashboard ---

    #[instrument(skip(self, ctx), fields(username = %ctx.username))]
    pub async fn dashboard(&self, ctx: &AuthContext) -> Result<DashboardSummary, AdminError> {
        self.authorize(ctx)?;
        let total_stores = self.store_client.list_stores().await?.len();
        let total_menus = self.menu_client.list_menus().await?.len();
        let total_sales = self.sales_client.total_count().await?;
        Ok(DashboardSummary { total_stores, total_menus, total_sales })
    }
}
