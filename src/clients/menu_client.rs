use crate::actor_framework::ResourceClient;
use crate::domain::Menu;
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Menu>,
}

impl_basic_client!(MenuClient, Menu, MenuError, menu);

impl MenuClient {
    /// All menus belonging to a store, in creation order.
    #[instrument(skip(self))]
    pub async fn list_by_store(&self, store_id: String) -> Result<Vec<Menu>, MenuError> {
        debug!("Sending request");
        let menus = self.inner.list().await?;
        Ok(menus.into_iter().filter(|m| m.store_id == store_id).collect())
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn check_stock(&self, id: String) -> Result<u32, MenuError> {
        debug!("Sending request");
        match self.inner.perform_action(id, MenuAction::CheckStock).await {
            Ok(MenuActionResult::StockLevel(level)) => Ok(level),
            Ok(other) => Err(MenuError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
            Err(e) => Err(e),
        }
    }

    /// Atomically checks availability and decrements stock inside the
    /// menu actor.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: String, quantity: u32) -> Result<(), MenuError> {
        debug!("Sending request");
        match self.inner.perform_action(id, MenuAction::Reserve(quantity)).await {
            Ok(MenuActionResult::Reserved) => Ok(()),
            Ok(other) => Err(MenuError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
            Err(e) => Err(e),
        }
    }
}
