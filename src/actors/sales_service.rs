use crate::actor_framework::FrameworkError;
use crate::clients::MenuClient;
use crate::domain::{Menu, Sale};
use crate::messages::SalesRequest;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SalesError {
    #[error("menu not found: {0}")]
    MenuNotFound(String),
    #[error("quantity must be a positive number, got {0}")]
    InvalidQuantity(u32),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SalesError {
    fn from(e: FrameworkError) -> Self {
        SalesError::ActorCommunicationError(e.to_string())
    }
}

/// The sales ledger actor.
///
/// Sales are a manual ledger typed in by an administrator; they are
/// deliberately not derived from admitted orders. Their only consumer is
/// the best-seller ranking, which counts records per menu.
pub struct SalesService {
    receiver: mpsc::Receiver<SalesRequest>,
    menu_client: MenuClient,
    sales: Vec<Sale>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl SalesService {
    pub fn new(
        buffer_size: usize,
        menu_client: MenuClient,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, mpsc::Sender<SalesRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            menu_client,
            sales: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (service, sender)
    }

    #[instrument(name = "sales_service", skip(self))]
    pub async fn run(mut self) {
        info!("SalesService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SalesRequest::RecordSale { menu_id, quantity, respond_to } => {
                    let result = self.record_sale(menu_id, quantity).await;
                    let _ = respond_to.send(result);
                }
                SalesRequest::CountByMenu { menu_id, respond_to } => {
                    let _ = respond_to.send(Ok(self.count_by_menu(&menu_id)));
                }
                SalesRequest::DeleteByMenu { menu_id, respond_to } => {
                    let before = self.sales.len();
                    self.sales.retain(|s| s.menu_id != menu_id);
                    let removed = before - self.sales.len();
                    info!(menu_id = %menu_id, removed, "Deleted sales for menu");
                    let _ = respond_to.send(Ok(removed));
                }
                SalesRequest::BestSeller { store_id, respond_to } => {
                    let result = self.best_seller(store_id).await;
                    let _ = respond_to.send(result);
                }
                SalesRequest::TotalCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.sales.len()));
                }
            }
        }
        info!("SalesService stopped");
    }

    fn count_by_menu(&self, menu_id: &str) -> usize {
        self.sales.iter().filter(|s| s.menu_id == menu_id).count()
    }

    /// Appends a sale unconditionally: no stock check and no cap check.
    /// Only the menu reference and quantity positivity are validated.
    #[instrument(skip(self))]
    async fn record_sale(&mut self, menu_id: String, quantity: u32) -> Result<Sale, SalesError> {
        debug!("Processing record_sale request");

        match self.menu_client.get_menu(menu_id.clone()).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                warn!("Menu not found");
                return Err(SalesError::MenuNotFound(menu_id));
            }
            Err(e) => {
                error!(error = %e, "Menu lookup failed");
                return Err(SalesError::ActorCommunicationError(e.to_string()));
            }
        }
        if quantity == 0 {
            warn!("Rejected non-positive quantity");
            return Err(SalesError::InvalidQuantity(quantity));
        }

        let sale = Sale {
            id: (self.next_id_fn)(),
            menu_id,
            quantity,
            recorded_at: Utc::now(),
        };
        self.sales.push(sale.clone());
        info!(sale_id = %sale.id, "Sale recorded");
        Ok(sale)
    }

    /// Picks, among the store's menus in listing order, the one with the
    /// strictly greatest number of sale records. A menu with zero sales
    /// never wins, ties keep the first encountered, and a store with no
    /// menus or no sales yields `None`. Recomputed from scratch on every
    /// call.
    #[instrument(skip(self))]
    async fn best_seller(&self, store_id: String) -> Result<Option<Menu>, SalesError> {
        debug!("Computing best seller");

        let menus = self
            .menu_client
            .list_by_store(store_id)
            .await
            .map_err(|e| SalesError::ActorCommunicationError(e.to_string()))?;

        let mut max_sales = 0;
        let mut best_menu = None;
        for menu in menus {
            let count = self.count_by_menu(&menu.id);
            if count > max_sales {
                max_sales = count;
                best_menu = Some(menu);
            }
        }
        Ok(best_menu)
    }
}
