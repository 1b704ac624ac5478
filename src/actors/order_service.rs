use crate::actor_framework::FrameworkError;
use crate::clients::MenuClient;
use crate::domain::{Order, STATUS_PENDING};
use crate::menu_actor::MenuError;
use crate::messages::{OrderRequest, ServiceResponse};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(String),
    #[error("menu not found: {0}")]
    MenuNotFound(String),
    #[error("quantity must be a positive number, got {0}")]
    InvalidQuantity(u32),
    #[error("order would exceed the cap of {max_order} portions for this menu")]
    CapExceeded { max_order: u32 },
    #[error("menu is currently unavailable: {0}")]
    Unavailable(String),
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        OrderError::ActorCommunicationError(e.to_string())
    }
}

/// The order admission actor.
///
/// Owns the append-only order log and performs the whole
/// validate-and-commit sequence for each admission before picking up the
/// next mailbox message. Together with the conditional `Reserve` action
/// inside the menu actor this makes admission atomic per menu: stock can
/// never go negative and the cumulative cap can never be oversubscribed
/// by concurrent requests.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    menu_client: MenuClient,
    orders: Vec<Order>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl OrderService {
    pub fn new(
        buffer_size: usize,
        menu_client: MenuClient,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, mpsc::Sender<OrderRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            menu_client,
            orders: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (service, sender)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::PlaceOrder { menu_id, quantity, respond_to } => {
                    let result = self.admit_order(menu_id, quantity).await;
                    let _ = respond_to.send(result);
                }
                OrderRequest::GetOrder { id, respond_to } => {
                    self.handle_get_order(id, respond_to);
                }
                OrderRequest::ListByMenu { menu_id, respond_to } => {
                    let orders =
                        self.orders.iter().filter(|o| o.menu_id == menu_id).cloned().collect();
                    let _ = respond_to.send(Ok(orders));
                }
                OrderRequest::SumByMenu { menu_id, respond_to } => {
                    let _ = respond_to.send(Ok(self.sum_by_menu(&menu_id)));
                }
                OrderRequest::DeleteByMenu { menu_id, respond_to } => {
                    let before = self.orders.len();
                    self.orders.retain(|o| o.menu_id != menu_id);
                    let removed = before - self.orders.len();
                    info!(menu_id = %menu_id, removed, "Deleted orders for menu");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }
        info!("OrderService stopped");
    }

    fn sum_by_menu(&self, menu_id: &str) -> u32 {
        self.orders
            .iter()
            .filter(|o| o.menu_id == menu_id)
            .fold(0u32, |acc, o| acc.saturating_add(o.quantity))
    }

    /// The admission sequence, first failing check wins:
    /// menu lookup, quantity positivity, cumulative cap, availability
    /// flag, stock level. Only then is the order committed and stock
    /// decremented. A rejected admission leaves no partial state behind.
    #[instrument(skip(self))]
    async fn admit_order(&mut self, menu_id: String, quantity: u32) -> Result<Order, OrderError> {
        info!("Processing order admission");

        let menu = match self.menu_client.get_menu(menu_id.clone()).await {
            Ok(Some(menu)) => menu,
            Ok(None) => {
                warn!("Menu not found");
                return Err(OrderError::MenuNotFound(menu_id));
            }
            Err(e) => {
                error!(error = %e, "Menu lookup failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        };

        if quantity == 0 {
            warn!("Rejected non-positive quantity");
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let total_ordered = self.sum_by_menu(&menu_id);
        if total_ordered.saturating_add(quantity) > menu.max_order {
            warn!(total_ordered, max_order = menu.max_order, "Cumulative cap exceeded");
            return Err(OrderError::CapExceeded { max_order: menu.max_order });
        }

        // Availability and stock are checked atomically with the
        // decrement, inside the menu actor.
        match self.menu_client.reserve_stock(menu_id.clone(), quantity).await {
            Ok(()) => debug!("Stock reserved"),
            Err(MenuError::Unavailable(name)) => {
                warn!("Menu unavailable");
                return Err(OrderError::Unavailable(name));
            }
            Err(MenuError::InsufficientStock { requested, available }) => {
                warn!(requested, available, "Insufficient stock");
                return Err(OrderError::InsufficientStock { requested, available });
            }
            Err(MenuError::NotFound(id)) => {
                // Menu deleted between the lookup and the reservation.
                warn!("Menu disappeared during admission");
                return Err(OrderError::MenuNotFound(id));
            }
            Err(e) => {
                error!(error = %e, "Stock reservation failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        }

        let order = Order {
            id: (self.next_id_fn)(),
            store_id: menu.store_id,
            menu_id,
            quantity,
            status: STATUS_PENDING.to_string(),
        };
        self.orders.push(order.clone());
        info!(order_id = %order.id, "Order admitted");
        Ok(order)
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_get_order(&self, id: String, respond_to: ServiceResponse<Option<Order>, OrderError>) {
        debug!("Processing get_order request");
        let order = self.orders.iter().find(|o| o.id == id).cloned();
        let _ = respond_to.send(Ok(order));
    }
}
