use crate::actors::OrderError;
use crate::domain::Order;
use crate::messages::OrderRequest;
use tokio::sync::mpsc;

/// Client for the order admission actor.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }
}

client_method!(OrderClient => fn place_order(menu_id: String, quantity: u32) -> Order as OrderRequest::PlaceOrder, Error = OrderError);
client_method!(OrderClient => fn get_order(id: String) -> Option<Order> as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn list_by_menu(menu_id: String) -> Vec<Order> as OrderRequest::ListByMenu, Error = OrderError);
client_method!(OrderClient => fn sum_by_menu(menu_id: String) -> u32 as OrderRequest::SumByMenu, Error = OrderError);
client_method!(OrderClient => fn delete_by_menu(menu_id: String) -> usize as OrderRequest::DeleteByMenu, Error = OrderError);
