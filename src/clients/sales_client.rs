use crate::actors::SalesError;
use crate::domain::{Menu, Sale};
use crate::messages::SalesRequest;
use tokio::sync::mpsc;

/// Client for the sales ledger actor.
#[derive(Clone)]
pub struct SalesClient {
    sender: mpsc::Sender<SalesRequest>,
}

impl SalesClient {
    pub fn new(sender: mpsc::Sender<SalesRequest>) -> Self {
        Self { sender }
    }
}

client_method!(SalesClient => fn record_sale(menu_id: String, quantity: u32) -> Sale as SalesRequest::RecordSale, Error = SalesError);
client_method!(SalesClient => fn count_by_menu(menu_id: String) -> usize as SalesRequest::CountByMenu, Error = SalesError);
client_method!(SalesClient => fn delete_by_menu(menu_id: String) -> usize as SalesRequest::DeleteByMenu, Error = SalesError);
client_method!(SalesClient => fn best_seller(store_id: String) -> Option<Menu> as SalesRequest::BestSeller, Error = SalesError);
client_method!(SalesClient => fn total_count() -> usize as SalesRequest::TotalCount, Error = SalesError);
