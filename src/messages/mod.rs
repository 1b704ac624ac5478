use crate::actors::{AssetError, IdentityError, OrderError, SalesError};
use crate::domain::{Menu, Order, Role, Sale, User};
use tokio::sync::oneshot;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for the hand-written service actors. Each variant
/// carries its parameters and a oneshot channel for the response.

#[derive(Debug)]
pub enum OrderRequest {
    /// Validate and commit a customer order. The whole sequence runs
    /// inside the order actor, one admission at a time.
    PlaceOrder {
        menu_id: String,
        quantity: u32,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    GetOrder {
        id: String,
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    ListByMenu {
        menu_id: String,
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    SumByMenu {
        menu_id: String,
        respond_to: ServiceResponse<u32, OrderError>,
    },
    DeleteByMenu {
        menu_id: String,
        respond_to: ServiceResponse<usize, OrderError>,
    },
}

#[derive(Debug)]
pub enum SalesRequest {
    RecordSale {
        menu_id: String,
        quantity: u32,
        respond_to: ServiceResponse<Sale, SalesError>,
    },
    CountByMenu {
        menu_id: String,
        respond_to: ServiceResponse<usize, SalesError>,
    },
    DeleteByMenu {
        menu_id: String,
        respond_to: ServiceResponse<usize, SalesError>,
    },
    BestSeller {
        store_id: String,
        respond_to: ServiceResponse<Option<Menu>, SalesError>,
    },
    TotalCount {
        respond_to: ServiceResponse<usize, SalesError>,
    },
}

#[derive(Debug)]
pub enum IdentityRequest {
    Authenticate {
        username: String,
        password: String,
        respond_to: ServiceResponse<Option<User>, IdentityError>,
    },
    Register {
        username: String,
        password: String,
        role: Role,
        respond_to: ServiceResponse<String, IdentityError>,
    },
    GetUser {
        id: String,
        respond_to: ServiceResponse<Option<User>, IdentityError>,
    },
}

#[derive(Debug)]
pub enum AssetRequest {
    Store {
        filename: String,
        bytes: Vec<u8>,
        respond_to: ServiceResponse<String, AssetError>,
    },
    Fetch {
        reference: String,
        respond_to: ServiceResponse<Option<Vec<u8>>, AssetError>,
    },
}
