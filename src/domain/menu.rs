/// A sellable item with price, stock, and a cumulative order cap.
///
/// `stock` only ever decreases through order admission and only ever
/// increases through an administrative edit. `max_order` bounds the sum
/// of quantities across all orders ever admitted for this menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub max_order: u32,
    pub stock: u32,
    pub store_id: String,
}

/// Default cumulative order cap, in portions.
pub const DEFAULT_MAX_ORDER: u32 = 20;
/// Default opening stock, in portions.
pub const DEFAULT_STOCK: u32 = 100;

/// Payload for creating a new menu.
#[derive(Debug, Clone)]
pub struct MenuCreate {
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub max_order: u32,
    pub stock: u32,
    pub store_id: String,
}

impl MenuCreate {
    pub fn new(name: impl Into<String>, price: f64, store_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_url: None,
            in_stock: true,
            max_order: DEFAULT_MAX_ORDER,
            stock: DEFAULT_STOCK,
            store_id: store_id.into(),
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_max_order(mut self, max_order: u32) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}

/// Payload for updating an existing menu. `image_url` is only replaced
/// when a new upload was provided, mirroring the edit form.
#[derive(Debug, Clone, Default)]
pub struct MenuPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
    pub max_order: Option<u32>,
    pub stock: Option<u32>,
}
