/// A customer order ("pesanan") admitted against a menu.
///
/// The store id is denormalized from the menu at creation time. Orders
/// are immutable once created; they disappear only when their menu is
/// deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub store_id: String,
    pub menu_id: String,
    pub quantity: u32,
    pub status: String,
}

/// Status given to every freshly admitted order. No further transitions
/// exist.
pub const STATUS_PENDING: &str = "pending";
