use chrono::{DateTime, Utc};

/// An administrator-entered sale record ("penjualan").
///
/// A manual ledger, deliberately decoupled from order admission; it only
/// feeds the best-seller ranking, which counts records rather than
/// summing quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: String,
    pub menu_id: String,
    pub quantity: u32,
    pub recorded_at: DateTime<Utc>,
}
