/// Custom actions for Menu entities.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Atomically checks availability and decrements stock.
    ///
    /// Fails if the menu is flagged out of stock or the requested amount
    /// exceeds the remaining stock. Runs inside the menu actor, so the
    /// check and the decrement cannot interleave with any other request
    /// touching this menu.
    Reserve(u32),
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    /// Current stock level from CheckStock
    StockLevel(u32),
    /// Stock was decremented by the requested amount
    Reserved,
}
