/// A vendor ("toko") owning a catalog of menu items.
///
/// Deleting a store cascades deletion of its menus; the cascade is
/// orchestrated by the admin surface, not by the store actor itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: String,
    pub name: String,
}

/// Payload for creating a new store.
#[derive(Debug, Clone)]
pub struct StoreCreate {
    pub name: String,
}

/// Payload for updating an existing store.
#[derive(Debug, Clone)]
pub struct StorePatch {
    pub name: Option<String>,
}
