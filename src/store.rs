//! Inventory Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each resource
//! view owns one field; the whole store is wiped when the session ends.

use leptos::prelude::*;
use reactive_stores::Store;

use filament_core::{FilamentType, Loadable, PurchaseBook, Stock};

/// Last load state of every resource view
#[derive(Clone, Debug, Default, Store)]
pub struct Inventory {
    /// Legacy filament type list
    pub filament_types: Loadable<Vec<FilamentType>>,
    /// Purchases with the filament types the form picks from
    pub purchases: Loadable<PurchaseBook>,
    /// Product categories and products
    pub stock: Loadable<Stock>,
}

/// Type alias for the store
pub type InventoryStore = Store<Inventory>;

/// Get the inventory store from context
pub fn use_inventory() -> InventoryStore {
    expect_context::<InventoryStore>()
}

/// Forget everything loaded under the previous session
pub fn store_reset(store: &InventoryStore) {
    *store.write() = Inventory::default();
}
