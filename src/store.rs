//! Cart State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! constructed once by the app, provided via context, and every mutation
//! persists the cart before the renderer picks up the change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::{self, Cart};
use crate::models::Product;
use crate::storage;

/// Cart state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    /// All line items, keyed by product id
    pub items: Cart,
}

/// Type alias for the store
pub type CartStore = Store<CartState>;

/// Get the cart store from context
pub fn use_cart_store() -> CartStore {
    expect_context::<CartStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Restore the cart from storage, replacing whatever is in the store
pub fn store_load(store: &CartStore) {
    *store.items().write() = storage::load_cart();
}

/// Add a product (new entry at qty 1, or bump an existing one) and persist
pub fn store_add(store: &CartStore, product: &Product) {
    {
        let items_field = store.items();
        let mut items = items_field.write();
        cart::add(&mut items, product);
    }
    store_save(store);
}

/// Apply a quantity delta (entry removed at qty <= 0) and persist
pub fn store_change_qty(store: &CartStore, id: &str, delta: i32) {
    {
        let items_field = store.items();
        let mut items = items_field.write();
        cart::change_qty(&mut items, id, delta);
    }
    store_save(store);
}

/// Remove an entry and persist
pub fn store_remove(store: &CartStore, id: &str) {
    {
        let items_field = store.items();
        let mut items = items_field.write();
        cart::remove(&mut items, id);
    }
    store_save(store);
}

/// Attempt the simulated checkout; persists only when the cart was emptied
pub fn store_checkout(store: &CartStore) -> cart::CheckoutOutcome {
    let outcome = {
        let items_field = store.items();
        let mut items = items_field.write();
        cart::checkout(&mut items)
    };
    if outcome == cart::CheckoutOutcome::Completed {
        store_save(store);
    }
    outcome
}

/// Empty the cart and persist
pub fn store_clear(store: &CartStore) {
    store.items().write().clear();
    store_save(store);
}

fn store_save(store: &CartStore) {
    storage::save_cart(&store.items().read());
}
