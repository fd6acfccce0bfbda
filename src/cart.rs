//! Cart Operations
//!
//! Pure mutations on the id -> LineItem mapping. Persistence and reactivity
//! live in `store`; everything here is testable without a browser.

use std::collections::BTreeMap;

use crate::models::{LineItem, Product};

/// The cart: product id -> line item. Iteration order carries no meaning.
pub type Cart = BTreeMap<String, LineItem>;

/// Insert a product with quantity 1, or bump its quantity if already present
pub fn add(cart: &mut Cart, product: &Product) {
    cart.entry(product.id.clone())
        .and_modify(|item| item.qty += 1)
        .or_insert_with(|| LineItem::from_product(product));
}

/// Apply a quantity delta; entries that would drop to 0 or below are removed.
/// Unknown ids are a silent no-op.
pub fn change_qty(cart: &mut Cart, id: &str, delta: i32) {
    let Some(item) = cart.get_mut(id) else { return };
    let new_qty = i64::from(item.qty) + i64::from(delta);
    if new_qty <= 0 {
        cart.remove(id);
    } else {
        item.qty = new_qty as u32;
    }
}

/// Remove an entry entirely; unknown ids are a silent no-op
pub fn remove(cart: &mut Cart, id: &str) {
    cart.remove(id);
}

/// Outcome of a checkout attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; the cart is left untouched
    EmptyCart,
    /// Purchase accepted; the cart has been emptied
    Completed,
}

/// Simulated checkout: rejects an empty cart, otherwise empties it
pub fn checkout(cart: &mut Cart) -> CheckoutOutcome {
    if cart.is_empty() {
        CheckoutOutcome::EmptyCart
    } else {
        cart.clear();
        CheckoutOutcome::Completed
    }
}

/// Current quantity for an id, 0 when absent
pub fn qty_of(cart: &Cart, id: &str) -> u32 {
    cart.get(id).map_or(0, |item| item.qty)
}

/// Sum of all quantities (the badge number)
pub fn total_qty(cart: &Cart) -> u32 {
    cart.values().map(|item| item.qty).sum()
}

/// Sum of price * qty over all entries, unrounded
pub fn total_price(cart: &Cart) -> f64 {
    cart.values()
        .map(|item| item.price * f64::from(item.qty))
        .sum()
}
