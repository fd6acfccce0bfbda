//! Cart View Models
//!
//! Maps cart data to structured view models so the components stay free of
//! cart arithmetic and the formatting rules stay testable.

use crate::cart::{self, Cart};

/// One rendered cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartRowView {
    pub id: String,
    pub name: String,
    pub img: String,
    pub qty: u32,
    /// Unit price, currency-formatted
    pub unit_price: String,
}

/// The cart panel contents
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub rows: Vec<CartRowView>,
    /// Running total, currency-formatted (always present, "$0.00 USD" when empty)
    pub total: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The header badge: total quantity, hidden at zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeView {
    pub count: u32,
}

impl BadgeView {
    pub fn visible(&self) -> bool {
        self.count > 0
    }
}

/// Build the panel view model from the cart
pub fn cart_view(cart: &Cart) -> CartView {
    let rows = cart
        .values()
        .map(|item| CartRowView {
            id: item.id.clone(),
            name: item.name.clone(),
            img: item.img.clone(),
            qty: item.qty,
            unit_price: format_currency(item.price),
        })
        .collect();

    CartView {
        rows,
        total: format_currency(cart::total_price(cart)),
    }
}

/// Build the badge view model from the cart
pub fn badge_view(cart: &Cart) -> BadgeView {
    BadgeView {
        count: cart::total_qty(cart),
    }
}

/// Round to the nearest cent and render with exactly two decimals.
/// The epsilon nudge keeps values like 19.999 from rounding down on
/// float representation error.
pub fn format_currency(amount: f64) -> String {
    let cents = ((amount + f64::EPSILON) * 100.0).round() / 100.0;
    format!("${:.2} USD", cents)
}
