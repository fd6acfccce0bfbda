//! UI Components
//!
//! Reusable Leptos components.

mod cart_badge;
mod cart_panel;
mod product_card;

pub use cart_badge::CartBadge;
pub use cart_panel::CartPanel;
pub use product_card::ProductCard;
