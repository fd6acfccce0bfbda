//! Cart Badge Component
//!
//! Numeric badge showing the total quantity across the cart, hidden at zero.

use leptos::prelude::*;

use crate::store::{use_cart_store, CartStateStoreFields};
use crate::view;

/// Quantity badge for the cart toggle button
#[component]
pub fn CartBadge() -> impl IntoView {
    let store = use_cart_store();
    let badge = move || view::badge_view(&store.items().read());

    view! {
        <Show when=move || badge().visible()>
            <span class="cart-count">{move || badge().count}</span>
        </Show>
    }
}
