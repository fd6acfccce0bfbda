//! MotorSport Storefront App
//!
//! Main application component: owns the cart store, restores it from
//! storage on startup, and lays out the product grid and cart panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{CartBadge, CartPanel, ProductCard};
use crate::store::{store_load, CartState};

#[component]
pub fn App() -> impl IntoView {
    // One store for the whole app, provided to all children
    let store = Store::new(CartState::default());
    provide_context(store);
    store_load(&store);

    let (panel_open, set_panel_open) = signal(false);

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <h1>"MotorSport"</h1>
                <button
                    class="cart-toggle"
                    on:click=move |_| set_panel_open.update(|open| *open = !*open)
                >
                    "Cart" <CartBadge/>
                </button>
            </header>

            <main class="product-grid">
                <For
                    each=catalog::products
                    key=|product| product.id.clone()
                    children=move |product| view! { <ProductCard product=product/> }
                />
            </main>

            <CartPanel open=panel_open set_open=set_panel_open/>
        </div>
    }
}
