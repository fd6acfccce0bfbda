//! Cart Panel Component
//!
//! Slide-over panel listing the cart rows with quantity controls, the
//! running total, and the clear/checkout actions.

use leptos::prelude::*;

use crate::cart::{self, CheckoutOutcome};
use crate::dialog;
use crate::store::{
    store_change_qty, store_checkout, store_clear, store_remove, use_cart_store,
    CartStateStoreFields,
};
use crate::view::{self, CartRowView};

/// The cart panel (offcanvas-style, toggled from the top bar)
#[component]
pub fn CartPanel(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_cart_store();
    let cart = move || view::cart_view(&store.items().read());

    let on_clear = move |_| {
        if dialog::confirm("Empty the whole cart?") {
            store_clear(&store);
        }
    };

    // No backend yet; the purchase is simulated.
    let on_checkout = move |_| match store_checkout(&store) {
        CheckoutOutcome::EmptyCart => dialog::alert("Your cart is empty."),
        CheckoutOutcome::Completed => {
            dialog::alert(
                "Thanks for your (simulated) purchase. We'll be in touch to arrange delivery.",
            );
            set_open.set(false);
        }
    };

    view! {
        <aside class=move || if open.get() { "cart-panel open" } else { "cart-panel" }>
            <header class="cart-panel-header">
                <h2>"Your cart"</h2>
                <button class="btn-close" on:click=move |_| set_open.set(false)>"×"</button>
            </header>

            <div class="cart-items">
                <Show when=move || cart().is_empty()>
                    <p class="text-muted">"Your cart is empty."</p>
                </Show>
                <For
                    each=move || cart().rows
                    key=|row| row.id.clone()
                    children=move |row| view! { <CartRow row=row/> }
                />
            </div>

            <footer class="cart-panel-footer">
                <div class="cart-total">
                    <span>"Total"</span>
                    <strong>{move || cart().total}</strong>
                </div>
                <button class="btn-clear" on:click=on_clear>"Empty cart"</button>
                <button class="btn-checkout" on:click=on_checkout>"Checkout"</button>
            </footer>
        </aside>
    }
}

/// One cart row: image, name, unit price, quantity controls, remove
///
/// Rows are keyed by product id, so the displayed quantity reads from the
/// store reactively instead of the creation-time snapshot.
#[component]
fn CartRow(row: CartRowView) -> impl IntoView {
    let store = use_cart_store();
    let dec_id = row.id.clone();
    let inc_id = row.id.clone();
    let remove_id = row.id.clone();
    let qty_id = row.id.clone();
    let qty = move || cart::qty_of(&store.items().read(), &qty_id);

    view! {
        <div class="cart-row">
            <img class="cart-row-img" src=row.img.clone() alt=row.name.clone()/>
            <div class="cart-row-body">
                <div class="cart-row-head">
                    <strong>{row.name.clone()}</strong>
                    <small class="text-muted">{row.unit_price.clone()}</small>
                </div>
                <div class="cart-row-controls">
                    <button
                        class="btn-decrease"
                        on:click=move |_| store_change_qty(&store, &dec_id, -1)
                    >
                        "-"
                    </button>
                    <span class="cart-row-qty">{qty}</span>
                    <button
                        class="btn-increase"
                        on:click=move |_| store_change_qty(&store, &inc_id, 1)
                    >
                        "+"
                    </button>
                    <button
                        class="btn-remove"
                        on:click=move |_| store_remove(&store, &remove_id)
                    >
                        "Remove"
                    </button>
                </div>
            </div>
        </div>
    }
}
