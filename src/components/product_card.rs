//! Product Card Component
//!
//! One storefront product with its add-to-cart button. The button label
//! flips to a short confirmation after an add and resets on a timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Product;
use crate::store::{store_add, use_cart_store};
use crate::view::format_currency;

/// How long the "Added" label stays up before resetting
const ADDED_FEEDBACK_MS: u32 = 900;

/// Product card with add-to-cart button
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_cart_store();
    let (just_added, set_just_added) = signal(false);

    let name = product.name.clone();
    let img = product.img.clone();
    let price_label = format_currency(product.price);

    let on_add = move |_| {
        store_add(&store, &product);
        set_just_added.set(true);

        // Fire-and-forget label reset; overlapping clicks just reset early
        spawn_local(async move {
            TimeoutFuture::new(ADDED_FEEDBACK_MS).await;
            set_just_added.set(false);
        });
    };

    view! {
        <div class="product-card">
            <img class="product-img" src=img alt=name.clone()/>
            <div class="product-name">{name}</div>
            <div class="product-price">{price_label}</div>
            <button class="btn-add" on:click=on_add>
                {move || if just_added.get() { "Added ✓" } else { "Add to cart" }}
            </button>
        </div>
    }
}
