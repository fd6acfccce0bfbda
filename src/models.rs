//! Cart Data Models
//!
//! Data structures matching the persisted cart layout.

use serde::{Deserialize, Serialize};

/// A product as carried by an "add to cart" button
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub img: String,
}

/// One cart entry: a product plus its quantity
///
/// Field names match the persisted JSON layout: `{id, name, price, img, qty}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub img: String,
    pub qty: u32,
}

impl LineItem {
    /// Line item for a freshly added product (quantity 1)
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            img: product.img.clone(),
            qty: 1,
        }
    }
}
