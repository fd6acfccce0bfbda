//! Demo Product Catalog
//!
//! The products the storefront page offers. Each entry carries the same
//! id/name/price/image payload an add-to-cart button exposes.

use crate::models::Product;

/// The storefront's product list
pub fn products() -> Vec<Product> {
    [
        ("helmet-gt3", "GT3 Full-Face Helmet", 189.99, "img/helmet-gt3.jpg"),
        ("gloves-pro", "Pro Racing Gloves", 44.5, "img/gloves-pro.jpg"),
        ("jacket-tour", "Touring Jacket", 259.0, "img/jacket-tour.jpg"),
        ("boots-trail", "Trail Boots", 129.9, "img/boots-trail.jpg"),
        ("visor-clear", "Clear Spare Visor", 29.99, "img/visor-clear.jpg"),
        ("chain-lube", "Chain Lube 400ml", 12.75, "img/chain-lube.jpg"),
    ]
    .into_iter()
    .map(|(id, name, price, img)| Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        img: img.to_string(),
    })
    .collect()
}
