//! Cart Persistence
//!
//! One localStorage slot holds the whole cart as a JSON object mapping
//! product id to line item. No versioning, no migration.

use crate::cart::Cart;

/// localStorage key the cart lives under
pub const STORAGE_KEY: &str = "motorSportCart";

/// Restore the cart from localStorage.
///
/// A missing slot, unavailable storage, or malformed JSON all yield an empty
/// cart; parse failures are never surfaced to the user.
pub fn load_cart() -> Cart {
    let Some(storage) = local_storage() else {
        return Cart::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => decode(&raw),
        _ => Cart::new(),
    }
}

/// Persist the cart to localStorage. Write failures are silently ignored.
pub fn save_cart(cart: &Cart) {
    let Some(storage) = local_storage() else { return };
    let _ = storage.set_item(STORAGE_KEY, &encode(cart));
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Serialize the cart for the storage slot
fn encode(cart: &Cart) -> String {
    serde_json::to_string(cart).unwrap_or_else(|_| "{}".to_string())
}

/// Parse a stored cart, falling back to empty on malformed data
fn decode(raw: &str) -> Cart {
    match serde_json::from_str(raw) {
        Ok(cart) => cart,
        Err(_) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&"[CART] Discarding malformed stored cart".into());
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart;
    use crate::models::Product;

    fn make_product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            img: format!("img/{}.jpg", id),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut before = Cart::new();
        cart::add(&mut before, &make_product("p1", 19.99));
        cart::add(&mut before, &make_product("p1", 19.99));
        cart::add(&mut before, &make_product("p2", 5.5));

        let restored = decode(&encode(&before));
        assert_eq!(restored, before);
    }

    #[test]
    fn test_decode_malformed_yields_empty_cart() {
        assert!(decode("not json at all").is_empty());
        assert!(decode("[1, 2, 3]").is_empty());
        assert!(decode("{\"p1\": {\"id\": \"p1\"}}").is_empty());
    }

    #[test]
    fn test_decode_empty_object() {
        assert!(decode("{}").is_empty());
    }

    #[test]
    fn test_emptied_cart_persists_as_empty_mapping() {
        let mut cart_map = Cart::new();
        cart::add(&mut cart_map, &make_product("p1", 10.0));
        cart::checkout(&mut cart_map);

        assert_eq!(encode(&cart_map), "{}");
    }

    #[test]
    fn test_persisted_field_names() {
        let mut cart_map = Cart::new();
        cart::add(&mut cart_map, &make_product("p1", 10.0));

        let raw = encode(&cart_map);
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value["p1"];
        for field in ["id", "name", "price", "img", "qty"] {
            assert!(entry.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(entry["qty"], 1);
    }
}
