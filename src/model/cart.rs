//! The cart value type and its pure update operations.
//!
//! A [`Cart`] is an ordered sequence of [`CartEntry`] values, unique by
//! product id. All update methods are pure: they take `&self` and return a
//! new `Cart`, leaving the original untouched. The actor commits a candidate
//! cart only after it has been persisted, so callers never observe a
//! half-applied mutation.
//!
//! ## Invariants
//!
//! - Every entry has `amount >= 1`.
//! - No two entries share a product id.
//! - Entry order is insertion order and survives serialization.

use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One cart element: a product plus the quantity currently in the cart.
///
/// Serialized flat (product fields and `amount` in a single object) so the
/// persisted document keeps the storefront's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartEntry {
    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Request payload for the update-quantity operation.
///
/// `amount` is signed: non-positive requests are representable and are
/// ignored by the cart (intentional early exit, not an error).
#[derive(Debug, Clone, Copy)]
pub struct AmountUpdate {
    pub product_id: ProductId,
    pub amount: i32,
}

/// The ordered, id-unique collection of cart entries for the current session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from entries. Callers must supply id-unique entries with
    /// positive amounts; this is only exercised by stores and tests.
    pub fn from_entries(entries: impl IntoIterator<Item = CartEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry for a product, if present.
    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == product_id)
    }

    /// Quantity currently in the cart for a product, if present.
    pub fn amount_of(&self, product_id: ProductId) -> Option<u32> {
        self.entry(product_id).map(|e| e.amount)
    }

    /// Returns a cart with `product` appended as a fresh entry of amount 1.
    ///
    /// The caller is responsible for having checked that no entry with the
    /// same id exists yet.
    pub fn with_added(&self, product: Product) -> Self {
        let mut entries = self.entries.clone();
        entries.push(CartEntry { product, amount: 1 });
        Self { entries }
    }

    /// Returns a cart with the matching entry's amount incremented by 1.
    pub fn with_incremented(&self, product_id: ProductId) -> Self {
        self.map_entry(product_id, |amount| amount + 1)
    }

    /// Returns a cart with the matching entry's amount set to `amount`.
    ///
    /// A cart without a matching entry comes back unchanged; the caller
    /// decides whether that silence is acceptable.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Self {
        self.map_entry(product_id, |_| amount)
    }

    /// Returns a cart with the matching entry removed. Order of the remaining
    /// entries is preserved. A cart without a matching entry comes back with
    /// the same length, which is how removal failure is detected.
    pub fn without(&self, product_id: ProductId) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| e.id() != product_id)
                .cloned()
                .collect(),
        }
    }

    fn map_entry(&self, product_id: ProductId, f: impl Fn(u32) -> u32) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| {
                    if e.id() == product_id {
                        CartEntry {
                            product: e.product.clone(),
                            amount: f(e.amount),
                        }
                    } else {
                        e.clone()
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product::new(id, format!("Sneaker {id}"), 99.9, format!("/img/{id}.jpg"))
    }

    fn cart(entries: &[(u32, u32)]) -> Cart {
        Cart::from_entries(entries.iter().map(|&(id, amount)| CartEntry {
            product: product(id),
            amount,
        }))
    }

    #[test]
    fn with_added_appends_fresh_entry_with_amount_one() {
        let cart = cart(&[(1, 2)]).with_added(product(2));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.amount_of(ProductId(2)), Some(1));
        // Insertion order preserved
        assert_eq!(cart.entries()[1].id(), ProductId(2));
    }

    #[test]
    fn with_incremented_only_touches_the_matching_entry() {
        let cart = cart(&[(1, 2), (2, 5)]).with_incremented(ProductId(1));
        assert_eq!(cart.amount_of(ProductId(1)), Some(3));
        assert_eq!(cart.amount_of(ProductId(2)), Some(5));
    }

    #[test]
    fn with_amount_on_missing_entry_returns_equal_cart() {
        let original = cart(&[(1, 2)]);
        let updated = original.with_amount(ProductId(9), 4);
        assert_eq!(original, updated);
    }

    #[test]
    fn without_preserves_order_of_remaining_entries() {
        let cart = cart(&[(1, 1), (2, 1), (3, 1)]).without(ProductId(2));
        let ids: Vec<ProductId> = cart.entries().iter().map(CartEntry::id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);
    }

    #[test]
    fn without_missing_entry_keeps_length() {
        let original = cart(&[(1, 1)]);
        assert_eq!(original.without(ProductId(9)).len(), original.len());
    }

    #[test]
    fn serializes_as_flat_entry_array() {
        let cart = cart(&[(5, 3)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json[0]["id"], 5);
        assert_eq!(json[0]["amount"], 3);
        assert_eq!(json[0]["name"], "Sneaker 5");

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
