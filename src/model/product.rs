//! Product and stock types consumed by the cart.
//!
//! These mirror what the storefront catalog returns: a [`Product`] carries the
//! display attributes the cart treats as opaque, and a [`Stock`] carries the
//! externally authoritative available quantity for one product.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product as fetched from the storefront.
///
/// The cart never inspects `name`, `price`, or `image`; they ride along so the
/// UI can render entries without a second catalog round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// Available quantity for one product, read-only from the cart's perspective.
///
/// Stock is fetched live per operation; the cart never caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}
