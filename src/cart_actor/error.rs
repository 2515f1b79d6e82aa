//! Error types for the cart actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// The four domain variants are never returned to callers; the actor
/// converts them to the fixed user-facing message of
/// [`CartError::user_message`] and forwards that to the notifier.
/// `ActorCommunication` is the only variant a [`CartClient`](crate::clients::CartClient)
/// method can surface, and it covers channel plumbing, not domain failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested quantity exceeds the available stock.
    #[error("requested amount {requested} exceeds stock {available} for product {product_id}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Adding the product failed: unknown id, catalog failure, or store failure.
    #[error("could not add product {product_id}: {reason}")]
    AddProduct { product_id: ProductId, reason: String },

    /// Removing the product failed: it was not in the cart, or the store failed.
    #[error("could not remove product {product_id}: {reason}")]
    RemoveProduct { product_id: ProductId, reason: String },

    /// Updating the amount failed: catalog failure or store failure.
    #[error("could not update amount for product {product_id}: {reason}")]
    UpdateAmount { product_id: ProductId, reason: String },

    /// An error occurred while communicating with the actor.
    #[error("cart actor communication error: {0}")]
    ActorCommunication(String),
}

impl CartError {
    /// The fixed user-facing message for this error, as shown by the
    /// storefront's notification surface.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::OutOfStock { .. } => "Requested quantity is out of stock",
            CartError::AddProduct { .. } => "Error while adding the product",
            CartError::RemoveProduct { .. } => "Error while removing the product",
            CartError::UpdateAmount { .. } => "Error while changing the product amount",
            CartError::ActorCommunication(_) => "Cart is unavailable",
        }
    }
}
