//! # Cart Actor
//!
//! This module implements the cart manager as a resource actor: a single
//! stateful task that owns the session cart and processes mutation requests
//! sequentially.
//!
//! ## Structure
//!
//! - [`actor`] - [`CartActor`], its request loop, and [`CartContext`]
//! - [`message`] - [`CartRequest`] and the response channel alias
//! - [`error`] - [`CartError`] and the fixed user-facing messages
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Operations
//!
//! The actor answers four requests: add a product, remove a product, set a
//! product's amount, and read a snapshot. Mutations validate against the
//! injected [`Catalog`](crate::catalog::Catalog), persist through the
//! injected [`CartStore`](crate::storage::CartStore), and report failures to
//! the injected [`ErrorNotifier`](crate::notify::ErrorNotifier); callers only
//! ever receive a completion acknowledgement.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = cart_actor::new();
//! tokio::spawn(actor.run(CartContext { catalog, store, notifier }));
//!
//! client.add_product(ProductId(5)).await?;
//! let cart = client.cart().await?;
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::CartClient;

/// Creates a new cart actor and its client.
pub fn new() -> (CartActor, CartClient) {
    CartActor::new(32)
}
