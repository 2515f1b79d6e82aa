//! Message types exchanged between the cart client and the cart actor.

use crate::model::{AmountUpdate, Cart, ProductId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
///
/// Mutation responses carry `()` on purpose: domain failures are reported
/// through the notifier, never to the caller, so the acknowledgement only
/// signals that the operation ran to completion.
pub type Response<T> = oneshot::Sender<T>;

/// Requests the cart actor processes, strictly in arrival order.
///
/// Sequential processing is what serializes overlapping calls from cloned
/// clients: a request observes all state changes of every request queued
/// before it, including their persistence writes.
#[derive(Debug)]
pub enum CartRequest {
    /// Add one unit of a product (new entry at amount 1, or increment).
    Add {
        product_id: ProductId,
        respond_to: Response<()>,
    },
    /// Remove a product's entry entirely.
    Remove {
        product_id: ProductId,
        respond_to: Response<()>,
    },
    /// Set a product's amount to an absolute value.
    UpdateAmount {
        update: AmountUpdate,
        respond_to: Response<()>,
    },
    /// Snapshot of the current cart.
    Get { respond_to: Response<Cart> },
}
