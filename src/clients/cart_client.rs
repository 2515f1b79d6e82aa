//! # Cart Client
//!
//! Provides a high-level API for interacting with the cart actor.
//! It wraps the request channel and exposes the three mutation operations,
//! a snapshot read, and a subscription to committed cart states.

use crate::cart_actor::{CartError, CartRequest};
use crate::model::{AmountUpdate, Cart, ProductId};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
///
/// Cheap to clone; every clone talks to the same cart. The only errors these
/// methods return are channel-level (`ActorCommunication`); domain failures
/// are reported through the notifier, and callers observe them by watching
/// whether the cart changed.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    snapshots: watch::Receiver<Cart>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, snapshots: watch::Receiver<Cart>) -> Self {
        Self { sender, snapshots }
    }

    /// Add one unit of a product to the cart.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CartRequest::Add {
            product_id,
            respond_to,
        })
        .await?;
        response.await.map_err(Self::dropped)
    }

    /// Remove a product's entry from the cart.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CartRequest::Remove {
            product_id,
            respond_to,
        })
        .await?;
        response.await.map_err(Self::dropped)
    }

    /// Set a product's amount to an absolute value.
    ///
    /// Requests with `amount <= 0` are acknowledged but ignored by the actor.
    #[instrument(skip(self))]
    pub async fn update_product_amount(&self, update: AmountUpdate) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CartRequest::UpdateAmount { update, respond_to })
            .await?;
        response.await.map_err(Self::dropped)
    }

    /// Snapshot of the current cart.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Cart, CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CartRequest::Get { respond_to }).await?;
        response.await.map_err(Self::dropped)
    }

    /// Subscribe to committed cart states.
    ///
    /// The receiver yields the snapshot published after every committed
    /// mutation (and after restore at startup); rejected operations publish
    /// nothing. This is the hook a UI layer re-renders from.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.snapshots.clone()
    }

    async fn send(&self, request: CartRequest) -> Result<(), CartError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| CartError::ActorCommunication("cart actor closed".to_string()))
    }

    fn dropped(_: oneshot::error::RecvError) -> CartError {
        CartError::ActorCommunication("cart actor dropped response channel".to_string())
    }
}
