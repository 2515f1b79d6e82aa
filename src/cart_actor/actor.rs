//! # Cart Actor
//!
//! The server half of the cart manager. It owns the [`Cart`] state and the
//! receiver end of the request channel, and processes messages sequentially
//! in its own Tokio task, so no locks are needed and overlapping client
//! calls cannot interleave mid-operation.
//!
//! Every mutation follows the same shape: validate against the catalog,
//! build a candidate cart as a pure value, persist it, and only then make it
//! visible (in memory and on the watch channel). A failure at any point
//! leaves the previous cart in place and forwards a fixed user-facing
//! message to the notifier; callers are never handed a rejected operation.

use crate::cart_actor::error::CartError;
use crate::cart_actor::message::CartRequest;
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::model::{AmountUpdate, Cart, ProductId};
use crate::notify::ErrorNotifier;
use crate::storage::{CartStore, StoreError};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Collaborators injected into the actor at spawn time.
///
/// # Context Injection
/// Dependencies are passed to [`CartActor::run`], not to the constructor.
/// This late binding keeps construction free of wiring concerns and lets
/// tests swap in mock collaborators without touching the actor.
pub struct CartContext {
    pub catalog: Arc<dyn Catalog>,
    pub store: Arc<dyn CartStore>,
    pub notifier: Arc<dyn ErrorNotifier>,
}

/// The actor that manages the session cart.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    publisher: watch::Sender<Cart>,
}

impl CartActor {
    /// Creates a new `CartActor` and its associated [`CartClient`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client
    ///   calls wait until the actor drains it.
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, snapshots) = watch::channel(Cart::new());
        let actor = Self {
            receiver,
            cart: Cart::new(),
            publisher,
        };
        let client = CartClient::new(sender, snapshots);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until the channel
    /// closes.
    ///
    /// Before entering the loop the persisted cart is restored from the
    /// store; a load failure degrades to an empty cart rather than refusing
    /// to start.
    pub async fn run(mut self, context: CartContext) {
        info!("Cart actor started");

        match context.store.load().await {
            Ok(Some(cart)) => {
                info!(entries = cart.len(), "Cart restored from store");
                self.cart = cart;
                let _ = self.publisher.send(self.cart.clone());
            }
            Ok(None) => debug!("No persisted cart, starting empty"),
            Err(e) => warn!(error = %e, "Failed to load persisted cart, starting empty"),
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Add {
                    product_id,
                    respond_to,
                } => {
                    debug!(%product_id, "Add");
                    self.handle_add(&context, product_id).await;
                    let _ = respond_to.send(());
                }
                CartRequest::Remove {
                    product_id,
                    respond_to,
                } => {
                    debug!(%product_id, "Remove");
                    self.handle_remove(&context, product_id).await;
                    let _ = respond_to.send(());
                }
                CartRequest::UpdateAmount { update, respond_to } => {
                    debug!(product_id = %update.product_id, amount = update.amount, "UpdateAmount");
                    self.handle_update_amount(&context, update).await;
                    let _ = respond_to.send(());
                }
                CartRequest::Get { respond_to } => {
                    debug!(entries = self.cart.len(), "Get");
                    let _ = respond_to.send(self.cart.clone());
                }
            }
        }

        info!(entries = self.cart.len(), "Cart actor shutdown");
    }

    async fn handle_add(&mut self, ctx: &CartContext, product_id: ProductId) {
        let outcome = match self.cart_with_added(ctx, product_id).await {
            Ok(next) => self.commit(ctx, next).await.map_err(|e| CartError::AddProduct {
                product_id,
                reason: e.to_string(),
            }),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => info!(%product_id, entries = self.cart.len(), "Product added"),
            Err(e) => {
                warn!(%product_id, error = %e, "Add failed");
                ctx.notifier.notify_error(e.user_message());
            }
        }
    }

    /// Builds the candidate cart for an add: increment an existing entry
    /// (bounded by live stock) or fetch the product and append a fresh entry
    /// of amount 1.
    async fn cart_with_added(
        &self,
        ctx: &CartContext,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        let stock = ctx
            .catalog
            .get_stock(product_id)
            .await
            .map_err(|e| CartError::AddProduct {
                product_id,
                reason: e.to_string(),
            })?;

        match self.cart.entry(product_id) {
            // Also covers an entry already above a shrunken stock level.
            Some(entry) if entry.amount >= stock.amount => Err(CartError::OutOfStock {
                product_id,
                requested: entry.amount + 1,
                available: stock.amount,
            }),
            Some(_) => Ok(self.cart.with_incremented(product_id)),
            // A first unit still needs stock to cover it.
            None if stock.amount == 0 => Err(CartError::OutOfStock {
                product_id,
                requested: 1,
                available: 0,
            }),
            None => {
                let product = ctx.catalog.get_product(product_id).await.map_err(|e| {
                    CartError::AddProduct {
                        product_id,
                        reason: e.to_string(),
                    }
                })?;
                Ok(self.cart.with_added(product))
            }
        }
    }

    async fn handle_remove(&mut self, ctx: &CartContext, product_id: ProductId) {
        let outcome = match self.cart_without(product_id) {
            Ok(next) => self
                .commit(ctx, next)
                .await
                .map_err(|e| CartError::RemoveProduct {
                    product_id,
                    reason: e.to_string(),
                }),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => info!(%product_id, entries = self.cart.len(), "Product removed"),
            Err(e) => {
                warn!(%product_id, error = %e, "Remove failed");
                ctx.notifier.notify_error(e.user_message());
            }
        }
    }

    /// Builds the candidate cart for a removal. An unchanged length after
    /// filtering means the product was not in the cart.
    fn cart_without(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let next = self.cart.without(product_id);
        if next.len() == self.cart.len() {
            return Err(CartError::RemoveProduct {
                product_id,
                reason: "not in cart".to_string(),
            });
        }
        Ok(next)
    }

    async fn handle_update_amount(&mut self, ctx: &CartContext, update: AmountUpdate) {
        // Non-positive amounts are ignored entirely: the storefront UI can
        // request a decrement below one, and that must neither mutate nor
        // notify.
        if update.amount <= 0 {
            debug!(product_id = %update.product_id, amount = update.amount, "Ignoring non-positive amount");
            return;
        }
        let requested = update.amount as u32;

        let outcome = match self.cart_with_amount(ctx, update.product_id, requested).await {
            Ok(next) => self
                .commit(ctx, next)
                .await
                .map_err(|e| CartError::UpdateAmount {
                    product_id: update.product_id,
                    reason: e.to_string(),
                }),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => info!(product_id = %update.product_id, amount = requested, "Amount updated"),
            Err(e) => {
                warn!(product_id = %update.product_id, error = %e, "Update failed");
                ctx.notifier.notify_error(e.user_message());
            }
        }
    }

    /// Builds the candidate cart for an amount update, bounded by live stock.
    ///
    /// A missing entry yields a cart equal to the current one; the operation
    /// still succeeds and persists (intentionally preserved storefront
    /// behavior).
    async fn cart_with_amount(
        &self,
        ctx: &CartContext,
        product_id: ProductId,
        requested: u32,
    ) -> Result<Cart, CartError> {
        let stock = ctx
            .catalog
            .get_stock(product_id)
            .await
            .map_err(|e| CartError::UpdateAmount {
                product_id,
                reason: e.to_string(),
            })?;

        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }
        Ok(self.cart.with_amount(product_id, requested))
    }

    /// Persists the candidate cart, then makes it visible in memory and on
    /// the watch channel. A failed save leaves the previous cart in place,
    /// so the in-memory state and the store never diverge.
    async fn commit(&mut self, ctx: &CartContext, next: Cart) -> Result<(), StoreError> {
        ctx.store.save(&next).await?;
        self.cart = next;
        let _ = self.publisher.send(self.cart.clone());
        Ok(())
    }
}
