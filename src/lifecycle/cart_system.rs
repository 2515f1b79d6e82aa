use crate::cart_actor::{self, CartContext};
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::notify::ErrorNotifier;
use crate::storage::CartStore;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the cart service.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the cart actor
/// - **Dependency Wiring**: injecting the catalog, store, and notifier into
///   the actor's context at spawn time
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::new(catalog, store, notifier);
///
/// system.cart_client.add_product(ProductId(5)).await?;
/// let cart = system.cart_client.cart().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the cart actor.
    pub cart_client: CartClient,

    /// Task handle for the running actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Creates and initializes a new `CartSystem` with the cart actor
    /// running.
    ///
    /// The actor restores the persisted cart from `store` before accepting
    /// requests, then validates every mutation against `catalog` and reports
    /// failures through `notifier`.
    pub fn new(
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn CartStore>,
        notifier: Arc<dyn ErrorNotifier>,
    ) -> Self {
        let (actor, cart_client) = cart_actor::new();

        let handle = tokio::spawn(actor.run(CartContext {
            catalog,
            store,
            notifier,
        }));

        Self {
            cart_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the request channel; the actor drains any
    /// queued requests, logs its final state, and exits. Clones of
    /// `cart_client` held elsewhere keep the channel open until they are
    /// dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
