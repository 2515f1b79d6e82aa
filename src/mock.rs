//! # Mock Collaborators
//!
//! Utilities for testing the cart in isolation.
//!
//! Use [`MockCatalog`] and [`MockStore`] as drop-in collaborators for a real
//! [`CartActor`](crate::cart_actor::CartActor), and [`RecordingNotifier`] to
//! assert on user-facing messages. For testing client plumbing without any
//! actor, [`create_mock_cart_client`] hands out a client plus the receiver
//! end of its channel.

use crate::cart_actor::CartRequest;
use crate::catalog::{Catalog, CatalogError};
use crate::clients::CartClient;
use crate::model::{Cart, Product, ProductId, Stock};
use crate::notify::ErrorNotifier;
use crate::storage::{CartStore, StoreError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// CATALOG MOCK (expectation builder API)
// =============================================================================

/// Represents an expected request to the mock catalog.
#[derive(Debug)]
enum CatalogExpectation {
    GetStock {
        product_id: ProductId,
        response: Result<Stock, CatalogError>,
    },
    GetProduct {
        product_id: ProductId,
        response: Result<Product, CatalogError>,
    },
}

/// A mock [`Catalog`] with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order; a request that does not match
/// the next expectation panics the test.
///
/// # Example
/// ```ignore
/// let mut catalog = MockCatalog::new();
/// catalog.expect_get_stock(ProductId(5)).return_ok(Stock { id: ProductId(5), amount: 3 });
/// catalog.expect_get_product(ProductId(5)).return_ok(product);
///
/// let ctx = CartContext { catalog: Arc::new(catalog.clone()), .. };
/// // Use the context in tests...
/// catalog.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockCatalog {
    expectations: Arc<Mutex<VecDeque<CatalogExpectation>>>,
}

impl MockCatalog {
    /// Creates a new mock catalog with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `get_stock` call.
    pub fn expect_get_stock(&mut self, product_id: ProductId) -> StockExpectationBuilder {
        StockExpectationBuilder {
            product_id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get_product` call.
    pub fn expect_get_product(&mut self, product_id: ProductId) -> ProductExpectationBuilder {
        ProductExpectationBuilder {
            product_id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all catalog expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(CatalogExpectation::GetStock {
                product_id: expected,
                response,
            }) if expected == product_id => response,
            other => panic!("Unexpected get_stock({product_id}): next expectation was {other:?}"),
        }
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(CatalogExpectation::GetProduct {
                product_id: expected,
                response,
            }) if expected == product_id => response,
            other => panic!("Unexpected get_product({product_id}): next expectation was {other:?}"),
        }
    }
}

/// Builder for `get_stock` expectations.
pub struct StockExpectationBuilder {
    product_id: ProductId,
    expectations: Arc<Mutex<VecDeque<CatalogExpectation>>>,
}

impl StockExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, stock: Stock) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(CatalogExpectation::GetStock {
                product_id: self.product_id,
                response: Ok(stock),
            });
    }

    /// Shorthand for a successful result with the given amount.
    pub fn return_amount(self, amount: u32) {
        let stock = Stock {
            id: self.product_id,
            amount,
        };
        self.return_ok(stock);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(CatalogExpectation::GetStock {
                product_id: self.product_id,
                response: Err(error),
            });
    }
}

/// Builder for `get_product` expectations.
pub struct ProductExpectationBuilder {
    product_id: ProductId,
    expectations: Arc<Mutex<VecDeque<CatalogExpectation>>>,
}

impl ProductExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, product: Product) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(CatalogExpectation::GetProduct {
                product_id: self.product_id,
                response: Ok(product),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(CatalogExpectation::GetProduct {
                product_id: self.product_id,
                response: Err(error),
            });
    }
}

// =============================================================================
// STORE MOCK
// =============================================================================

#[derive(Default)]
struct MockStoreState {
    persisted: Option<Cart>,
    saved: Vec<Cart>,
    fail_next_save: bool,
}

/// A mock [`CartStore`] that records every save and can be seeded or made to
/// fail on demand.
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<MockStoreState>>,
}

impl MockStore {
    /// Creates an empty mock store (loads as `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock store that loads the given cart at startup.
    pub fn with_persisted(cart: Cart) -> Self {
        let store = Self::new();
        store.state.lock().unwrap().persisted = Some(cart);
        store
    }

    /// Makes the next `save` call fail with an I/O error.
    pub fn fail_next_save(&self) {
        self.state.lock().unwrap().fail_next_save = true;
    }

    /// Every cart passed to `save`, in order.
    pub fn saved(&self) -> Vec<Cart> {
        self.state.lock().unwrap().saved.clone()
    }

    /// The most recently saved cart, if any.
    pub fn last_saved(&self) -> Option<Cart> {
        self.state.lock().unwrap().saved.last().cloned()
    }
}

#[async_trait]
impl CartStore for MockStore {
    async fn load(&self) -> Result<Option<Cart>, StoreError> {
        Ok(self.state.lock().unwrap().persisted.clone())
    }

    async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_next_save {
            state.fail_next_save = false;
            return Err(StoreError::Io(std::io::Error::other("mock save failure")));
        }
        state.persisted = Some(cart.clone());
        state.saved.push(cart.clone());
        Ok(())
    }
}

// =============================================================================
// NOTIFIER MOCK
// =============================================================================

/// An [`ErrorNotifier`] that records every message for later assertion.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notified message, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// True when nothing has been notified.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}

impl ErrorNotifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// =============================================================================
// CLIENT CHANNEL HELPERS
// =============================================================================

/// Creates a cart client and a receiver for asserting requests.
///
/// # Testing Strategy
/// For tests of the *client* plumbing there is no need to spin up a full
/// actor. The client sends into a channel the test controls; the test
/// inspects the requests arriving on the receiver and answers their
/// `respond_to` channels directly, simulating the actor deterministically.
pub fn create_mock_cart_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, snapshots) = watch::channel(Cart::new());
    (CartClient::new(sender, snapshots), receiver)
}

/// Receives the next request from a mock client channel, panicking if the
/// channel closed instead.
pub async fn expect_request(receiver: &mut mpsc::Receiver<CartRequest>) -> CartRequest {
    receiver.recv().await.expect("Expected a cart request")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_catalog_replays_expectations_in_order() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_stock(ProductId(5)).return_amount(3);
        catalog
            .expect_get_product(ProductId(5))
            .return_ok(Product::new(5u32, "Court Classic", 149.9, "/img/5.jpg"));

        let stock = catalog.get_stock(ProductId(5)).await.unwrap();
        assert_eq!(stock.amount, 3);

        let product = catalog.get_product(ProductId(5)).await.unwrap();
        assert_eq!(product.id, ProductId(5));

        catalog.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all catalog expectations were met")]
    async fn mock_catalog_verify_panics_on_unmet_expectations() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_stock(ProductId(1)).return_amount(1);
        catalog.verify();
    }

    #[tokio::test]
    async fn mock_store_records_saves_and_can_fail() {
        let store = MockStore::new();
        let cart = Cart::new();

        store.save(&cart).await.unwrap();
        assert_eq!(store.saved().len(), 1);

        store.fail_next_save();
        assert!(store.save(&cart).await.is_err());
        // The failure consumed the flag; saving works again afterwards.
        store.save(&cart).await.unwrap();
        assert_eq!(store.saved().len(), 2);
    }
}
