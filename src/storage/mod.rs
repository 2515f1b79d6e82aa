//! # Persistent Cart Store
//!
//! The cart writes through to a [`CartStore`] after every successful
//! mutation and reads it back once at startup. The store holds exactly one
//! document, the serialized cart; every save is a full overwrite.
//!
//! Two implementations ship with the crate: [`JsonFileStore`] persists the
//! cart as a JSON file (the browser-storage analogue for a native
//! storefront), and [`MemoryStore`] keeps the serialized document in memory
//! for demos and tests.

use crate::model::Cart;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Errors surfaced by the persistent store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cart store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("persisted cart is malformed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable storage for the serialized cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Loads the persisted cart, or `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<Cart>, StoreError>;

    /// Overwrites the persisted cart with `cart`.
    async fn save(&self, cart: &Cart) -> Result<(), StoreError>;
}

/// Cart store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CartStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Cart>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let cart = serde_json::from_slice(&bytes)?;
        Ok(Some(cart))
    }

    async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(cart)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

/// Cart store that keeps the serialized document in a memory slot.
///
/// The cart still goes through a full serialize/deserialize cycle on every
/// save and load, so round-trip behavior matches the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryStore {
    async fn load(&self) -> Result<Option<Cart>, StoreError> {
        let slot = self.slot.lock().expect("store mutex poisoned");
        match slot.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let json = serde_json::to_string(cart)?;
        *self.slot.lock().expect("store mutex poisoned") = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartEntry, Product};

    fn sample_cart() -> Cart {
        Cart::from_entries([
            CartEntry {
                product: Product::new(5u32, "Court Classic", 149.9, "/img/5.jpg"),
                amount: 2,
            },
            CartEntry {
                product: Product::new(1u32, "Trail Runner", 219.9, "/img/1.jpg"),
                amount: 1,
            },
        ])
    }

    #[tokio::test]
    async fn memory_store_round_trips_the_cart() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let cart = sample_cart();
        store.save(&cart).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(cart));
    }

    #[tokio::test]
    async fn json_file_store_round_trips_and_overwrites() {
        let path = std::env::temp_dir().join(format!("cart-store-test-{}.json", std::process::id()));
        let store = JsonFileStore::new(&path);

        assert!(store.load().await.unwrap().is_none());

        let cart = sample_cart();
        store.save(&cart).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(cart.clone()));

        // Saves are full overwrites
        let smaller = cart.without(crate::model::ProductId(5));
        store.save(&smaller).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(smaller));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
