//! Full end-to-end tests: real actor, real in-memory collaborators.

use std::sync::Arc;
use storefront_cart::catalog::StaticCatalog;
use storefront_cart::lifecycle::CartSystem;
use storefront_cart::mock::RecordingNotifier;
use storefront_cart::model::{AmountUpdate, CartEntry, Product, ProductId};
use storefront_cart::storage::{CartStore, MemoryStore};

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_product(Product::new(1u32, "Trail Runner", 219.9, "/img/1.jpg"), 10)
        .with_product(Product::new(2u32, "Court Classic", 149.9, "/img/2.jpg"), 2)
        .with_product(Product::new(3u32, "Studio Flex", 179.9, "/img/3.jpg"), 0)
}

/// A full session (add, increment, update, reject, remove), then a fresh
/// system on the same store restores exactly what was committed.
#[tokio::test]
async fn cart_session_survives_a_restart() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());

    let system = CartSystem::new(Arc::new(catalog()), store.clone(), notifier.clone());
    let client = &system.cart_client;

    client.add_product(ProductId(1)).await.unwrap();
    client.add_product(ProductId(1)).await.unwrap();
    client.add_product(ProductId(2)).await.unwrap();
    client
        .update_product_amount(AmountUpdate {
            product_id: ProductId(1),
            amount: 4,
        })
        .await
        .unwrap();

    // Product 3 has zero stock; the add is rejected and notified.
    client.add_product(ProductId(3)).await.unwrap();

    let cart = client.cart().await.unwrap();
    let ids: Vec<ProductId> = cart.entries().iter().map(CartEntry::id).collect();
    assert_eq!(ids, vec![ProductId(1), ProductId(2)]);
    assert_eq!(cart.amount_of(ProductId(1)), Some(4));
    assert_eq!(cart.amount_of(ProductId(2)), Some(1));
    assert_eq!(
        notifier.messages(),
        vec!["Requested quantity is out of stock".to_string()]
    );

    system.shutdown().await.expect("Failed to shutdown system");

    // Same store, fresh system: entries, amounts, and order come back.
    let system = CartSystem::new(Arc::new(catalog()), store, notifier);
    let restored = system.cart_client.cart().await.unwrap();
    assert_eq!(restored, cart);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Concurrent adds from cloned clients are serialized by the actor: no lost
/// updates, and the final amount is exactly the number of adds.
#[tokio::test]
async fn concurrent_adds_are_serialized() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let system = CartSystem::new(Arc::new(catalog()), store.clone(), notifier.clone());

    let mut handles = vec![];
    for _ in 0..5 {
        let client = system.cart_client.clone();
        handles.push(tokio::spawn(
            async move { client.add_product(ProductId(1)).await },
        ));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let cart = system.cart_client.cart().await.unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(ProductId(1)), Some(5));
    assert!(notifier.is_empty());

    // The persisted cart agrees with the in-memory one.
    assert_eq!(store.load().await.unwrap(), Some(cart));

    system.shutdown().await.unwrap();
}

/// Adds beyond the stock limit stop exactly at the limit, however many
/// clients are pushing.
#[tokio::test]
async fn adds_stop_at_the_stock_limit() {
    let notifier = Arc::new(RecordingNotifier::new());
    let system = CartSystem::new(
        Arc::new(catalog()),
        Arc::new(MemoryStore::new()),
        notifier.clone(),
    );
    let client = &system.cart_client;

    // Stock for product 2 is 2; the third add must be rejected.
    for _ in 0..3 {
        client.add_product(ProductId(2)).await.unwrap();
    }

    let cart = client.cart().await.unwrap();
    assert_eq!(cart.amount_of(ProductId(2)), Some(2));
    assert_eq!(
        notifier.messages(),
        vec!["Requested quantity is out of stock".to_string()]
    );

    system.shutdown().await.unwrap();
}

/// Subscribers see one snapshot per committed mutation, none for rejects.
#[tokio::test]
async fn subscription_tracks_committed_states_only() {
    let system = CartSystem::new(
        Arc::new(catalog()),
        Arc::new(MemoryStore::new()),
        Arc::new(RecordingNotifier::new()),
    );
    let client = &system.cart_client;
    let mut snapshots = client.subscribe();

    client.add_product(ProductId(1)).await.unwrap();
    snapshots.changed().await.unwrap();
    assert_eq!(
        snapshots.borrow_and_update().amount_of(ProductId(1)),
        Some(1)
    );

    // Rejected mutation publishes nothing.
    client.add_product(ProductId(3)).await.unwrap();
    assert!(!snapshots.has_changed().unwrap());

    client.remove_product(ProductId(1)).await.unwrap();
    snapshots.changed().await.unwrap();
    assert!(snapshots.borrow_and_update().is_empty());

    system.shutdown().await.unwrap();
}
