//! # Storefront Cart
//!
//! > **Client-side shopping cart state management for an e-commerce
//! > storefront, built on Tokio.**
//!
//! This crate owns the rules governing how a session cart mutates: adding
//! products, removing them, adjusting quantities, validating against live
//! stock, and persisting every committed state. The HTTP layer that answers
//! catalog queries, the UI that renders the cart, and the toast surface that
//! shows errors all live elsewhere; the cart sees them only as injected
//! collaborators.
//!
//! ## 🏗️ Design Philosophy
//!
//! The cart is one process-wide stateful resource that many UI call sites
//! touch. Instead of a shared `Mutex<Cart>`, it is modeled as an **actor**:
//! a single task owns the state and processes requests sequentially from a
//! channel. That gives three properties the storefront needs:
//!
//! - **Serialized mutations**: overlapping add/remove/update calls cannot
//!   interleave mid-operation, so there are no lost updates and no locks.
//! - **Atomic commits**: each mutation builds a new `Cart` value, persists
//!   it, and only then makes it visible. A failure at any step leaves the
//!   last-known-good cart in place, in memory and on disk.
//! - **Subscriber re-render**: every committed cart is published on a
//!   `watch` channel; any UI layer can await snapshots without polling.
//!
//! Failures never reject toward the caller. Each operation converts its
//! error into one of four fixed user-facing messages and hands it to the
//! notifier; callers observe failure only by the cart not changing. This is
//! deliberate fire-and-forget with user notification.
//!
//! ## 🗺️ Module Tour
//!
//! - **[`model`]**: Pure data: [`Cart`](model::Cart),
//!   [`CartEntry`](model::CartEntry), [`Product`](model::Product),
//!   [`Stock`](model::Stock). Cart updates are pure functions returning new
//!   values.
//! - **[`cart_actor`]**: The engine: [`CartActor`](cart_actor::CartActor),
//!   its request loop, and [`CartError`](cart_actor::CartError).
//! - **[`clients`]**: The interface: [`CartClient`](clients::CartClient),
//!   a cheap-to-clone handle exposing the operations.
//! - **[`catalog`]**, **[`storage`]**, **[`notify`]**: The collaborator
//!   seams, trait objects injected into the actor's context.
//! - **[`lifecycle`]**: The orchestrator: [`CartSystem`](lifecycle::CartSystem)
//!   wiring and graceful shutdown, plus [`setup_tracing`](lifecycle::setup_tracing).
//! - **[`mock`]**: Test collaborators with expectation tracking.
//!
//! ## 🚀 Quick Start
//!
//! ```rust,ignore
//! use storefront_cart::catalog::StaticCatalog;
//! use storefront_cart::lifecycle::CartSystem;
//! use storefront_cart::model::{Product, ProductId};
//! use storefront_cart::notify::TracingNotifier;
//! use storefront_cart::storage::JsonFileStore;
//! use std::sync::Arc;
//!
//! let catalog = StaticCatalog::new()
//!     .with_product(Product::new(1u32, "Trail Runner", 219.9, "/img/1.jpg"), 5);
//! let system = CartSystem::new(
//!     Arc::new(catalog),
//!     Arc::new(JsonFileStore::new("cart.json")),
//!     Arc::new(TracingNotifier),
//! );
//!
//! system.cart_client.add_product(ProductId(1)).await?;
//! let cart = system.cart_client.cart().await?;
//! assert_eq!(cart.amount_of(ProductId(1)), Some(1));
//!
//! system.shutdown().await?;
//! ```
//!
//! ## 🧪 Testing
//!
//! See the [`mock`] module: a real actor is driven against
//! [`MockCatalog`](mock::MockCatalog), [`MockStore`](mock::MockStore), and
//! [`RecordingNotifier`](mock::RecordingNotifier), so tests assert on
//! exactly what was fetched, persisted, and notified.

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod notify;
pub mod storage;
