//! # System Lifecycle & Orchestration
//!
//! This module wires the cart actor to its collaborators and manages its
//! runtime lifecycle.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate the cart actor and its client
//! 2. **Dependency Injection** - Inject catalog, store, and notifier via the
//!    actor context
//! 3. **Graceful Shutdown** - Close the request channel and await the actor
//! 4. **Observability Setup** - Initialize tracing infrastructure
//!
//! ## Shutdown
//!
//! Dropping every [`CartClient`](crate::clients::CartClient) closes the
//! sender side of the request channel; the actor detects the closure, logs
//! its final state, and terminates. [`CartSystem::shutdown`] performs this
//! sequence and awaits the actor task.

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use tracing::*;
