//! # Observability & Tracing
//!
//! Structured logging for the cart service, configured the same way across
//! the demo binary and tests.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, restore-from-store, shutdown
//! - **Cart operations**: request receipt (`debug`), commits (`info`),
//!   rejected mutations (`warn`) with product ids and entry counts
//! - **User-facing errors**: the exact message handed to the notifier
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Keep log lines short; operations carry their own fields
        .compact()
        .init();
}
