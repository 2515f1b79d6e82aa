//! # Error Notification
//!
//! Cart operations never reject toward the caller; failures are converted to
//! a fixed user-facing message and handed to an [`ErrorNotifier`]. In the
//! storefront UI this is a toast; outside a UI the default
//! [`TracingNotifier`] surfaces the message as a `warn!` event.

use tracing::warn;

/// Sink for user-facing error messages produced by cart operations.
///
/// Implementations must not block: notification is fire-and-forget from the
/// cart's perspective.
pub trait ErrorNotifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Notifier that logs user-facing messages through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl ErrorNotifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        warn!(user_message = message, "User-facing cart error");
    }
}
