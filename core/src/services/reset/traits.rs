//! Trait seam for the notification channel

use async_trait::async_trait;

/// Trait for delivering reset codes to users.
///
/// A send either succeeds or fails atomically from the workflow's point of
/// view; there is no retry and no delivery confirmation beyond the call's
/// own return.
#[async_trait]
pub trait ResetMailer: Send + Sync {
    /// Deliver a one-time passcode to the given email address
    async fn send_reset_code(&self, email: &str, code: &str) -> Result<(), String>;
}
