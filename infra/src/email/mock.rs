//! Mock mail channel for development.
//!
//! Logs the code instead of sending it, so the full reset flow can be
//! exercised locally without SMTP credentials.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use hl_core::services::reset::{mask_email, ResetMailer};

/// Mock mailer that logs deliveries to the console
#[derive(Clone)]
pub struct MockMailer {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResetMailer for MockMailer {
    async fn send_reset_code(&self, email: &str, code: &str) -> Result<(), String> {
        self.message_count.fetch_add(1, Ordering::SeqCst);
        info!(
            to = %mask_email(email),
            code,
            event = "mock_email",
            "MOCK EMAIL: reset code (not actually sent)"
        );
        Ok(())
    }
}
