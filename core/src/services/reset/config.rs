//! Configuration for the account-recovery service

use crate::domain::entities::reset_challenge::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the reset service
#[derive(Debug, Clone)]
pub struct ResetServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_expiration_minutes: i64,
    /// Seconds to wait for the mail channel before reporting delivery failure
    pub delivery_timeout_secs: u64,
}

impl Default for ResetServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            delivery_timeout_secs: 10,
        }
    }
}
