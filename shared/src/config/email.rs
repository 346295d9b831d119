//! Outbound email (SMTP) configuration module

use serde::{Deserialize, Serialize};

/// SMTP delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP server hostname (e.g. smtp.gmail.com)
    pub smtp_host: String,

    /// SMTP server port (typically 587 for STARTTLS)
    pub smtp_port: u16,

    /// Username for SMTP authentication
    pub smtp_username: String,

    /// Password or app-specific password for SMTP
    pub smtp_password: String,

    /// From address placed on outgoing mail
    pub from_address: String,

    /// Timeout for a single send in seconds
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,

    /// Use the logging-only mock mailer instead of a real SMTP connection
    #[serde(default)]
    pub use_mock: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::from("no-reply@hireline.local"),
            send_timeout_secs: default_send_timeout(),
            use_mock: true,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables.
    ///
    /// Without `SMTP_HOST` configured the mock mailer is selected, so
    /// development setups never attempt a real SMTP connection by accident.
    pub fn from_env() -> Self {
        let smtp_host = std::env::var("SMTP_HOST").ok();
        let use_mock = std::env::var("EMAIL_USE_MOCK")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or_else(|_| smtp_host.is_none());

        Self {
            smtp_host: smtp_host.unwrap_or_else(|| "localhost".to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "no-reply@hireline.local".to_string()),
            send_timeout_secs: std::env::var("EMAIL_SEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_send_timeout),
            use_mock,
        }
    }
}

fn default_send_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_mock() {
        let config = EmailConfig::default();
        assert!(config.use_mock);
        assert_eq!(config.send_timeout_secs, 10);
    }
}
