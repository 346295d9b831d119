//! SMTP delivery of reset codes using lettre.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;
use tracing::{debug, info};

use hl_core::services::reset::{mask_email, ResetMailer};
use hl_shared::config::EmailConfig;

use crate::InfrastructureError;

const RESET_SUBJECT: &str = "Password Reset OTP";

/// SMTP mail channel for reset codes
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration.
    ///
    /// Connects with STARTTLS to the configured relay; a bad hostname or
    /// from address fails here, at startup.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = format!("Hireline <{}>", config.from_address)
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid from address: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to create SMTP transport: {}", e))
            })?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.send_timeout_secs)))
            .build();

        info!(host = %config.smtp_host, port = config.smtp_port, "SMTP mailer initialized");

        Ok(Self { transport, from })
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), InfrastructureError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to
                .parse()
                .map_err(|e| InfrastructureError::Email(format!("Invalid to address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| InfrastructureError::Email(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| InfrastructureError::Email(format!("Failed to send email: {}", e)))?;

        debug!(to = %mask_email(to), event = "email_sent", "Reset email delivered to relay");
        Ok(())
    }
}

/// Plain-text body of the reset email
fn reset_email_body(code: &str) -> String {
    format!(
        "Hello,\n\
        \n\
        Your OTP for password reset is: {}\n\
        \n\
        This OTP will expire in 15 minutes.\n\
        \n\
        If you did not request this, please ignore this email.\n",
        code
    )
}

#[async_trait]
impl ResetMailer for SmtpMailer {
    async fn send_reset_code(&self, email: &str, code: &str) -> Result<(), String> {
        self.send(email, RESET_SUBJECT, reset_email_body(code))
            .await
            .map_err(|e| e.to_string())
    }
}
