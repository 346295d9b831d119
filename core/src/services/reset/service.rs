//! Two-phase password-reset workflow.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::entities::reset_challenge::CODE_LENGTH;
use crate::errors::{DomainResult, ResetError, ValidationError};
use crate::repositories::UserRepository;

use super::config::ResetServiceConfig;
use super::email::{is_valid_email, mask_email};
use super::registry::OtpRegistry;
use super::traits::ResetMailer;
use super::types::ResetChallengeIssued;

/// Orchestrates the account-recovery flow:
///
/// 1. `request_reset` - confirm the identity exists, issue a code, deliver it
/// 2. `verify_reset` - check a presented code without consuming it
/// 3. `apply_reset` - re-check the code, commit new credentials, consume
///
/// Verification deliberately does not consume: the client verifies the code
/// on one screen and submits the new credentials on the next, presenting the
/// same code both times. Only a committed credential update removes the
/// challenge.
pub struct ResetService<U: UserRepository, M: ResetMailer> {
    /// Credential store
    user_repository: Arc<U>,
    /// Notification channel for delivering codes
    mailer: Arc<M>,
    /// Registry of outstanding challenges
    registry: Arc<OtpRegistry>,
    /// Service configuration
    config: ResetServiceConfig,
}

impl<U: UserRepository, M: ResetMailer> ResetService<U, M> {
    /// Create a new reset service
    pub fn new(
        user_repository: Arc<U>,
        mailer: Arc<M>,
        registry: Arc<OtpRegistry>,
        config: ResetServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mailer,
            registry,
            config,
        }
    }

    /// Issue a reset code for `email` and deliver it.
    ///
    /// Fails with `IdentityNotFound` when the credential store has no record
    /// for the address. A delivery failure (including timeout) is reported
    /// as `DeliveryFailed`, but the issued challenge stays live: the code
    /// exists regardless of delivery outcome and remains valid until expiry.
    pub async fn request_reset(&self, email: &str) -> DomainResult<ResetChallengeIssued> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if !self.user_repository.exists_by_email(email).await? {
            warn!(
                email = %mask_email(email),
                event = "reset_unknown_identity",
                "Reset requested for unknown email"
            );
            return Err(ResetError::IdentityNotFound.into());
        }

        let challenge = self.registry.issue(email);
        info!(
            email = %mask_email(email),
            expires_at = %challenge.expires_at,
            event = "reset_requested",
            "Issued reset code"
        );

        let send = self.mailer.send_reset_code(email, &challenge.code);
        let timeout = Duration::from_secs(self.config.delivery_timeout_secs);
        match tokio::time::timeout(timeout, send).await {
            Ok(Ok(())) => Ok(ResetChallengeIssued {
                expires_at: challenge.expires_at,
            }),
            Ok(Err(error)) => {
                warn!(
                    email = %mask_email(email),
                    error = %error,
                    event = "reset_delivery_failed",
                    "Failed to deliver reset code"
                );
                Err(ResetError::DeliveryFailed.into())
            }
            Err(_elapsed) => {
                warn!(
                    email = %mask_email(email),
                    timeout_secs = self.config.delivery_timeout_secs,
                    event = "reset_delivery_timeout",
                    "Timed out delivering reset code"
                );
                Err(ResetError::DeliveryFailed.into())
            }
        }
    }

    /// Verify a presented code without consuming the challenge.
    pub async fn verify_reset(&self, email: &str, code: &str) -> DomainResult<()> {
        Self::check_code_format(code)?;
        self.registry.verify(email, code)?;

        info!(
            email = %mask_email(email),
            event = "reset_code_verified",
            "Reset code verified"
        );
        Ok(())
    }

    /// Complete the reset: re-verify the code, commit the new credentials,
    /// and consume the challenge.
    ///
    /// No mutation happens on any verification failure. The challenge is
    /// consumed only after the store update commits; if the update fails,
    /// the code stays valid until natural expiry and the caller may retry.
    pub async fn apply_reset(
        &self,
        email: &str,
        code: &str,
        new_username: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        Self::check_code_format(code)?;
        self.registry.verify(email, code)?;

        if self
            .user_repository
            .is_username_taken(new_username, email)
            .await?
        {
            return Err(ResetError::UsernameTaken.into());
        }

        self.user_repository
            .update_credentials(email, new_username, new_password)
            .await?;

        // Only now is the challenge spent; a replay finds no entry.
        self.registry.consume(email);
        info!(
            email = %mask_email(email),
            event = "reset_completed",
            "Credentials updated and reset code consumed"
        );
        Ok(())
    }

    /// A code must be exactly six ASCII digits before it is worth a
    /// registry lookup.
    fn check_code_format(code: &str) -> DomainResult<()> {
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "otp".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
