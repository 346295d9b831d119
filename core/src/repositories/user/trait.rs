//! User repository trait defining the interface the reset workflow needs
//! from the credential store.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Repository trait for the credential store.
///
/// The account-recovery workflow only needs three operations from user
/// persistence: an existence check before a code is issued, a username
/// collision check before credentials are committed, and the credential
/// update itself. Implementations handle the actual database access while
/// keeping the domain layer free of I/O concerns.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether an account exists for the given email
    ///
    /// # Returns
    /// * `Ok(true)` - A record exists
    /// * `Ok(false)` - No record for this email
    /// * `Err(DomainError)` - Store unavailable or query failed
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a username is already used by a different account
    ///
    /// # Arguments
    /// * `username` - The candidate username
    /// * `excluding_email` - The account allowed to already own it
    async fn is_username_taken(
        &self,
        username: &str,
        excluding_email: &str,
    ) -> Result<bool, DomainError>;

    /// Commit new credentials to the account for `email`.
    ///
    /// Sets the username and password, marks the record registered, and
    /// activates it.
    ///
    /// # Returns
    /// * `Ok(())` - Credentials were committed
    /// * `Err(DomainError::NotFound)` - No record for this email
    /// * `Err(DomainError)` - Store unavailable or update failed
    async fn update_credentials(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), DomainError>;
}
