//! In-memory registry of outstanding reset challenges.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::domain::entities::reset_challenge::ResetChallenge;
use crate::errors::ResetError;

use super::config::ResetServiceConfig;

/// Process-wide store of outstanding one-time passcodes, keyed by email.
///
/// The registry owns issuance, lookup, lazy expiry deletion, and single-use
/// consumption. It holds no history: an entry lives for exactly one reset
/// cycle. All operations on the map serialize through one mutex; every
/// critical section is a single O(1) map access.
pub struct OtpRegistry {
    entries: Mutex<HashMap<String, ResetChallenge>>,
    expiration_minutes: i64,
}

impl OtpRegistry {
    /// Create a registry issuing codes with the default 15-minute expiry
    pub fn new() -> Self {
        Self::with_config(&ResetServiceConfig::default())
    }

    /// Create a registry with the expiry taken from service configuration
    pub fn with_config(config: &ResetServiceConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            expiration_minutes: config.code_expiration_minutes,
        }
    }

    /// Issue a fresh challenge for `email`, replacing any outstanding one.
    ///
    /// Always succeeds; callers confirm upstream that the identity exists.
    /// Returns the issued challenge so the caller can deliver the code and
    /// report the expiry instant.
    pub fn issue(&self, email: &str) -> ResetChallenge {
        let challenge =
            ResetChallenge::new_with_expiration(email.to_string(), self.expiration_minutes);

        let mut entries = self.lock_entries();
        let replaced = entries
            .insert(email.to_string(), challenge.clone())
            .is_some();
        debug!(
            email = %super::email::mask_email(email),
            replaced,
            event = "otp_issued",
            "Issued reset challenge"
        );

        challenge
    }

    /// Verify a presented code against the outstanding challenge for `email`.
    ///
    /// An expired entry is deleted as a side effect of being observed.
    /// A successful verification leaves the entry in place; only a completed
    /// reset consumes it.
    pub fn verify(&self, email: &str, code: &str) -> Result<(), ResetError> {
        let mut entries = self.lock_entries();

        let challenge = entries.get(email).ok_or(ResetError::ChallengeNotFound)?;

        if challenge.is_expired() {
            entries.remove(email);
            debug!(
                email = %super::email::mask_email(email),
                event = "otp_expired",
                "Removed expired reset challenge"
            );
            return Err(ResetError::ChallengeExpired);
        }

        if !challenge.matches_code(code) {
            return Err(ResetError::CodeMismatch);
        }

        Ok(())
    }

    /// Remove the challenge for `email` after a completed reset.
    ///
    /// Idempotent: consuming an absent entry is a no-op.
    pub fn consume(&self, email: &str) {
        let mut entries = self.lock_entries();
        if entries.remove(email).is_some() {
            debug!(
                email = %super::email::mask_email(email),
                event = "otp_consumed",
                "Consumed reset challenge"
            );
        }
    }

    /// Lock the entry map, recovering from a poisoned lock. Every mutation
    /// is a single insert/remove, so the map is never half-written.
    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, ResetChallenge>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for OtpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_expiry(minutes: i64) -> OtpRegistry {
        OtpRegistry::with_config(&ResetServiceConfig {
            code_expiration_minutes: minutes,
            ..Default::default()
        })
    }

    #[test]
    fn test_verify_without_issue_is_not_found() {
        let registry = OtpRegistry::new();
        assert_eq!(
            registry.verify("a@x.com", "123456"),
            Err(ResetError::ChallengeNotFound)
        );
    }

    #[test]
    fn test_issue_then_verify_succeeds() {
        let registry = OtpRegistry::new();
        let challenge = registry.issue("a@x.com");

        assert_eq!(challenge.code.len(), 6);
        assert!(registry.verify("a@x.com", &challenge.code).is_ok());
        // Verification does not consume: a second verify still succeeds
        assert!(registry.verify("a@x.com", &challenge.code).is_ok());
    }

    #[test]
    fn test_verify_wrong_code_leaves_entry_intact() {
        let registry = OtpRegistry::new();
        let challenge = registry.issue("a@x.com");
        let wrong = if challenge.code == "000000" { "111111" } else { "000000" };

        assert_eq!(
            registry.verify("a@x.com", wrong),
            Err(ResetError::CodeMismatch)
        );
        // Correct code still verifies afterwards
        assert!(registry.verify("a@x.com", &challenge.code).is_ok());
    }

    #[test]
    fn test_code_is_bound_to_identity() {
        let registry = OtpRegistry::new();
        let challenge = registry.issue("a@x.com");

        assert_eq!(
            registry.verify("b@x.com", &challenge.code),
            Err(ResetError::ChallengeNotFound)
        );
    }

    #[test]
    fn test_expired_entry_is_lazily_deleted() {
        let registry = registry_with_expiry(0);
        let challenge = registry.issue("a@x.com");
        std::thread::sleep(std::time::Duration::from_millis(10));

        // First access reports expiry and deletes the entry
        assert_eq!(
            registry.verify("a@x.com", &challenge.code),
            Err(ResetError::ChallengeExpired)
        );
        // Second access finds nothing
        assert_eq!(
            registry.verify("a@x.com", &challenge.code),
            Err(ResetError::ChallengeNotFound)
        );
    }

    #[test]
    fn test_consume_removes_entry() {
        let registry = OtpRegistry::new();
        let challenge = registry.issue("a@x.com");

        registry.consume("a@x.com");
        assert_eq!(
            registry.verify("a@x.com", &challenge.code),
            Err(ResetError::ChallengeNotFound)
        );
    }

    #[test]
    fn test_consume_is_idempotent() {
        let registry = OtpRegistry::new();
        registry.consume("never-issued@x.com");
        registry.issue("a@x.com");
        registry.consume("a@x.com");
        registry.consume("a@x.com");
    }

    #[test]
    fn test_reissue_overwrites_previous_code() {
        let registry = OtpRegistry::new();
        let first = registry.issue("a@x.com");
        let second = registry.issue("a@x.com");

        if first.code != second.code {
            // The old code is invalid immediately
            assert_eq!(
                registry.verify("a@x.com", &first.code),
                Err(ResetError::CodeMismatch)
            );
        }
        assert!(registry.verify("a@x.com", &second.code).is_ok());
    }

    #[test]
    fn test_entries_are_independent_across_identities() {
        let registry = OtpRegistry::new();
        let a = registry.issue("a@x.com");
        let b = registry.issue("b@x.com");

        registry.consume("a@x.com");
        assert_eq!(
            registry.verify("a@x.com", &a.code),
            Err(ResetError::ChallengeNotFound)
        );
        assert!(registry.verify("b@x.com", &b.code).is_ok());
    }
}
