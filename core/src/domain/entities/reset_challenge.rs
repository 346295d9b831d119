//! Reset challenge entity for OTP-based password recovery.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for reset challenges (15 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 15;

/// One outstanding password-reset challenge for one email address.
///
/// The registry holds at most one challenge per email; issuing a new one
/// replaces whatever was there before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetChallenge {
    /// Email address this challenge was issued to
    pub email: String,

    /// The 6-digit one-time passcode
    pub code: String,

    /// Timestamp when the challenge was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the challenge expires
    pub expires_at: DateTime<Utc>,
}

impl ResetChallenge {
    /// Creates a new challenge with a fresh random code and the default
    /// 15-minute expiration.
    pub fn new(email: String) -> Self {
        Self::new_with_expiration(email, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new challenge with a custom expiration time in minutes.
    pub fn new_with_expiration(email: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            email,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Generates a random 6-digit code, leading zeros permitted.
    ///
    /// Each digit is drawn independently from the OS CSPRNG so the code
    /// cannot be predicted from previous issuances.
    fn generate_code() -> String {
        let mut rng = OsRng;
        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Checks if the challenge has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a presented code against the stored one in constant time.
    pub fn matches_code(&self, input_code: &str) -> bool {
        if self.code.len() != input_code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), input_code.as_bytes())
    }

    /// Gets the time remaining until expiration, or zero if expired.
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_challenge() {
        let email = "hr@hireline.io".to_string();
        let challenge = ResetChallenge::new(email.clone());

        assert_eq!(challenge.email, email);
        assert_eq!(challenge.code.len(), CODE_LENGTH);
        assert!(!challenge.is_expired());
        assert_eq!(
            challenge.expires_at,
            challenge.created_at + Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
        );
    }

    #[test]
    fn test_generated_code_is_numeric() {
        for _ in 0..100 {
            let code = ResetChallenge::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| ResetChallenge::generate_code()).collect();

        // Extremely unlikely that 100 draws collapse to one value
        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_matches_code() {
        let challenge = ResetChallenge::new("a@x.com".to_string());
        let code = challenge.code.clone();

        assert!(challenge.matches_code(&code));
        assert!(!challenge.matches_code("000000"));
        assert!(!challenge.matches_code(""));
        assert!(!challenge.matches_code(&code[..5]));
    }

    #[test]
    fn test_custom_expiration() {
        let challenge = ResetChallenge::new_with_expiration("a@x.com".to_string(), 30);
        assert_eq!(
            challenge.expires_at,
            challenge.created_at + Duration::minutes(30)
        );
    }

    #[test]
    fn test_is_expired() {
        let challenge = ResetChallenge::new_with_expiration("a@x.com".to_string(), 0);
        std::thread::sleep(std::time::Duration::from_millis(10));

        assert!(challenge.is_expired());
        assert_eq!(challenge.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_time_until_expiration() {
        let challenge = ResetChallenge::new("a@x.com".to_string());
        let remaining = challenge.time_until_expiration();
        assert!(remaining <= Duration::minutes(DEFAULT_EXPIRATION_MINUTES));
        assert!(remaining > Duration::minutes(DEFAULT_EXPIRATION_MINUTES - 1));
    }

    #[test]
    fn test_serialization() {
        let challenge = ResetChallenge::new("a@x.com".to_string());
        let json = serde_json::to_string(&challenge).unwrap();
        let deserialized: ResetChallenge = serde_json::from_str(&json).unwrap();
        assert_eq!(challenge, deserialized);
    }
}
