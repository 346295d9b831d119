//! Error types for the account-recovery workflow.
//!
//! These are the recoverable failure kinds reported to the caller; none of
//! them is fatal to the process. HTTP status mapping happens in the
//! presentation layer.

use thiserror::Error;

/// Failures of the password-reset workflow
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResetError {
    /// The credential store has no record for the email
    #[error("Email not found")]
    IdentityNotFound,

    /// No outstanding challenge exists for the email
    #[error("No active OTP found for this email")]
    ChallengeNotFound,

    /// The challenge existed but its validity window has passed
    #[error("OTP has expired")]
    ChallengeExpired,

    /// The presented code does not match the issued one
    #[error("Invalid OTP")]
    CodeMismatch,

    /// The requested username already belongs to a different account
    #[error("Username already taken")]
    UsernameTaken,

    /// The notification channel failed to deliver the code
    #[error("Failed to send OTP")]
    DeliveryFailed,
}

/// Input validation failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_error_messages() {
        assert_eq!(
            ResetError::ChallengeNotFound.to_string(),
            "No active OTP found for this email"
        );
        assert_eq!(ResetError::ChallengeExpired.to_string(), "OTP has expired");
        assert_eq!(ResetError::CodeMismatch.to_string(), "Invalid OTP");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
        let err = ValidationError::InvalidFormat {
            field: "otp".to_string(),
        };
        assert!(err.to_string().contains("otp"));
    }
}
