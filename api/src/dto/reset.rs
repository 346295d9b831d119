//! DTOs for the account-recovery endpoints.
//!
//! Field names follow the web client's wire format: camelCase for the
//! credential fields, plain `email`/`otp` elsewhere.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(equal = 6))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetCredentialsRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(equal = 6))]
    pub otp: String,
    #[serde(rename = "newUsername")]
    #[validate(length(min = 3, max = 30))]
    pub new_username: String,
    // bcrypt truncates beyond 72 bytes
    #[serde(rename = "newPassword")]
    #[validate(length(min = 6, max = 72))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_otp_request_validation() {
        let ok = SendOtpRequest {
            email: "a@x.com".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = SendOtpRequest {
            email: "not-an-email".to_string(),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_verify_otp_request_code_length() {
        let ok = VerifyOtpRequest {
            email: "a@x.com".to_string(),
            otp: "123456".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = VerifyOtpRequest {
            email: "a@x.com".to_string(),
            otp: "12345".to_string(),
        };
        assert!(short.validate().is_err());

        let long = VerifyOtpRequest {
            email: "a@x.com".to_string(),
            otp: "1234567".to_string(),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_reset_credentials_wire_format() {
        let json = serde_json::json!({
            "email": "a@x.com",
            "otp": "417203",
            "newUsername": "alice",
            "newPassword": "p@ssword"
        });
        let request: ResetCredentialsRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.new_username, "alice");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_reset_credentials_rejects_short_password() {
        let request = ResetCredentialsRequest {
            email: "a@x.com".to_string(),
            otp: "417203".to_string(),
            new_username: "alice".to_string(),
            new_password: "pw".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
