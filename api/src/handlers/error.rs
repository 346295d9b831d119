//! Domain-error to HTTP-response mapping.
//!
//! Every endpoint answers with the `{success, message}` envelope the web
//! client expects, so failures are `ApiMessage::fail` bodies under the
//! appropriate status code rather than a separate error schema.

use actix_web::HttpResponse;
use tracing::error;

use hl_core::errors::{DomainError, ResetError, ValidationError};
use hl_shared::types::ApiMessage;

/// Convert a domain error into the HTTP response reported to the client
pub fn handle_domain_error(err: DomainError) -> HttpResponse {
    match err {
        DomainError::Reset(reset_error) => match reset_error {
            ResetError::IdentityNotFound => {
                HttpResponse::NotFound().json(ApiMessage::fail("Email not found"))
            }
            ResetError::ChallengeNotFound => HttpResponse::NotFound()
                .json(ApiMessage::fail("No active OTP found for this email")),
            ResetError::ChallengeExpired => {
                HttpResponse::BadRequest().json(ApiMessage::fail("OTP has expired"))
            }
            ResetError::CodeMismatch => {
                HttpResponse::BadRequest().json(ApiMessage::fail("Invalid OTP"))
            }
            ResetError::UsernameTaken => {
                HttpResponse::BadRequest().json(ApiMessage::fail("Username already taken"))
            }
            ResetError::DeliveryFailed => {
                HttpResponse::ServiceUnavailable().json(ApiMessage::fail("Failed to send OTP"))
            }
        },
        DomainError::ValidationErr(validation_error) => match validation_error {
            ValidationError::InvalidEmail => {
                HttpResponse::BadRequest().json(ApiMessage::fail("Invalid email format"))
            }
            ValidationError::InvalidFormat { field } => HttpResponse::BadRequest()
                .json(ApiMessage::fail(format!("Invalid format for field: {}", field))),
        },
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiMessage::fail(message))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ApiMessage::fail(format!("{} not found", resource)))
        }
        DomainError::Database { message } => {
            // Log the detail, report a generic failure
            error!(error = %message, "Database error");
            HttpResponse::InternalServerError()
                .json(ApiMessage::fail("Database connection failed"))
        }
        DomainError::Internal { message } => {
            error!(error = %message, "Internal error");
            HttpResponse::InternalServerError()
                .json(ApiMessage::fail("An internal server error occurred"))
        }
    }
}
