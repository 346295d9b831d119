//! Handler for POST /api/reset-credentials

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use hl_core::repositories::UserRepository;
use hl_core::services::reset::{mask_email, ResetMailer};
use hl_shared::types::ApiMessage;

use crate::dto::reset::ResetCredentialsRequest;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Completes the reset: re-verifies the passcode, commits the new
/// credentials, and consumes the challenge so the code cannot be replayed.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "otp": "417203",
///     "newUsername": "alice",
///     "newPassword": "p@ssword"
/// }
/// ```
///
/// # Responses
/// - 200: credentials updated, account activated
/// - 400: malformed request, expired/wrong code, or username taken
/// - 404: no outstanding code, or no account for this email
/// - 500: credential store failure (the code stays valid for a retry)
pub async fn reset_credentials<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<ResetCredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: ResetMailer + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ApiMessage::fail("Invalid request data"));
    }

    match state
        .reset_service
        .apply_reset(
            &request.email,
            &request.otp,
            &request.new_username,
            &request.new_password,
        )
        .await
    {
        Ok(()) => {
            info!(
                email = %mask_email(&request.email),
                "Account recovery completed"
            );
            HttpResponse::Ok().json(ApiMessage::ok("Credentials updated successfully"))
        }
        Err(error) => handle_domain_error(error),
    }
}
