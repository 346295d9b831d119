//! Handler for POST /api/verify-otp

use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::repositories::UserRepository;
use hl_core::services::reset::ResetMailer;
use hl_shared::types::ApiMessage;

use crate::dto::reset::VerifyOtpRequest;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Checks a presented passcode against the outstanding challenge.
///
/// Verification does not consume the code; the client calls this to unlock
/// the credential form and presents the same code again on submit.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "otp": "417203" }
/// ```
///
/// # Responses
/// - 200: code matches
/// - 400: malformed request, expired code, or wrong code
/// - 404: no outstanding code for this email
pub async fn verify_otp<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_reset(&request.email, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiMessage::ok("OTP verified successfully")),
        Err(error) => handle_domain_error(error),
    }
}
