//! Handler for POST /api/send-otp

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use hl_core::repositories::UserRepository;
use hl_core::services::reset::{mask_email, ResetMailer};
use hl_shared::types::ApiMessage;

use crate::dto::reset::SendOtpRequest;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Issues a one-time passcode for the given email and delivers it by mail.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
/// - 200: code issued and handed to the mail relay
/// - 400: malformed email
/// - 404: no account for this email
/// - 503: delivery failed (the issued code stays valid until expiry)
pub async fn send_otp<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: ResetMailer + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ApiMessage::fail("Invalid email format"));
    }

    match state.reset_service.request_reset(&request.email).await {
        Ok(issued) => {
            info!(
                email = %mask_email(&request.email),
                expires_at = %issued.expires_at,
                "Reset OTP issued"
            );
            HttpResponse::Ok().json(ApiMessage::ok("OTP sent successfully"))
        }
        Err(error) => handle_domain_error(error),
    }
}
