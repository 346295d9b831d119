//! Account-recovery route handlers
//!
//! This module contains the three endpoints of the password-reset flow:
//! - Requesting a one-time passcode (`/api/send-otp`)
//! - Verifying a passcode without consuming it (`/api/verify-otp`)
//! - Committing new credentials (`/api/reset-credentials`)

pub mod reset_credentials;
pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use hl_core::repositories::UserRepository;
use hl_core::services::reset::{ResetMailer, ResetService};

/// Application state holding the shared reset service
pub struct AppState<U, M>
where
    U: UserRepository,
    M: ResetMailer,
{
    pub reset_service: Arc<ResetService<U, M>>,
}
