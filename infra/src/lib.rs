//! # Infrastructure Layer
//!
//! Concrete implementations of the seams the core crate defines:
//! - **Database**: MySQL user repository using SQLx
//! - **Email**: SMTP delivery of reset codes using lettre, plus a
//!   logging-only mock for development

pub mod database;
pub mod email;

use thiserror::Error;

/// Errors raised while constructing or driving infrastructure services.
///
/// Failures inside the repository and mailer implementations surface
/// through the core seams as `DomainError`; this type covers what happens
/// before those seams exist, at wiring time.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Email delivery error: {0}")]
    Email(String),
}
