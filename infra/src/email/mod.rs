//! Email delivery - SMTP and mock implementations of the mail channel

mod mock;
mod smtp;

pub use mock::MockMailer;
pub use smtp::SmtpMailer;
