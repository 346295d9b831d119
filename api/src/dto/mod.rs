//! Request and response data transfer objects

pub mod reset;

pub use reset::{ResetCredentialsRequest, SendOtpRequest, VerifyOtpRequest};
