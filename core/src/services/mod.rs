//! Business services

pub mod reset;

pub use reset::{
    OtpRegistry, ResetChallengeIssued, ResetMailer, ResetService, ResetServiceConfig,
};
