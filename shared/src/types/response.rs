//! API response envelopes

use serde::{Deserialize, Serialize};

/// Plain success/message envelope returned by the account-recovery endpoints.
///
/// The web client only inspects `success` and displays `message`, so every
/// endpoint answers with this exact shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,
}

impl ApiMessage {
    /// Create a successful response
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failed response
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
