//! Types for reset service results

use chrono::{DateTime, Utc};

/// Result of a successful reset request
#[derive(Debug, Clone)]
pub struct ResetChallengeIssued {
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
}
