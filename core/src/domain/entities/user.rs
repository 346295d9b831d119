//! User entity for platform accounts.
//!
//! Accounts are created by an administrator inviting an email address with a
//! role; the invitee later claims the account by completing a credential
//! reset, which assigns the username and password and activates the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a platform account holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Platform administrator
    Admin,
    /// HR staff managing job posts and candidates
    Hr,
    /// Interview panel member
    Panel,
}

impl UserRole {
    /// Database representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Hr => "HR",
            UserRole::Panel => "Panel",
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    /// Account has claimed its credentials and may log in
    Activated,
    /// Account is present but not usable
    Deactivated,
}

impl UserStatus {
    /// Database representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Activated => "Activated",
            UserStatus::Deactivated => "Deactivated",
        }
    }
}

/// A platform account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Email address, unique across accounts
    pub email: String,

    /// Login name, absent until the account is claimed
    pub username: Option<String>,

    /// Password, absent until the account is claimed
    pub password: Option<String>,

    /// Role assigned at invitation time
    pub role: UserRole,

    /// Current account status
    pub status: UserStatus,

    /// Whether the invitee has completed registration
    pub is_registered: bool,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a freshly invited, not-yet-registered account.
    pub fn invited(email: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username: None,
            password: None,
            role,
            status: UserStatus::Deactivated,
            is_registered: false,
            created_at: Utc::now(),
        }
    }

    /// Commits new credentials to the account and activates it.
    ///
    /// This is the mutation a successful credential reset performs.
    pub fn apply_credentials(&mut self, username: String, password: String) {
        self.username = Some(username);
        self.password = Some(password);
        self.is_registered = true;
        self.status = UserStatus::Activated;
    }

    /// Whether the account is activated
    pub fn is_activated(&self) -> bool {
        self.status == UserStatus::Activated
    }
}
