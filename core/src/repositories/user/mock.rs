//! Mock implementation of UserRepository for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository keeping accounts in memory, keyed by email
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    fail_updates: bool,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail_updates: false,
        }
    }

    /// Create a mock whose `update_credentials` always fails, for testing
    /// store-failure paths
    pub fn failing_updates() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail_updates: true,
        }
    }

    /// Seed an account
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.email.clone(), user);
    }

    /// Fetch an account by email, for test assertions
    pub async fn get(&self, email: &str) -> Option<User> {
        self.users.read().await.get(email).cloned()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.contains_key(email))
    }

    async fn is_username_taken(
        &self,
        username: &str,
        excluding_email: &str,
    ) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| {
            u.email != excluding_email && u.username.as_deref() == Some(username)
        }))
    }

    async fn update_credentials(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), DomainError> {
        if self.fail_updates {
            return Err(DomainError::Database {
                message: "simulated store failure".to_string(),
            });
        }

        let mut users = self.users.write().await;
        match users.get_mut(email) {
            Some(user) => {
                user.apply_credentials(username.to_string(), password.to_string());
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
        }
    }
}
