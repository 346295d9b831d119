//! MySQL implementation of the UserRepository trait.
//!
//! Concrete credential-store access for the reset workflow. Passwords are
//! hashed with bcrypt before they reach the database; the raw secret is
//! never persisted.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use hl_core::domain::entities::user::UserStatus;
use hl_core::errors::DomainError;
use hl_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE email = ?
            ) as user_exists
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check user existence: {}", e),
            })?;

        let exists: i8 = row.try_get("user_exists").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence result: {}", e),
        })?;

        Ok(exists == 1)
    }

    async fn is_username_taken(
        &self,
        username: &str,
        excluding_email: &str,
    ) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE username = ? AND email != ?
            ) as name_taken
        "#;

        let row = sqlx::query(query)
            .bind(username)
            .bind(excluding_email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check username collision: {}", e),
            })?;

        let taken: i8 = row.try_get("name_taken").map_err(|e| DomainError::Database {
            message: format!("Failed to get collision result: {}", e),
        })?;

        Ok(taken == 1)
    }

    async fn update_credentials(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), DomainError> {
        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })?;

        let query = r#"
            UPDATE users
            SET username = ?,
                user_password = ?,
                is_registered = TRUE,
                user_status = ?
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .bind(&password_hash)
            .bind(UserStatus::Activated.as_str())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update credentials: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(())
    }
}
