//! User repository for Mirolite.
//!
//! This module provides CRUD operations for users in the database.

use chrono::Utc;
use sqlx::SqlitePool;

use super::user::{NewUser, User};
use crate::{MiroliteError, Result};

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns the created user with the assigned ID. A unique-constraint
    /// violation on username or email surfaces as `Conflict`.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (username, email, password, role_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .bind(new_user.role_id)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                MiroliteError::Conflict("username or email already taken".to_string())
            } else {
                MiroliteError::Database(e.to_string())
            }
        })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| MiroliteError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, role_id, created_at, updated_at
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Get a user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, role_id, created_at, updated_at
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Get a user by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, role_id, created_at, updated_at
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Check if a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: (i64,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
                .bind(username)
                .fetch_one(self.pool)
                .await?;
        Ok(exists.0 != 0)
    }

    /// Check if an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: (i64,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(email)
            .fetch_one(self.pool)
            .await?;
        Ok(exists.0 != 0)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role_id, 1);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();
        let result = repo
            .create(&NewUser::new("alice", "other@example.com", "hash"))
            .await;

        assert!(matches!(result, Err(MiroliteError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();
        let result = repo
            .create(&NewUser::new("bob", "alice@example.com", "hash"))
            .await;

        assert!(matches!(result, Err(MiroliteError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let created = repo
            .create(&NewUser::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().username, "alice");

        let not_found = repo.get_by_id(999).await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();

        let found = repo.get_by_email("alice@example.com").await.unwrap();
        assert!(found.is_some());

        let not_found = repo.get_by_email("nobody@example.com").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_exists_helpers() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        assert!(!repo.username_exists("alice").await.unwrap());
        assert!(!repo.email_exists("alice@example.com").await.unwrap());

        repo.create(&NewUser::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();

        assert!(repo.username_exists("alice").await.unwrap());
        assert!(repo.email_exists("alice@example.com").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
