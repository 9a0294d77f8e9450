//! User model for Mirolite.

use chrono::{DateTime, Utc};

/// Default role id assigned at registration (the seeded "member" role).
pub const DEFAULT_ROLE_ID: i64 = 1;

/// User entity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Unique username.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash (never plaintext).
    pub password: String,
    /// Role reference.
    pub role_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password: String,
    /// Role reference.
    pub role_id: i64,
}

impl NewUser {
    /// Create a new user record with the default member role.
    ///
    /// `password` must already be hashed; repositories never hash.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role_id: DEFAULT_ROLE_ID,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role_id: i64) -> Self {
        self.role_id = role_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = NewUser::new("alice", "alice@example.com", "$argon2id$hash");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role_id, DEFAULT_ROLE_ID);
    }

    #[test]
    fn test_new_user_with_role() {
        let user = NewUser::new("bob", "bob@example.com", "hash").with_role(2);
        assert_eq!(user.role_id, 2);
    }
}
