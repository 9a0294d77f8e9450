//! Registration and login for Mirolite.

use crate::db::{Database, NewUser, User, UserRepository};
use crate::{MiroliteError, Result};

use super::password::{hash_password, validate_password, verify_password};
use super::token::TokenSigner;

/// Maximum username length (in characters).
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Validate a username.
fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(MiroliteError::Validation(
            "username is required".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(MiroliteError::Validation(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an email address.
///
/// Deliberately loose: uniqueness is the real constraint, this only rejects
/// obviously broken input.
fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(MiroliteError::Validation(
            "a valid email address is required".to_string(),
        ));
    }
    Ok(())
}

/// Authentication service: credential verification and token issuance.
pub struct AuthService<'a> {
    db: &'a Database,
    signer: &'a TokenSigner,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService.
    pub fn new(db: &'a Database, signer: &'a TokenSigner) -> Self {
        Self { db, signer }
    }

    /// Register a new user.
    ///
    /// Fails with `Conflict` if the username or email is already taken.
    /// Only an irreversible salted hash of the password is stored.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        validate_username(username)?;
        validate_email(email)?;
        validate_password(password)
            .map_err(|e| MiroliteError::Validation(e.to_string()))?;

        let hash = hash_password(password)
            .map_err(|e| MiroliteError::Validation(e.to_string()))?;

        let repo = UserRepository::new(self.db.pool());
        if repo.username_exists(username).await? {
            return Err(MiroliteError::Conflict("username already taken".to_string()));
        }
        if repo.email_exists(email).await? {
            return Err(MiroliteError::Conflict(
                "email already registered".to_string(),
            ));
        }

        // The UNIQUE constraints remain the backstop for concurrent registration.
        repo.create(&NewUser::new(username, email, hash)).await
    }

    /// Verify credentials and issue an access token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let repo = UserRepository::new(self.db.pool());
        let user = repo
            .get_by_email(email)
            .await?
            .ok_or_else(|| MiroliteError::Auth("invalid credentials".to_string()))?;

        verify_password(password, &user.password)
            .map_err(|_| MiroliteError::Auth("invalid credentials".to_string()))?;

        self.signer.issue(&user)
    }

    /// Validate a bearer token and extract the identity claims.
    pub fn authenticate(&self, token: &str) -> Result<super::token::Claims> {
        self.signer.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup() -> (Database, TokenSigner) {
        let db = Database::open_in_memory().await.unwrap();
        let signer = TokenSigner::new("test-secret", 3600);
        (db, signer)
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let (db, signer) = setup().await;
        let auth = AuthService::new(&db, &signer);

        let user = auth
            .register("alice", "alice@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        // Stored credential is a hash, never the plaintext
        assert!(user.password.starts_with("$argon2id$"));

        let token = auth.login("alice@example.com", "password123").await.unwrap();
        let claims = auth.authenticate(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let (db, signer) = setup().await;
        let auth = AuthService::new(&db, &signer);

        auth.register("alice", "alice@example.com", "password123")
            .await
            .unwrap();
        let result = auth
            .register("alice", "other@example.com", "password123")
            .await;
        assert!(matches!(result, Err(MiroliteError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (db, signer) = setup().await;
        let auth = AuthService::new(&db, &signer);

        auth.register("alice", "alice@example.com", "password123")
            .await
            .unwrap();
        let result = auth
            .register("bob", "alice@example.com", "password123")
            .await;
        assert!(matches!(result, Err(MiroliteError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_invalid_input() {
        let (db, signer) = setup().await;
        let auth = AuthService::new(&db, &signer);

        let result = auth.register("", "alice@example.com", "password123").await;
        assert!(matches!(result, Err(MiroliteError::Validation(_))));

        let result = auth.register("alice", "not-an-email", "password123").await;
        assert!(matches!(result, Err(MiroliteError::Validation(_))));

        let result = auth.register("alice", "alice@example.com", "short").await;
        assert!(matches!(result, Err(MiroliteError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_failures_indistinguishable() {
        let (db, signer) = setup().await;
        let auth = AuthService::new(&db, &signer);

        auth.register("alice", "alice@example.com", "password123")
            .await
            .unwrap();

        let wrong_password = auth.login("alice@example.com", "wrongpassword").await;
        let unknown_email = auth.login("nobody@example.com", "password123").await;

        let msg_a = wrong_password.unwrap_err().to_string();
        let msg_b = unknown_email.unwrap_err().to_string();
        assert_eq!(msg_a, msg_b);
    }
}
