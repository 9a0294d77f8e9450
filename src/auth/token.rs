//! JWT access token issuance and verification.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::db::User;
use crate::{MiroliteError, Result};

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 86400;

/// Identity claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: i64,
    /// Email address.
    pub email: String,
    /// Role reference.
    pub role_id: i64,
    /// Issued at timestamp (unix seconds).
    pub iat: u64,
    /// Expiration timestamp (unix seconds).
    pub exp: u64,
}

/// Signs and verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl TokenSigner {
    /// Create a signer from a shared secret.
    pub fn new(secret: &str, expiry_secs: u64) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_secs,
        }
    }

    /// Issue a signed token binding the user's identity claims.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role_id: user.role_id,
            iat: now,
            exp: now + self.expiry_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            MiroliteError::Auth("failed to generate token".to_string())
        })
    }

    /// Verify a token and extract its claims.
    ///
    /// Fails if the signature is invalid, the token is expired, or it is
    /// otherwise malformed.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("JWT validation failed: {}", e);
                MiroliteError::Auth("invalid or expired token".to_string())
            })
    }
}
