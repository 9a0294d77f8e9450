//! JWT authentication middleware.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{Claims, TokenSigner};
use crate::web::error::ApiError;

/// Extractor for authenticated users.
///
/// Use this extractor to require authentication for a handler.
/// The handler will receive the verified token claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The authenticated user's ID.
    pub fn user_id(&self) -> i64 {
        self.0.sub
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|header| header.strip_prefix("Bearer "))
                .ok_or_else(|| ApiError::unauthorized("Missing authorization"))?;

            // Signer is injected into extensions by the jwt_auth middleware
            let signer = parts
                .extensions
                .get::<Arc<TokenSigner>>()
                .ok_or_else(|| ApiError::internal("Token signer not configured"))?;

            let claims = signer.verify(token)?;
            Ok(AuthUser(claims))
        })
    }
}

/// Middleware function to inject the token signer into request extensions.
pub async fn jwt_auth(
    signer: Arc<TokenSigner>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(signer);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{User, DEFAULT_ROLE_ID};
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hash".to_string(),
            role_id: DEFAULT_ROLE_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let signer = TokenSigner::new("test-secret", 3600);
        let token = signer.issue(&test_user()).unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "alice@example.com");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = TokenSigner::new("secret1", 3600);
        let token = signer.issue(&test_user()).unwrap();

        let other = TokenSigner::new("secret2", 3600);
        assert!(other.verify(&token).is_err());
    }
}
