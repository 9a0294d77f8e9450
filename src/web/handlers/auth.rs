//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::auth::{AuthService, TokenSigner};
use crate::db::UserRepository;
use crate::web::dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Token signer, shared with the auth middleware.
    pub signer: Arc<TokenSigner>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, token_expiry_secs: u64) -> Self {
        Self {
            db,
            signer: Arc::new(TokenSigner::new(jwt_secret, token_expiry_secs)),
        }
    }
}

/// POST /api/v1/register - User registration.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let service = AuthService::new(&state.db, &state.signer);
    let user = service
        .register(&req.username, &req.email, &req.password)
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user_id: user.id }),
    ))
}

/// POST /api/v1/login - User login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let service = AuthService::new(&state.db, &state.signer);
    let token = service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse { token }))
}

/// GET /api/v1/protected/profile - Current user profile.
pub async fn profile(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = UserRepository::new(state.db.pool())
        .get_by_id(auth.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    Ok(Json(user.into()))
}
