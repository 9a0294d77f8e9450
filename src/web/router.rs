//! Router configuration for the Mirolite web API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_board, create_element, delete_board, delete_element, get_board, list_boards,
    list_permissions, login, profile, register, revoke_access, share_board, update_board,
    update_element, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    // Protected routes; handlers require an AuthUser extraction
    let protected_routes = Router::new()
        .route("/profile", get(profile))
        .route("/boards", get(list_boards).post(create_board))
        .route(
            "/boards/:id",
            get(get_board).put(update_board).delete(delete_board),
        )
        .route("/boards/:id/elements", post(create_element))
        .route(
            "/boards/:id/elements/:element_id",
            put(update_element).delete(delete_element),
        )
        .route(
            "/boards/:id/permissions",
            get(list_permissions).post(share_board),
        )
        .route("/boards/:id/permissions/:user_id", axum::routing::delete(revoke_access));

    let api_routes = Router::new()
        .merge(public_routes)
        .nest("/protected", protected_routes);

    // Clone the signer for the middleware closure
    let signer = app_state.signer.clone();

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let signer = signer.clone();
                    jwt_auth(signer, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
