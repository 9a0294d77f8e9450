//! Web server for Mirolite.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{AuthConfig, ServerConfig};
use crate::{Database, MiroliteError, Result};

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(server_config: &ServerConfig, auth_config: &AuthConfig, db: Database) -> Result<Self> {
        let addr = format!("{}:{}", server_config.host, server_config.port)
            .parse()
            .map_err(|e| MiroliteError::Config(format!("invalid server address: {e}")))?;

        let app_state = AppState::new(
            db,
            &auth_config.jwt_secret,
            auth_config.token_expiry_secs,
        );

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            cors_origins: server_config.cors_origins.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(&self) -> axum::Router {
        create_router(self.app_state.clone(), &self.cors_origins).merge(create_health_router())
    }

    /// Run the web server.
    pub async fn run(self) -> std::io::Result<()> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// Useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::io::Result<SocketAddr> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
