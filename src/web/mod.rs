//! Web API module for Mirolite.
//!
//! REST interface over the auth and board services, served with axum.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
