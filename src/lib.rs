//! Mirolite - a lightweight collaborative whiteboard backend.
//!
//! Users register and log in with email and password, create boards,
//! place positioned elements on them, and share boards with other users
//! through per-user permission grants. Served as a JSON REST API.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, validate_password, verify_password, AuthService, Claims, PasswordError,
    TokenSigner,
};
pub use board::{
    AccessPolicy, Board, BoardElement, BoardPermission, BoardRepository, BoardService,
    BoardUpdate, BoardWithElements, ElementRepository, ElementUpdate, NewBoard, NewElement,
    PermissionRepository,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{MiroliteError, Result};
pub use web::WebServer;
