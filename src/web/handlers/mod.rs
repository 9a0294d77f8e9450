//! HTTP handlers for the Mirolite web API.

pub mod auth;
pub mod board;

pub use auth::{login, profile, register, AppState};
pub use board::{
    create_board, create_element, delete_board, delete_element, get_board, list_boards,
    list_permissions, revoke_access, share_board, update_board, update_element,
};
