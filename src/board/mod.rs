//! Board domain for Mirolite.
//!
//! Boards are shared canvases owned by their creator, carrying positioned
//! elements and per-user permission grants. The service layer enforces
//! authorization; repositories are plain storage.

pub mod access;
pub mod element_repository;
pub mod permission_repository;
pub mod repository;
pub mod service;
pub mod types;

pub use access::AccessPolicy;
pub use element_repository::ElementRepository;
pub use permission_repository::PermissionRepository;
pub use repository::BoardRepository;
pub use service::{BoardService, BoardWithElements, MAX_TITLE_LENGTH};
pub use types::{
    Board, BoardElement, BoardPermission, BoardUpdate, ElementUpdate, NewBoard, NewElement,
};
