//! Access control evaluation for boards.
//!
//! Pure read-only checks; callers confirm board existence first (an absent
//! board is a NotFound, surfaced before any permission denial). Each check
//! costs one permission lookup, so callers batch where possible.

use sqlx::SqlitePool;

use super::permission_repository::PermissionRepository;
use super::types::Board;
use crate::Result;

/// Decides whether a user may view or edit a board.
pub struct AccessPolicy<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AccessPolicy<'a> {
    /// Create a new AccessPolicy with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether the user may view the board.
    ///
    /// True if the user is the creator, the board is public, or any
    /// permission row exists for (board, user) regardless of its edit flag.
    pub async fn can_view(&self, user_id: i64, board: &Board) -> Result<bool> {
        if board.creator_id == user_id || board.is_public {
            return Ok(true);
        }

        let grant = PermissionRepository::new(self.pool)
            .get(board.id, user_id)
            .await?;
        Ok(grant.is_some())
    }

    /// Whether the user may edit the board.
    ///
    /// True if the user is the creator, or a permission row exists with
    /// `can_edit = true`. A read-only grant denies edit.
    pub async fn can_edit(&self, user_id: i64, board: &Board) -> Result<bool> {
        if board.creator_id == user_id {
            return Ok(true);
        }

        let grant = PermissionRepository::new(self.pool)
            .get(board.id, user_id)
            .await?;
        Ok(grant.map(|g| g.can_edit).unwrap_or(false))
    }
}
