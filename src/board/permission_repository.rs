//! Permission repository for Mirolite.
//!
//! Explicit (board, user) grants. Uniqueness over (board_id, user_id) is
//! enforced by the schema; re-granting upserts the edit flag.

use chrono::Utc;
use sqlx::SqlitePool;

use super::types::BoardPermission;
use crate::{MiroliteError, Result};

const PERMISSION_COLUMNS: &str = "id, board_id, user_id, can_edit, created_at, updated_at";

/// Repository for board permission grants.
pub struct PermissionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PermissionRepository<'a> {
    /// Create a new PermissionRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Grant a user access to a board, or update an existing grant's edit flag.
    pub async fn upsert(
        &self,
        board_id: i64,
        user_id: i64,
        can_edit: bool,
    ) -> Result<BoardPermission> {
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO board_permissions (board_id, user_id, can_edit, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(board_id, user_id)
             DO UPDATE SET can_edit = excluded.can_edit, updated_at = excluded.updated_at",
        )
        .bind(board_id)
        .bind(user_id)
        .bind(can_edit)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        self.get(board_id, user_id)
            .await?
            .ok_or_else(|| MiroliteError::NotFound("permission".to_string()))
    }

    /// Get the grant for a (board, user) pair, if any.
    pub async fn get(&self, board_id: i64, user_id: i64) -> Result<Option<BoardPermission>> {
        let result = sqlx::query_as::<_, BoardPermission>(&format!(
            "SELECT {PERMISSION_COLUMNS} FROM board_permissions
             WHERE board_id = ? AND user_id = ?"
        ))
        .bind(board_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List all grants on a board.
    pub async fn list_by_board(&self, board_id: i64) -> Result<Vec<BoardPermission>> {
        let rows = sqlx::query_as::<_, BoardPermission>(&format!(
            "SELECT {PERMISSION_COLUMNS} FROM board_permissions WHERE board_id = ?"
        ))
        .bind(board_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Remove a grant. Returns true if one existed.
    pub async fn delete(&self, board_id: i64, user_id: i64) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM board_permissions WHERE board_id = ? AND user_id = ?")
                .bind(board_id)
                .bind(user_id)
                .execute(self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
