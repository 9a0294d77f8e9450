//! Element repository for Mirolite.
//!
//! CRUD for positioned canvas elements, always scoped to their board.

use chrono::Utc;
use sqlx::SqlitePool;

use super::types::{BoardElement, ElementUpdate, NewElement};
use crate::{MiroliteError, Result};

const ELEMENT_COLUMNS: &str = "id, board_id, type, content, position_x, position_y, \
                               width, height, created_at, updated_at";

/// Repository for board element CRUD operations.
pub struct ElementRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ElementRepository<'a> {
    /// Create a new ElementRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new element on a board.
    pub async fn create(&self, board_id: i64, new_element: &NewElement) -> Result<BoardElement> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO board_elements
                 (board_id, type, content, position_x, position_y, width, height,
                  created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(board_id)
        .bind(&new_element.element_type)
        .bind(&new_element.content)
        .bind(new_element.position_x)
        .bind(new_element.position_y)
        .bind(new_element.width)
        .bind(new_element.height)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get(board_id, id)
            .await?
            .ok_or_else(|| MiroliteError::NotFound("element".to_string()))
    }

    /// Get an element by ID, only if it belongs to the given board.
    ///
    /// An element ID valid on a different board yields None.
    pub async fn get(&self, board_id: i64, element_id: i64) -> Result<Option<BoardElement>> {
        let result = sqlx::query_as::<_, BoardElement>(&format!(
            "SELECT {ELEMENT_COLUMNS} FROM board_elements WHERE id = ? AND board_id = ?"
        ))
        .bind(element_id)
        .bind(board_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List all elements of a board, in storage order.
    pub async fn list_by_board(&self, board_id: i64) -> Result<Vec<BoardElement>> {
        let rows = sqlx::query_as::<_, BoardElement>(&format!(
            "SELECT {ELEMENT_COLUMNS} FROM board_elements WHERE board_id = ?"
        ))
        .bind(board_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Update an element scoped to its board.
    ///
    /// All mutable fields are overwritten unconditionally and `updated_at`
    /// is refreshed. Returns the updated element, or None if no element
    /// with that ID exists on the board.
    pub async fn update(
        &self,
        board_id: i64,
        element_id: i64,
        update: &ElementUpdate,
    ) -> Result<Option<BoardElement>> {
        let result = sqlx::query(
            "UPDATE board_elements
             SET type = ?, content = ?, position_x = ?, position_y = ?,
                 width = ?, height = ?, updated_at = ?
             WHERE id = ? AND board_id = ?",
        )
        .bind(&update.element_type)
        .bind(&update.content)
        .bind(update.position_x)
        .bind(update.position_y)
        .bind(update.width)
        .bind(update.height)
        .bind(Utc::now())
        .bind(element_id)
        .bind(board_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(board_id, element_id).await
    }

    /// Delete an element scoped to its board.
    ///
    /// Returns true if an element was deleted.
    pub async fn delete(&self, board_id: i64, element_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM board_elements WHERE id = ? AND board_id = ?")
            .bind(element_id)
            .bind(board_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count elements on a board.
    pub async fn count_by_board(&self, board_id: i64) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM board_elements WHERE board_id = ?")
                .bind(board_id)
                .fetch_one(self.pool)
                .await?;
        Ok(count.0)
    }
}
