//! Board repository for Mirolite.
//!
//! This module provides CRUD operations for boards and the cascading
//! delete transaction.

use chrono::Utc;
use sqlx::SqlitePool;

use super::types::{Board, BoardUpdate, NewBoard};
use crate::{MiroliteError, Result};

const BOARD_COLUMNS: &str =
    "id, title, description, creator_id, is_public, created_at, updated_at";

/// Repository for board CRUD operations.
pub struct BoardRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new board in the database.
    ///
    /// Returns the created board with the assigned ID.
    pub async fn create(&self, new_board: &NewBoard) -> Result<Board> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO boards (title, description, creator_id, is_public, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_board.title)
        .bind(&new_board.description)
        .bind(new_board.creator_id)
        .bind(new_board.is_public)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| MiroliteError::NotFound("board".to_string()))
    }

    /// Get a board by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Board>> {
        let result = sqlx::query_as::<_, Board>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List boards created by a user, in storage order.
    pub async fn list_by_creator(&self, user_id: i64) -> Result<Vec<Board>> {
        let rows = sqlx::query_as::<_, Board>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE creator_id = ?"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// List boards shared with a user through an explicit permission row,
    /// excluding boards the user created.
    pub async fn list_shared_with(&self, user_id: i64) -> Result<Vec<Board>> {
        let rows = sqlx::query_as::<_, Board>(
            "SELECT b.id, b.title, b.description, b.creator_id, b.is_public,
                    b.created_at, b.updated_at
             FROM boards b
             JOIN board_permissions bp ON b.id = bp.board_id
             WHERE bp.user_id = ? AND b.creator_id != ?",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Update a board by ID.
    ///
    /// All mutable fields are overwritten unconditionally and `updated_at`
    /// is refreshed. Returns the updated board, or None if not found.
    pub async fn update(&self, id: i64, update: &BoardUpdate) -> Result<Option<Board>> {
        let result = sqlx::query(
            "UPDATE boards SET title = ?, description = ?, is_public = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.is_public)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a board together with all its elements and permission grants.
    ///
    /// Runs as a single transaction; any failure rolls the whole cascade
    /// back and the board remains intact. Child rows go first so the
    /// foreign keys never see an orphan. Returns true if the board existed.
    pub async fn delete_cascade(&self, id: i64) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await?;

        sqlx::query("DELETE FROM board_elements WHERE board_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM board_permissions WHERE board_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all boards.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM boards")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewUser, UserRepository};
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    async fn create_user(db: &Database, name: &str) -> i64 {
        let repo = UserRepository::new(db.pool());
        repo.create(&NewUser::new(name, format!("{name}@example.com"), "hash"))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_board() {
        let db = setup_db().await;
        let user = create_user(&db, "alice").await;
        let repo = BoardRepository::new(db.pool());

        let board = repo.create(&NewBoard::new("roadmap", user)).await.unwrap();

        assert_eq!(board.id, 1);
        assert_eq!(board.title, "roadmap");
        assert_eq!(board.creator_id, user);
        assert!(!board.is_public);
        assert_eq!(board.created_at, board.updated_at);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = setup_db().await;
        let user = create_user(&db, "alice").await;
        let repo = BoardRepository::new(db.pool());

        let created = repo.create(&NewBoard::new("roadmap", user)).await.unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().title, "roadmap");

        let not_found = repo.get_by_id(999).await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_list_by_creator() {
        let db = setup_db().await;
        let alice = create_user(&db, "alice").await;
        let bob = create_user(&db, "bob").await;
        let repo = BoardRepository::new(db.pool());

        repo.create(&NewBoard::new("a1", alice)).await.unwrap();
        repo.create(&NewBoard::new("a2", alice)).await.unwrap();
        repo.create(&NewBoard::new("b1", bob)).await.unwrap();

        let boards = repo.list_by_creator(alice).await.unwrap();
        assert_eq!(boards.len(), 2);
        assert!(boards.iter().all(|b| b.creator_id == alice));
    }

    #[tokio::test]
    async fn test_list_shared_with() {
        let db = setup_db().await;
        let alice = create_user(&db, "alice").await;
        let bob = create_user(&db, "bob").await;
        let repo = BoardRepository::new(db.pool());

        let shared = repo.create(&NewBoard::new("shared", alice)).await.unwrap();
        repo.create(&NewBoard::new("private", alice)).await.unwrap();
        let own = repo.create(&NewBoard::new("own", bob)).await.unwrap();

        // Grant bob access to alice's board, plus a self-grant on his own
        // board which must not produce a duplicate listing.
        for (board_id, user_id) in [(shared.id, bob), (own.id, bob)] {
            sqlx::query(
                "INSERT INTO board_permissions (board_id, user_id, can_edit, created_at, updated_at)
                 VALUES (?, ?, 0, '2026-01-01', '2026-01-01')",
            )
            .bind(board_id)
            .bind(user_id)
            .execute(db.pool())
            .await
            .unwrap();
        }

        let boards = repo.list_shared_with(bob).await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, shared.id);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let db = setup_db().await;
        let user = create_user(&db, "alice").await;
        let repo = BoardRepository::new(db.pool());

        let board = repo
            .create(
                &NewBoard::new("roadmap", user)
                    .with_description("Q3 planning")
                    .with_public(true),
            )
            .await
            .unwrap();

        let update = BoardUpdate {
            title: "renamed".to_string(),
            description: String::new(),
            is_public: false,
        };
        let updated = repo.update(board.id, &update).await.unwrap().unwrap();

        assert_eq!(updated.title, "renamed");
        // Omitted fields reset: the description is gone
        assert!(updated.description.is_empty());
        assert!(!updated.is_public);
        assert!(updated.updated_at > updated.created_at);
        // Creator is immutable
        assert_eq!(updated.creator_id, user);
    }

    #[tokio::test]
    async fn test_update_nonexistent_board() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        let update = BoardUpdate {
            title: "x".to_string(),
            description: String::new(),
            is_public: false,
        };
        let result = repo.update(999, &update).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascade_removes_children() {
        let db = setup_db().await;
        let alice = create_user(&db, "alice").await;
        let bob = create_user(&db, "bob").await;
        let repo = BoardRepository::new(db.pool());

        let board = repo.create(&NewBoard::new("doomed", alice)).await.unwrap();
        sqlx::query(
            "INSERT INTO board_elements (board_id, type, created_at, updated_at)
             VALUES (?, 'note', '2026-01-01', '2026-01-01')",
        )
        .bind(board.id)
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO board_permissions (board_id, user_id, can_edit, created_at, updated_at)
             VALUES (?, ?, 1, '2026-01-01', '2026-01-01')",
        )
        .bind(board.id)
        .bind(bob)
        .execute(db.pool())
        .await
        .unwrap();

        let deleted = repo.delete_cascade(board.id).await.unwrap();
        assert!(deleted);

        assert!(repo.get_by_id(board.id).await.unwrap().is_none());
        let elements: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM board_elements WHERE board_id = ?")
                .bind(board.id)
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(elements.0, 0);
        let grants: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM board_permissions WHERE board_id = ?")
                .bind(board.id)
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(grants.0, 0);
    }

    #[tokio::test]
    async fn test_delete_cascade_empty_board() {
        let db = setup_db().await;
        let user = create_user(&db, "alice").await;
        let repo = BoardRepository::new(db.pool());

        // Cascade on a board with zero elements/permissions still succeeds
        let board = repo.create(&NewBoard::new("empty", user)).await.unwrap();
        assert!(repo.delete_cascade(board.id).await.unwrap());

        // Deleting again reports the board as gone
        assert!(!repo.delete_cascade(board.id).await.unwrap());
    }
}
