//! Board service for Mirolite.
//!
//! High-level board and element operations with built-in authorization.
//! Every operation takes the authenticated user id as an explicit argument;
//! nothing is pulled from ambient request state.

use crate::db::{Database, UserRepository};
use crate::{MiroliteError, Result};

use super::access::AccessPolicy;
use super::element_repository::ElementRepository;
use super::permission_repository::PermissionRepository;
use super::repository::BoardRepository;
use super::types::{
    Board, BoardElement, BoardPermission, BoardUpdate, ElementUpdate, NewBoard, NewElement,
};

/// Maximum length for board titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Validate a board title.
fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(MiroliteError::Validation("title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(MiroliteError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an element type tag.
fn validate_element_type(element_type: &str) -> Result<()> {
    if element_type.trim().is_empty() {
        return Err(MiroliteError::Validation(
            "element type is required".to_string(),
        ));
    }
    Ok(())
}

/// A board together with its elements, as returned by [`BoardService::get_board`].
#[derive(Debug, Clone)]
pub struct BoardWithElements {
    /// The board.
    pub board: Board,
    /// All elements on the board, in storage order.
    pub elements: Vec<BoardElement>,
}

/// Service for board operations with authorization checks.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Fetch a board or fail with NotFound.
    ///
    /// Existence is always confirmed before any permission check, so an
    /// absent board is a 404 rather than a 403.
    async fn require_board(&self, board_id: i64) -> Result<Board> {
        BoardRepository::new(self.db.pool())
            .get_by_id(board_id)
            .await?
            .ok_or_else(|| MiroliteError::NotFound("board".to_string()))
    }

    /// Fetch a board and require edit rights on it.
    async fn require_editable_board(&self, user_id: i64, board_id: i64) -> Result<Board> {
        let board = self.require_board(board_id).await?;
        let policy = AccessPolicy::new(self.db.pool());
        if !policy.can_edit(user_id, &board).await? {
            return Err(MiroliteError::Permission(
                "no edit rights on this board".to_string(),
            ));
        }
        Ok(board)
    }

    /// Fetch a board and require the user to be its creator.
    async fn require_owned_board(&self, user_id: i64, board_id: i64) -> Result<Board> {
        let board = self.require_board(board_id).await?;
        if board.creator_id != user_id {
            return Err(MiroliteError::Permission(
                "only the board creator may do this".to_string(),
            ));
        }
        Ok(board)
    }

    /// Create a board. Any authenticated user may create; the caller
    /// becomes the immutable creator.
    pub async fn create_board(
        &self,
        user_id: i64,
        title: &str,
        description: &str,
        is_public: bool,
    ) -> Result<Board> {
        validate_title(title)?;

        let new_board = NewBoard::new(title, user_id)
            .with_description(description)
            .with_public(is_public);
        BoardRepository::new(self.db.pool()).create(&new_board).await
    }

    /// List boards the user created plus boards shared with them through an
    /// explicit grant.
    ///
    /// Public boards the user neither owns nor was granted are not listed;
    /// listing is permission-scoped, not visibility-scoped.
    pub async fn list_boards(&self, user_id: i64) -> Result<Vec<Board>> {
        let repo = BoardRepository::new(self.db.pool());
        let mut boards = repo.list_by_creator(user_id).await?;
        boards.extend(repo.list_shared_with(user_id).await?);
        Ok(boards)
    }

    /// Get a board and all its elements.
    ///
    /// Fails with NotFound if the board does not exist or the user may not
    /// view it.
    pub async fn get_board(&self, user_id: i64, board_id: i64) -> Result<BoardWithElements> {
        let board = self.require_board(board_id).await?;

        let policy = AccessPolicy::new(self.db.pool());
        if !policy.can_view(user_id, &board).await? {
            return Err(MiroliteError::NotFound("board".to_string()));
        }

        let elements = ElementRepository::new(self.db.pool())
            .list_by_board(board_id)
            .await?;
        Ok(BoardWithElements { board, elements })
    }

    /// Update a board. Requires edit rights; overwrites title, description
    /// and visibility unconditionally.
    pub async fn update_board(
        &self,
        user_id: i64,
        board_id: i64,
        update: BoardUpdate,
    ) -> Result<Board> {
        validate_title(&update.title)?;
        self.require_editable_board(user_id, board_id).await?;

        BoardRepository::new(self.db.pool())
            .update(board_id, &update)
            .await?
            .ok_or_else(|| MiroliteError::NotFound("board".to_string()))
    }

    /// Delete a board with all its elements and permission grants.
    ///
    /// Delete rights are stricter than edit rights: only the creator may
    /// delete, regardless of any grant.
    pub async fn delete_board(&self, user_id: i64, board_id: i64) -> Result<()> {
        self.require_owned_board(user_id, board_id).await?;

        let deleted = BoardRepository::new(self.db.pool())
            .delete_cascade(board_id)
            .await?;
        if !deleted {
            return Err(MiroliteError::NotFound("board".to_string()));
        }

        tracing::info!(board_id, user_id, "board deleted");
        Ok(())
    }

    /// Create an element on a board. Requires edit rights.
    pub async fn create_element(
        &self,
        user_id: i64,
        board_id: i64,
        new_element: NewElement,
    ) -> Result<BoardElement> {
        validate_element_type(&new_element.element_type)?;
        self.require_editable_board(user_id, board_id).await?;

        ElementRepository::new(self.db.pool())
            .create(board_id, &new_element)
            .await
    }

    /// Update an element. Requires edit rights on the board; the element
    /// must exist and belong to the given board.
    pub async fn update_element(
        &self,
        user_id: i64,
        board_id: i64,
        element_id: i64,
        update: ElementUpdate,
    ) -> Result<BoardElement> {
        validate_element_type(&update.element_type)?;
        self.require_editable_board(user_id, board_id).await?;

        ElementRepository::new(self.db.pool())
            .update(board_id, element_id, &update)
            .await?
            .ok_or_else(|| MiroliteError::NotFound("element".to_string()))
    }

    /// Delete an element. Requires edit rights on the board; the element
    /// must exist and belong to the given board.
    pub async fn delete_element(
        &self,
        user_id: i64,
        board_id: i64,
        element_id: i64,
    ) -> Result<()> {
        self.require_editable_board(user_id, board_id).await?;

        let deleted = ElementRepository::new(self.db.pool())
            .delete(board_id, element_id)
            .await?;
        if !deleted {
            return Err(MiroliteError::NotFound("element".to_string()));
        }
        Ok(())
    }

    /// Grant a user access to a board, or update an existing grant.
    ///
    /// Creator-only. The creator's own rights are implicit and cannot be
    /// represented (or revoked) by a grant row.
    pub async fn share_board(
        &self,
        user_id: i64,
        board_id: i64,
        target_user_id: i64,
        can_edit: bool,
    ) -> Result<BoardPermission> {
        let board = self.require_owned_board(user_id, board_id).await?;

        if target_user_id == board.creator_id {
            return Err(MiroliteError::Validation(
                "the creator already has full access".to_string(),
            ));
        }

        let target = UserRepository::new(self.db.pool())
            .get_by_id(target_user_id)
            .await?;
        if target.is_none() {
            return Err(MiroliteError::NotFound("user".to_string()));
        }

        PermissionRepository::new(self.db.pool())
            .upsert(board_id, target_user_id, can_edit)
            .await
    }

    /// Revoke a user's grant on a board. Creator-only.
    pub async fn revoke_access(
        &self,
        user_id: i64,
        board_id: i64,
        target_user_id: i64,
    ) -> Result<()> {
        self.require_owned_board(user_id, board_id).await?;

        let deleted = PermissionRepository::new(self.db.pool())
            .delete(board_id, target_user_id)
            .await?;
        if !deleted {
            return Err(MiroliteError::NotFound("permission".to_string()));
        }
        Ok(())
    }

    /// List all grants on a board. Creator-only.
    pub async fn list_permissions(
        &self,
        user_id: i64,
        board_id: i64,
    ) -> Result<Vec<BoardPermission>> {
        self.require_owned_board(user_id, board_id).await?;

        PermissionRepository::new(self.db.pool())
            .list_by_board(board_id)
            .await
    }
}
