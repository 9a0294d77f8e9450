//! Board, element and permission handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::board::BoardService;
use crate::web::dto::{
    BoardDetailResponse, BoardResponse, CreateBoardRequest, CreateBoardResponse,
    CreateElementRequest, CreateElementResponse, ElementResponse, MessageResponse,
    PermissionResponse, ShareBoardRequest, UpdateBoardRequest, UpdateElementRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::auth::AppState;

/// GET /api/v1/protected/boards - Boards owned by or shared with the user.
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let boards = BoardService::new(&state.db)
        .list_boards(auth.user_id())
        .await?;

    Ok(Json(boards.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/protected/boards - Create a board.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBoardRequest>,
) -> Result<(StatusCode, Json<CreateBoardResponse>), ApiError> {
    let board = BoardService::new(&state.db)
        .create_board(auth.user_id(), &req.title, &req.description, req.is_public)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBoardResponse { board_id: board.id }),
    ))
}

/// GET /api/v1/protected/boards/:id - Board with its elements.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<Json<BoardDetailResponse>, ApiError> {
    let detail = BoardService::new(&state.db)
        .get_board(auth.user_id(), board_id)
        .await?;

    Ok(Json(detail.into()))
}

/// PUT /api/v1/protected/boards/:id - Update a board.
pub async fn update_board(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateBoardRequest>,
) -> Result<Json<BoardResponse>, ApiError> {
    let board = BoardService::new(&state.db)
        .update_board(auth.user_id(), board_id, req.into())
        .await?;

    Ok(Json(board.into()))
}

/// DELETE /api/v1/protected/boards/:id - Delete a board and its contents.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    BoardService::new(&state.db)
        .delete_board(auth.user_id(), board_id)
        .await?;

    Ok(Json(MessageResponse::new("board deleted")))
}

/// POST /api/v1/protected/boards/:id/elements - Add an element.
pub async fn create_element(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<CreateElementRequest>,
) -> Result<(StatusCode, Json<CreateElementResponse>), ApiError> {
    let element = BoardService::new(&state.db)
        .create_element(auth.user_id(), board_id, req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateElementResponse {
            element_id: element.id,
        }),
    ))
}

/// PUT /api/v1/protected/boards/:id/elements/:element_id - Update an element.
pub async fn update_element(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path((board_id, element_id)): Path<(i64, i64)>,
    ValidatedJson(req): ValidatedJson<UpdateElementRequest>,
) -> Result<Json<ElementResponse>, ApiError> {
    let element = BoardService::new(&state.db)
        .update_element(auth.user_id(), board_id, element_id, req.into())
        .await?;

    Ok(Json(element.into()))
}

/// DELETE /api/v1/protected/boards/:id/elements/:element_id - Remove an element.
pub async fn delete_element(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path((board_id, element_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    BoardService::new(&state.db)
        .delete_element(auth.user_id(), board_id, element_id)
        .await?;

    Ok(Json(MessageResponse::new("element deleted")))
}

/// GET /api/v1/protected/boards/:id/permissions - List grants on a board.
pub async fn list_permissions(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<Json<Vec<PermissionResponse>>, ApiError> {
    let grants = BoardService::new(&state.db)
        .list_permissions(auth.user_id(), board_id)
        .await?;

    Ok(Json(grants.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/protected/boards/:id/permissions - Grant or update access.
pub async fn share_board(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<ShareBoardRequest>,
) -> Result<Json<PermissionResponse>, ApiError> {
    let grant = BoardService::new(&state.db)
        .share_board(auth.user_id(), board_id, req.user_id, req.can_edit)
        .await?;

    Ok(Json(grant.into()))
}

/// DELETE /api/v1/protected/boards/:id/permissions/:user_id - Revoke access.
pub async fn revoke_access(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path((board_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    BoardService::new(&state.db)
        .revoke_access(auth.user_id(), board_id, user_id)
        .await?;

    Ok(Json(MessageResponse::new("permission revoked")))
}
