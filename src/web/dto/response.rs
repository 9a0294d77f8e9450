//! Response DTOs for the Mirolite web API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{Board, BoardElement, BoardPermission, BoardWithElements};
use crate::db::User;

/// Registration response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// ID of the newly created user.
    pub user_id: i64,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed access token (JWT).
    pub token: String,
}

/// Current user profile response.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Role reference.
    pub role_id: i64,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role_id: user.role_id,
            created_at: user.created_at,
        }
    }
}

/// Board creation response.
#[derive(Debug, Serialize)]
pub struct CreateBoardResponse {
    /// ID of the newly created board.
    pub board_id: i64,
}

/// Element creation response.
#[derive(Debug, Serialize)]
pub struct CreateElementResponse {
    /// ID of the newly created element.
    pub element_id: i64,
}

/// Confirmation message for deletions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Create a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Board in responses.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Board ID.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
    /// Owning user.
    pub creator_id: i64,
    /// Visibility flag.
    pub is_public: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            description: board.description,
            creator_id: board.creator_id,
            is_public: board.is_public,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

/// Board detail response: the board plus its elements.
#[derive(Debug, Serialize)]
pub struct BoardDetailResponse {
    /// The board.
    #[serde(flatten)]
    pub board: BoardResponse,
    /// Elements on the board.
    pub elements: Vec<ElementResponse>,
}

impl From<BoardWithElements> for BoardDetailResponse {
    fn from(detail: BoardWithElements) -> Self {
        Self {
            board: detail.board.into(),
            elements: detail.elements.into_iter().map(Into::into).collect(),
        }
    }
}

/// Element in responses.
#[derive(Debug, Serialize)]
pub struct ElementResponse {
    /// Element ID.
    pub id: i64,
    /// Owning board.
    pub board_id: i64,
    /// Type tag.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Content.
    pub content: String,
    /// X coordinate.
    pub position_x: i64,
    /// Y coordinate.
    pub position_y: i64,
    /// Width.
    pub width: i64,
    /// Height.
    pub height: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<BoardElement> for ElementResponse {
    fn from(element: BoardElement) -> Self {
        Self {
            id: element.id,
            board_id: element.board_id,
            element_type: element.element_type,
            content: element.content,
            position_x: element.position_x,
            position_y: element.position_y,
            width: element.width,
            height: element.height,
            created_at: element.created_at,
            updated_at: element.updated_at,
        }
    }
}

/// Permission grant in responses.
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    /// Grant ID.
    pub id: i64,
    /// Board the grant applies to.
    pub board_id: i64,
    /// User the grant applies to.
    pub user_id: i64,
    /// Whether the grant allows editing.
    pub can_edit: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<BoardPermission> for PermissionResponse {
    fn from(grant: BoardPermission) -> Self {
        Self {
            id: grant.id,
            board_id: grant.board_id,
            user_id: grant.user_id,
            can_edit: grant.can_edit,
            created_at: grant.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_response_serializes_type_tag() {
        let element = BoardElement {
            id: 1,
            board_id: 2,
            element_type: "note".to_string(),
            content: "hi".to_string(),
            position_x: 0,
            position_y: 0,
            width: 10,
            height: 10,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(ElementResponse::from(element)).unwrap();
        assert_eq!(json["type"], "note");
        assert!(json.get("element_type").is_none());
    }

    #[test]
    fn test_creation_responses_use_id_keys() {
        let json = serde_json::to_value(CreateBoardResponse { board_id: 3 }).unwrap();
        assert_eq!(json["board_id"], 3);
        assert!(json.get("id").is_none());

        let json = serde_json::to_value(CreateElementResponse { element_id: 5 }).unwrap();
        assert_eq!(json["element_id"], 5);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_profile_response_omits_password() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "$argon2id$secret".to_string(),
            role_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&ProfileResponse::from(user)).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }
}
