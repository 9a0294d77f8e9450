//! Request DTOs for the Mirolite web API.

use serde::Deserialize;
use validator::Validate;

use crate::board::{BoardUpdate, ElementUpdate, NewElement};

/// User registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Board creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBoardRequest {
    /// Board title.
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    /// Board description.
    #[serde(default)]
    pub description: String,
    /// Visibility flag.
    #[serde(default)]
    pub is_public: bool,
}

/// Board update request. Omitted fields are reset to their defaults.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBoardRequest {
    /// New title.
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    /// New description.
    #[serde(default)]
    pub description: String,
    /// New visibility flag.
    #[serde(default)]
    pub is_public: bool,
}

impl From<UpdateBoardRequest> for BoardUpdate {
    fn from(req: UpdateBoardRequest) -> Self {
        BoardUpdate {
            title: req.title,
            description: req.description,
            is_public: req.is_public,
        }
    }
}

/// Element creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateElementRequest {
    /// Element type tag.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Element type is required"))]
    pub element_type: String,
    /// Element content.
    #[serde(default)]
    pub content: String,
    /// X coordinate.
    #[serde(default)]
    pub position_x: i64,
    /// Y coordinate.
    #[serde(default)]
    pub position_y: i64,
    /// Width.
    #[serde(default)]
    pub width: i64,
    /// Height.
    #[serde(default)]
    pub height: i64,
}

impl From<CreateElementRequest> for NewElement {
    fn from(req: CreateElementRequest) -> Self {
        NewElement::new(req.element_type)
            .with_content(req.content)
            .at(req.position_x, req.position_y)
            .sized(req.width, req.height)
    }
}

/// Element update request. Omitted fields are reset to their defaults.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateElementRequest {
    /// New type tag.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Element type is required"))]
    pub element_type: String,
    /// New content.
    #[serde(default)]
    pub content: String,
    /// New X coordinate.
    #[serde(default)]
    pub position_x: i64,
    /// New Y coordinate.
    #[serde(default)]
    pub position_y: i64,
    /// New width.
    #[serde(default)]
    pub width: i64,
    /// New height.
    #[serde(default)]
    pub height: i64,
}

impl From<UpdateElementRequest> for ElementUpdate {
    fn from(req: UpdateElementRequest) -> Self {
        ElementUpdate {
            element_type: req.element_type,
            content: req.content,
            position_x: req.position_x,
            position_y: req.position_y,
            width: req.width,
            height: req.height,
        }
    }
}

/// Permission grant request.
#[derive(Debug, Deserialize, Validate)]
pub struct ShareBoardRequest {
    /// User to grant access to.
    pub user_id: i64,
    /// Whether the grant allows editing.
    #[serde(default)]
    pub can_edit: bool,
}
