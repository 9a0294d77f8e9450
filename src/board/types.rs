//! Board, element and permission models for Mirolite.

use chrono::{DateTime, Utc};

/// Board entity: a named canvas owned by one creator.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Owning user; set once at creation, immutable.
    pub creator_id: i64,
    /// Public boards are viewable by any authenticated user.
    pub is_public: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Board title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Owning user.
    pub creator_id: i64,
    /// Visibility flag.
    pub is_public: bool,
}

impl NewBoard {
    /// Create a new private board with an empty description.
    pub fn new(title: impl Into<String>, creator_id: i64) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            creator_id,
            is_public: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the visibility flag.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

/// Data for updating a board.
///
/// Updates are full overwrites: every field is written unconditionally,
/// matching the wire contract where an omitted field resets the column.
#[derive(Debug, Clone)]
pub struct BoardUpdate {
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
    /// New visibility flag.
    pub is_public: bool,
}

/// Positioned content unit placed on a board.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BoardElement {
    /// Unique element ID.
    pub id: i64,
    /// Owning board.
    pub board_id: i64,
    /// Free-form type tag (e.g. "note", "shape"); callers are responsible
    /// for meaningful values.
    #[sqlx(rename = "type")]
    pub element_type: String,
    /// Free-text content.
    pub content: String,
    /// X coordinate in canvas units.
    pub position_x: i64,
    /// Y coordinate in canvas units.
    pub position_y: i64,
    /// Width in canvas units.
    pub width: i64,
    /// Height in canvas units.
    pub height: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new element.
#[derive(Debug, Clone)]
pub struct NewElement {
    /// Free-form type tag.
    pub element_type: String,
    /// Free-text content.
    pub content: String,
    /// X coordinate in canvas units.
    pub position_x: i64,
    /// Y coordinate in canvas units.
    pub position_y: i64,
    /// Width in canvas units.
    pub width: i64,
    /// Height in canvas units.
    pub height: i64,
}

impl NewElement {
    /// Create a new element at the origin with zero size.
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            content: String::new(),
            position_x: 0,
            position_y: 0,
            width: 0,
            height: 0,
        }
    }

    /// Set the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the position.
    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.position_x = x;
        self.position_y = y;
        self
    }

    /// Set the size.
    pub fn sized(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Data for updating an element. Full overwrite, like [`BoardUpdate`].
#[derive(Debug, Clone)]
pub struct ElementUpdate {
    /// New type tag.
    pub element_type: String,
    /// New content.
    pub content: String,
    /// New X coordinate.
    pub position_x: i64,
    /// New Y coordinate.
    pub position_y: i64,
    /// New width.
    pub width: i64,
    /// New height.
    pub height: i64,
}

/// Explicit (board, user) authorization grant, independent of ownership.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BoardPermission {
    /// Unique grant ID.
    pub id: i64,
    /// Board the grant applies to.
    pub board_id: i64,
    /// User the grant applies to.
    pub user_id: i64,
    /// Whether the grant allows editing (false = read-only).
    pub can_edit: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
