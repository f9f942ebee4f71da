//! Sprite entity model and DTOs.

use sqlx::FromRow;
use tabletop_core::types::DbId;
use validator::Validate;

/// A sprite row from the `sprites` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Sprite {
    pub id: DbId,
    pub name: String,
    pub x_pos: i32,
    pub y_pos: i32,
}

/// DTO for creating a sprite or replacing every mutable field of one.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateSprite {
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub name: String,
    pub x_pos: i32,
    pub y_pos: i32,
}

/// DTO for a partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UpdateSprite {
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub name: Option<String>,
    pub x_pos: Option<i32>,
    pub y_pos: Option<i32>,
}

impl UpdateSprite {
    /// True when the update would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.x_pos.is_none() && self.y_pos.is_none()
    }
}
