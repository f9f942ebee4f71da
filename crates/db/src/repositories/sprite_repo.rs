//! Repository for the `sprites` table.
//!
//! Every method is a single statement, so each write is atomic for its row
//! and updates never race through a separate read.

use sqlx::PgPool;
use tabletop_core::types::DbId;

use crate::models::sprite::{CreateSprite, Sprite, UpdateSprite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, x_pos, y_pos";

/// Provides CRUD operations for sprites.
pub struct SpriteRepo;

impl SpriteRepo {
    /// Insert a new sprite, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateSprite) -> Result<Sprite, sqlx::Error> {
        let query = format!(
            "INSERT INTO sprites (name, x_pos, y_pos)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprite>(&query)
            .bind(&input.name)
            .bind(input.x_pos)
            .bind(input.y_pos)
            .fetch_one(pool)
            .await
    }

    /// Find a sprite by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sprite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprites WHERE id = $1");
        sqlx::query_as::<_, Sprite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sprites in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Sprite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprites ORDER BY id");
        sqlx::query_as::<_, Sprite>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable field of a sprite.
    ///
    /// Returns `None` if no row with the given `id` exists; no row is created.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateSprite,
    ) -> Result<Option<Sprite>, sqlx::Error> {
        let query = format!(
            "UPDATE sprites SET
                name = $2,
                x_pos = $3,
                y_pos = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprite>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.x_pos)
            .bind(input.y_pos)
            .fetch_optional(pool)
            .await
    }

    /// Update a sprite. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSprite,
    ) -> Result<Option<Sprite>, sqlx::Error> {
        let query = format!(
            "UPDATE sprites SET
                name = COALESCE($2, name),
                x_pos = COALESCE($3, x_pos),
                y_pos = COALESCE($4, y_pos)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprite>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.x_pos)
            .bind(input.y_pos)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sprite by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sprites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all sprites.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sprites")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
