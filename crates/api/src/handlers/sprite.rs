//! Handlers for the `/api/sprites` resource.
//!
//! Every handler takes [`AuthUser`] as its first extractor, so an
//! unauthenticated request is rejected before its path or body is read.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tabletop_core::error::CoreError;
use tabletop_core::sprite::SPRITE_ENTITY;
use tabletop_core::types::DbId;
use tabletop_db::repositories::SpriteRepo;

use crate::codec::{self, SpriteResource};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Links returned by the API root.
#[derive(Debug, Serialize)]
pub struct ApiRoot {
    pub sprites: &'static str,
}

/// GET /api/
pub async fn api_root(_auth: AuthUser) -> Json<ApiRoot> {
    Json(ApiRoot {
        sprites: "/api/sprites/",
    })
}

/// GET /api/sprites/
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SpriteResource>>> {
    let sprites = SpriteRepo::list(&state.pool).await?;
    Ok(Json(sprites.into_iter().map(codec::encode).collect()))
}

/// POST /api/sprites/
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SpriteResource>)> {
    let input = codec::decode_full(&read_body(body)?)?;
    let sprite = SpriteRepo::create(&state.pool, &input).await?;

    tracing::info!(
        sprite_id = sprite.id,
        user_id = auth.user_id,
        x_pos = sprite.x_pos,
        y_pos = sprite.y_pos,
        "Sprite created"
    );

    Ok((StatusCode::CREATED, Json(codec::encode(sprite))))
}

/// GET /api/sprites/{id}/
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<SpriteResource>> {
    let id = parse_id(&raw_id)?;
    let sprite = SpriteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(codec::encode(sprite)))
}

/// PUT /api/sprites/{id}/
pub async fn replace(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<SpriteResource>> {
    let id = parse_id(&raw_id)?;
    let input = codec::decode_full(&read_body(body)?)?;
    let sprite = SpriteRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(sprite_id = id, user_id = auth.user_id, "Sprite replaced");

    Ok(Json(codec::encode(sprite)))
}

/// PATCH /api/sprites/{id}/
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<SpriteResource>> {
    let id = parse_id(&raw_id)?;
    let input = codec::decode_partial(&read_body(body)?)?;

    // An empty body changes nothing, so it is answered without a write.
    let found = if input.is_empty() {
        SpriteRepo::find_by_id(&state.pool, id).await?
    } else {
        SpriteRepo::update(&state.pool, id, &input).await?
    };
    let sprite = found.ok_or_else(|| not_found(id))?;

    tracing::info!(
        sprite_id = id,
        user_id = auth.user_id,
        x_pos = sprite.x_pos,
        y_pos = sprite.y_pos,
        "Sprite updated"
    );

    Ok(Json(codec::encode(sprite)))
}

/// DELETE /api/sprites/{id}/
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if SpriteRepo::delete(&state.pool, id).await? {
        tracing::info!(sprite_id = id, user_id = auth.user_id, "Sprite deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A path segment that is not an integer cannot name a sprite.
fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("{SPRITE_ENTITY} with id {raw} not found")))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SPRITE_ENTITY,
        id,
    })
}

/// Unwrap a JSON body, turning every extractor rejection into a 400.
fn read_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
