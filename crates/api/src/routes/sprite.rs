//! Route definitions for the `/api/sprites` resource.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::sprite;
use crate::state::AppState;

/// Sprite routes.
///
/// ```text
/// GET    /api/sprites/          -> list
/// POST   /api/sprites/          -> create
/// GET    /api/sprites/{id}/     -> get_by_id
/// PUT    /api/sprites/{id}/     -> replace
/// PATCH  /api/sprites/{id}/     -> update
/// DELETE /api/sprites/{id}/     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/sprites/", collection())
        .route("/api/sprites", collection())
        .route("/api/sprites/{id}/", member())
        .route("/api/sprites/{id}", member())
}

fn collection() -> MethodRouter<AppState> {
    get(sprite::list).post(sprite::create)
}

fn member() -> MethodRouter<AppState> {
    get(sprite::get_by_id)
        .put(sprite::replace)
        .patch(sprite::update)
        .delete(sprite::delete)
}
