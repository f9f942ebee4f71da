pub mod health;
pub mod index;
pub mod sprite;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (every path also answers without its trailing slash):
///
/// ```text
/// /api/                        API root (links)
/// /api/sprites/                list, create
/// /api/sprites/{id}/           retrieve, replace, partial update, delete
/// ```
///
/// All routes require authentication.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/", get(handlers::sprite::api_root))
        .route("/api", get(handlers::sprite::api_root))
        .merge(sprite::router())
}
