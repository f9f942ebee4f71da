//! The index page and the static frontend assets it loads.

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::index;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /            -> index (login-gated)
/// GET /static/*    -> files under `static_dir`
/// ```
pub fn router(static_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .nest_service("/static", ServeDir::new(static_dir))
}
