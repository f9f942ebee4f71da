//! The login-gated index page.
//!
//! The page is a static shell; the frontend script it loads fetches sprites
//! from the API with the same session cookie.

use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
///
/// Authenticated callers get the page; everyone else is redirected to the
/// identity service's login URL with a `next` parameter pointing back here.
pub async fn index(
    State(state): State<AppState>,
    uri: Uri,
    auth: Result<AuthUser, AppError>,
) -> Response {
    match auth {
        Ok(user) => {
            tracing::debug!(user_id = user.user_id, "Serving index page");
            Html(INDEX_HTML).into_response()
        }
        Err(_) => {
            let target = login_redirect(&state.config.login_url, uri.path());
            Redirect::to(&target).into_response()
        }
    }
}

/// Build `<login_url>?next=<path>`, appending to an existing query if present.
fn login_redirect(login_url: &str, next: &str) -> String {
    let separator = if login_url.contains('?') { '&' } else { '?' };
    format!("{login_url}{separator}next={next}")
}
