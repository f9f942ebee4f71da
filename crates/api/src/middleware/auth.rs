//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use tabletop_core::error::CoreError;
use tabletop_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from a session token.
///
/// The token is read from `Authorization: Bearer <token>` when that header is
/// present, otherwise from the session cookie named by
/// [`ServerConfig::session_cookie`](crate::config::ServerConfig::session_cookie).
/// Browsers navigating to the index page (and its same-origin `fetch` calls)
/// only carry the cookie.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's id in the identity service (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers, &state.config.session_cookie)?;

        let claims = validate_token(&token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Rejected session token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

/// Pull the raw token out of the request headers.
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Result<String, AppError> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        let header = value.to_str().unwrap_or_default();
        return header
            .strip_prefix("Bearer ")
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            });
    }

    cookie_value(headers, cookie_name).ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Authentication credentials were not provided".into(),
        ))
    })
}

/// Find a cookie by name across all `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    use super::*;

    const COOKIE_NAME: &str = "tabletop_session";

    fn headers(pairs: &[(axum::http::HeaderName, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn bearer_header_is_used() {
        let map = headers(&[(AUTHORIZATION, "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&map, COOKIE_NAME).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let map = headers(&[
            (AUTHORIZATION, "Bearer from-header"),
            (COOKIE, "tabletop_session=from-cookie"),
        ]);
        assert_eq!(extract_token(&map, COOKIE_NAME).unwrap(), "from-header");
    }

    #[test]
    fn malformed_authorization_is_rejected() {
        let map = headers(&[(AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        assert_matches!(
            extract_token(&map, COOKIE_NAME),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }

    #[test]
    fn session_cookie_is_found_among_others() {
        let map = headers(&[(COOKIE, "csrftoken=x; tabletop_session=tok; theme=dark")]);
        assert_eq!(extract_token(&map, COOKIE_NAME).unwrap(), "tok");
    }

    #[test]
    fn cookie_split_across_headers_is_found() {
        let map = headers(&[(COOKIE, "csrftoken=x"), (COOKIE, "tabletop_session=tok")]);
        assert_eq!(cookie_value(&map, COOKIE_NAME).as_deref(), Some("tok"));
    }

    #[test]
    fn empty_or_missing_cookie_is_rejected() {
        let map = headers(&[(COOKIE, "tabletop_session=; other=1")]);
        assert_matches!(
            extract_token(&map, COOKIE_NAME),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
        assert!(cookie_value(&HeaderMap::new(), COOKIE_NAME).is_none());
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        let map = headers(&[(COOKIE, "tabletop_session_old=tok")]);
        assert!(cookie_value(&map, COOKIE_NAME).is_none());
    }
}
