#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use tabletop_api::auth::jwt::{generate_access_token, JwtConfig};
use tabletop_api::config::{LogFormat, ServerConfig};
use tabletop_api::router::build_app_router;
use tabletop_api::state::AppState;

pub const TEST_SESSION_COOKIE: &str = "tabletop_session";
pub const TEST_LOGIN_URL: &str = "/accounts/login/";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        login_url: TEST_LOGIN_URL.to_string(),
        session_cookie: TEST_SESSION_COOKIE.to_string(),
        static_dir: "static".to_string(),
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router, using the given database pool.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the app over a pool that never connects.
///
/// For requests that must be answered before storage is touched (auth
/// rejections, redirects), so those tests run without a database.
pub fn build_offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://tabletop@localhost:1/unused")
        .expect("lazy pool creation should succeed");
    build_test_app(pool)
}

/// Mint a session token accepted by [`test_config`].
pub fn test_token() -> String {
    generate_access_token(1, &test_config().jwt).expect("token generation should succeed")
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str) -> Response {
    let token = test_token();
    send(
        app,
        builder(Method::GET, uri, Some(&token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    let request = builder(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body, None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let token = test_token();
    send_json(app, Method::POST, uri, body, Some(&token)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let token = test_token();
    send_json(app, Method::PUT, uri, body, Some(&token)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let token = test_token();
    send_json(app, Method::PATCH, uri, body, Some(&token)).await
}

pub async fn delete_auth(app: Router, uri: &str) -> Response {
    let token = test_token();
    send(
        app,
        builder(Method::DELETE, uri, Some(&token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
