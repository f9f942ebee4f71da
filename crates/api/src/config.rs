use crate::auth::jwt::JwtConfig;

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (default).
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Maximum pooled database connections (default: `10`).
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Where unauthenticated page requests are sent (default: `/accounts/login/`).
    pub login_url: String,
    /// Cookie holding the session token issued by the identity service.
    pub session_cookie: String,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: String,
    /// Log output format (default: text).
    pub log_format: LogFormat,
    /// JWT verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                       |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `LOGIN_URL`                | `/accounts/login/`         |
    /// | `SESSION_COOKIE`           | `tabletop_session`         |
    /// | `STATIC_DIR`               | `static`                   |
    /// | `LOG_FORMAT`               | `text`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let login_url = std::env::var("LOGIN_URL").unwrap_or_else(|_| "/accounts/login/".into());
        let session_cookie =
            std::env::var("SESSION_COOKIE").unwrap_or_else(|_| "tabletop_session".into());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
        let log_format = LogFormat::parse(&std::env::var("LOG_FORMAT").unwrap_or_default());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
            login_url,
            session_cookie,
            static_dir,
            log_format,
            jwt,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
