//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a session
//!   token (Bearer header or session cookie).

pub mod auth;
