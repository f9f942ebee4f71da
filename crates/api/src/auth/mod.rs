//! Session token primitives.
//!
//! - [`jwt`] -- verification (and, for tests and local development, minting)
//!   of the HS256 tokens issued by the identity service.

pub mod jwt;
