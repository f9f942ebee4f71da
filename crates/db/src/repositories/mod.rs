//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod sprite_repo;

pub use sprite_repo::SpriteRepo;
