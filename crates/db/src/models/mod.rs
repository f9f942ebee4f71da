//! Row structs and write DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create/replace DTO carrying every mutable column
//! - An update DTO (all `Option` fields) for partial writes

pub mod sprite;
