//! Domain primitives shared by the storage and HTTP layers.

pub mod error;
pub mod sprite;
pub mod types;
pub mod validation;
