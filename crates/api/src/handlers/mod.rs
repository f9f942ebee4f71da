pub mod index;
pub mod sprite;
