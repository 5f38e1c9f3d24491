//! Data models: the board hierarchy and its pure mutation operations.

pub mod board;
pub mod entity;

pub use board::{Board, Screen, SubScreen};
pub use entity::EntityId;
