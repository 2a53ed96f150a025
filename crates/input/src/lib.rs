//! Terminal input (frontend-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::InputAction`] and keeps the grid cursor the player
//! moves around before clicking.

pub mod cursor;
pub mod map;

pub use photo_games_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit};
