//! Photo Games (workspace facade crate).
//!
//! Four photo mini-games (Memory Match, Photo Puzzle, Puzzle Swap and Photo
//! Reveal) played in the terminal. The rules live in dedicated crates under
//! `crates/` and are re-exported here as `photo_games::{core,input,term,types}`;
//! this crate adds the frontend pieces the binary is built from.

pub use photo_games_core as core;
pub use photo_games_input as input;
pub use photo_games_term as term;
pub use photo_games_types as types;

pub mod app;
pub mod config;
pub mod game;
pub mod logging;
pub mod script;
