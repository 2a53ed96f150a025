//! Terminal renderer for the photo games.
//!
//! A small, game-oriented rendering layer: no widget toolkit, just a
//! framebuffer of styled cells that is diffed and flushed to the terminal.
//!
//! - [`game_view`] turns snapshots into a framebuffer (pure, testable)
//! - [`renderer`] owns the terminal and writes only changed cells
//! - [`render_throttle`] skips frames whose content did not change

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use photo_games_core as core;
pub use photo_games_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    cover_color, photo_color, photo_glyph, piece_color, stars_text, win_headline, AnchorY,
    GameView, GridLayout, Scene, Viewport, PICKER_COLUMNS,
};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
