//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and labeling, so
//! they can be shared by the game engines, the terminal views and the input
//! layer alike.
//!
//! # Grid Dimensions
//!
//! - **Puzzle / Swap**: 3x3 grid, tiles numbered 0-8 by home slot
//! - **Puzzle blank**: tile 8 (the bottom-right piece) is the gap
//! - **Memory**: 4 columns, 2-8 pairs (4-16 cards)
//! - **Reveal**: 5x5 blocks over the hidden photo, 4 candidate photos
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frontend frame interval (~60 FPS) |
//! | `CLOCK_TICK_MS` | 1000 | Round clock resolution |
//! | `MATCH_SETTLE_MS` | 500 | Pause before a matching pair locks in |
//! | `MISMATCH_SETTLE_MS` | 900 | Pause before a wrong pair flips back |
//!
//! # Examples
//!
//! ```
//! use photo_games_types::{GameKind, InputAction, Direction, GRID_TILES};
//!
//! assert_eq!(GameKind::from_str("memory"), Some(GameKind::Memory));
//! assert_eq!(GameKind::Puzzle.as_str(), "puzzle");
//!
//! let action = InputAction::Move(Direction::Left);
//! assert_ne!(action, InputAction::Activate);
//!
//! assert_eq!(GRID_TILES, 9);
//! ```

use serde::Serialize;

/// Frontend frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// The round clock advances one second per this many milliseconds.
pub const CLOCK_TICK_MS: u32 = 1000;

/// Side length of the Puzzle and Swap grids.
pub const GRID_SIZE: usize = 3;

/// Number of tiles on the Puzzle and Swap grids.
pub const GRID_TILES: usize = GRID_SIZE * GRID_SIZE;

/// Identity of the gap tile in the sliding puzzle.
pub const BLANK_TILE: u8 = (GRID_TILES - 1) as u8;

/// Card columns in the memory grid.
pub const MEMORY_COLUMNS: usize = 4;

/// Smallest memory deck, in pairs.
pub const MIN_PAIRS: usize = 2;

/// Largest memory deck, in pairs.
pub const MAX_PAIRS: usize = 8;

/// Default memory deck, in pairs (4x4 cards).
pub const DEFAULT_PAIRS: usize = 8;

/// Settle delay before a matching pair is marked matched.
pub const MATCH_SETTLE_MS: u32 = 500;

/// Settle delay before a mismatched pair flips back.
pub const MISMATCH_SETTLE_MS: u32 = 900;

/// Side length of the reveal block grid.
pub const REVEAL_GRID: usize = 5;

/// Number of blocks covering the reveal photo.
pub const REVEAL_BLOCKS: usize = REVEAL_GRID * REVEAL_GRID;

/// Candidate photos offered per reveal round.
pub const REVEAL_CHOICES: usize = 4;

/// Points per still-covered block on a correct guess.
pub const REVEAL_POINTS_PER_BLOCK: u32 = 10;

/// Floor score for a correct guess.
pub const REVEAL_MIN_SCORE: u32 = 10;

/// Par for the swap game (a derangement of 9 tiles needs at most 8 swaps).
pub const SWAP_PAR: u32 = (GRID_TILES - 1) as u32;

/// Par for the sliding puzzle.
pub const SLIDE_PAR: u32 = 24;

/// The four mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Memory,
    Puzzle,
    Swap,
    Reveal,
}

impl GameKind {
    /// All games in home-menu order.
    pub const ALL: [GameKind; 4] = [
        GameKind::Memory,
        GameKind::Puzzle,
        GameKind::Swap,
        GameKind::Reveal,
    ];

    /// Parse game kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use photo_games_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("Swap"), Some(GameKind::Swap));
    /// assert_eq!(GameKind::from_str("slide"), Some(GameKind::Puzzle));
    /// assert_eq!(GameKind::from_str("chess"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Some(GameKind::Memory),
            "puzzle" | "slide" => Some(GameKind::Puzzle),
            "swap" => Some(GameKind::Swap),
            "reveal" => Some(GameKind::Reveal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Memory => "memory",
            GameKind::Puzzle => "puzzle",
            GameKind::Swap => "swap",
            GameKind::Reveal => "reveal",
        }
    }

    /// Menu title
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Memory => "Memory Match",
            GameKind::Puzzle => "Photo Puzzle",
            GameKind::Swap => "Puzzle Swap",
            GameKind::Reveal => "Photo Reveal",
        }
    }

    /// One-line menu description
    pub fn description(&self) -> &'static str {
        match self {
            GameKind::Memory => "Flip cards and find matching pairs!",
            GameKind::Puzzle => "Slide tiles to rebuild the picture!",
            GameKind::Swap => "Swap scrambled pieces back in place!",
            GameKind::Reveal => "Uncover the hidden photo and guess!",
        }
    }

    /// Whether the player picks a photo before the round starts.
    pub fn needs_photo(&self) -> bool {
        matches!(self, GameKind::Puzzle | GameKind::Swap)
    }
}

/// Star rating awarded once when a round is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Rating {
    pub fn stars(&self) -> u8 {
        *self as u8
    }
}

/// Cursor direction on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Frontend actions produced by the input layer.
///
/// The engines only understand slot clicks and photo choices; the app maps
/// these actions onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the cursor one cell
    Move(Direction),
    /// Click whatever is under the cursor
    Activate,
    /// Pick one of the numbered reveal choices (0-based)
    Choose(u8),
    /// New game / shuffle / next round
    NewRound,
    /// Toggle the reference photo hint
    ToggleHint,
    /// Back to the previous screen
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_timing_and_scoring_defaults() {
        assert_eq!(MATCH_SETTLE_MS, 500);
        assert_eq!(MISMATCH_SETTLE_MS, 900);
        assert_eq!(REVEAL_BLOCKS, 25);
        assert_eq!(REVEAL_CHOICES, 4);
        assert_eq!(REVEAL_POINTS_PER_BLOCK, 10);
        assert_eq!(REVEAL_MIN_SCORE, 10);
        assert_eq!(BLANK_TILE, 8);
        assert_eq!(SWAP_PAR, 8);
    }

    #[test]
    fn game_kind_round_trips_through_str() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn only_grid_games_need_a_photo() {
        assert!(GameKind::Puzzle.needs_photo());
        assert!(GameKind::Swap.needs_photo());
        assert!(!GameKind::Memory.needs_photo());
        assert!(!GameKind::Reveal.needs_photo());
    }

    #[test]
    fn rating_orders_by_stars() {
        assert!(Rating::Three > Rating::One);
        assert_eq!(Rating::Two.stars(), 2);
    }
}
