//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules and round state for four photo mini-games.
//! It has **no dependencies** on terminals or I/O, so the same seed always
//! produces the same deal and every rule can be tested headless.
//!
//! # Module Structure
//!
//! - [`arrangement`]: permutations of tile/card identities, shuffling, parity
//! - [`engine`]: [`SlotEngine`], the shared click/move/clock/win machinery,
//!   and the [`MovePolicy`] trait each game plugs into it
//! - [`swap`], [`slide`], [`memory`], [`reveal`]: the four rule sets
//! - [`tiles`]: the Swap and Puzzle games over one chosen photo
//! - [`clock`]: round timer that starts on the first accepted click
//! - [`scoring`]: star ratings and reveal guess scores
//! - [`photos`]: the photo catalog the games draw from
//! - [`rng`]: seedable LCG used for every shuffle
//! - [`snapshot`]: serializable read-only views for the renderer
//!
//! # Games
//!
//! - **Memory**: flip two cards at a time; matching photos stay face up
//! - **Puzzle**: 3x3 sliding puzzle with one gap; only tiles beside the gap move
//! - **Swap**: 3x3 grid where tapping two tiles swaps them
//! - **Reveal**: remove blocks over a hidden photo, then guess it from four
//!
//! # Example
//!
//! ```
//! use photo_games_core::{Arrangement, SwapGame};
//!
//! let cells = Arrangement::from_vec(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//! let mut game = SwapGame::with_arrangement(cells, 0).unwrap();
//!
//! game.click(0);
//! game.click(1);
//!
//! assert!(game.engine().won());
//! assert_eq!(game.engine().moves(), 1);
//! ```
//!
//! # Timing
//!
//! Call `tick` every frame with the elapsed milliseconds. The round clock
//! counts whole seconds, and Memory's pair comparison lands after its settle
//! delay (500ms for a match, 900ms for a mismatch).

pub mod arrangement;
pub mod clock;
pub mod engine;
pub mod error;
pub mod memory;
pub mod photos;
pub mod reveal;
pub mod rng;
pub mod scoring;
pub mod slide;
pub mod snapshot;
pub mod swap;
pub mod tiles;

pub use photo_games_types as types;

// Re-export commonly used types for convenience
pub use arrangement::{Arrangement, Identity};
pub use clock::{format_clock, RoundClock};
pub use engine::{MovePolicy, PendingResolution, ResolutionToken, Selection, SlotEngine, Step};
pub use error::{GameError, Result};
pub use memory::{MemoryGame, MemoryPolicy};
pub use photos::{Photo, PhotoCatalog, PhotoId, PhotoSource};
pub use reveal::{RevealGame, RevealPolicy};
pub use rng::SimpleRng;
pub use scoring::{rating_for_moves, reveal_score, star_thresholds};
pub use slide::{is_adjacent, SlidePolicy};
pub use snapshot::{
    CardSnapshot, GuessOutcome, MemorySnapshot, RevealSnapshot, RoundStatus, TileSnapshot,
};
pub use swap::SwapPolicy;
pub use tiles::{PuzzleGame, SwapGame, TileGame};
