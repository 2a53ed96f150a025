//! Read-only views of a round, handed to the presentation layer.

use serde::Serialize;

use crate::arrangement::Identity;
use crate::photos::PhotoId;
use crate::types::{GameKind, Rating};

/// Fields every game reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoundStatus {
    pub game: GameKind,
    pub round: u32,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub clock_running: bool,
    pub locked: bool,
    pub won: bool,
    pub over: bool,
    pub rating: Option<Rating>,
}

impl RoundStatus {
    pub fn playable(&self) -> bool {
        !self.over && !self.locked
    }
}

/// Puzzle and Swap grids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TileSnapshot {
    #[serde(flatten)]
    pub status: RoundStatus,
    pub photo: PhotoId,
    /// Home tile number currently in each slot.
    pub tiles: Vec<Identity>,
    pub columns: usize,
    pub selected: Option<usize>,
    pub blank: Option<Identity>,
    pub blank_slot: Option<usize>,
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CardSnapshot {
    pub photo: PhotoId,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MemorySnapshot {
    #[serde(flatten)]
    pub status: RoundStatus,
    pub cards: Vec<CardSnapshot>,
    pub columns: usize,
    pub selection: Vec<usize>,
    pub matched_pairs: usize,
    pub total_pairs: usize,
}

/// Result of a reveal guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GuessOutcome {
    pub photo: PhotoId,
    pub correct: bool,
    pub score: u32,
    pub remaining_blocks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RevealSnapshot {
    #[serde(flatten)]
    pub status: RoundStatus,
    pub target: PhotoId,
    pub choices: Vec<PhotoId>,
    pub removed: Vec<bool>,
    pub columns: usize,
    /// Palette index for each block, shuffled once per session.
    pub palette: Vec<u8>,
    pub remaining_blocks: usize,
    pub revealed_percent: u32,
    pub guess: Option<GuessOutcome>,
    pub total_score: u32,
}
