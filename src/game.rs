//! One running game of any kind, behind a single type.

use serde::Serialize;

use crate::core::{
    GameError, GuessOutcome, MemoryGame, MemorySnapshot, PhotoCatalog, PhotoId, PuzzleGame,
    RevealGame, RevealSnapshot, RoundStatus, Step, SwapGame, TileSnapshot,
};
use crate::types::{GameKind, GRID_SIZE, GRID_TILES, MEMORY_COLUMNS, REVEAL_BLOCKS, REVEAL_GRID};

#[derive(Debug, Clone)]
pub enum ActiveGame {
    Memory(MemoryGame),
    Puzzle(PuzzleGame),
    Swap(SwapGame),
    Reveal(RevealGame),
}

/// Snapshot of whichever game is running. Serializes as the inner snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum GameSnapshot {
    Memory(MemorySnapshot),
    Tiles(TileSnapshot),
    Reveal(RevealSnapshot),
}

impl GameSnapshot {
    pub fn status(&self) -> &RoundStatus {
        match self {
            GameSnapshot::Memory(s) => &s.status,
            GameSnapshot::Tiles(s) => &s.status,
            GameSnapshot::Reveal(s) => &s.status,
        }
    }
}

impl ActiveGame {
    /// Deal a new game. `pairs` only matters for Memory, `photo` only for
    /// Puzzle and Swap.
    pub fn start(
        kind: GameKind,
        seed: u32,
        pairs: usize,
        photo: PhotoId,
        photos: &PhotoCatalog,
    ) -> Result<Self, GameError> {
        let game = match kind {
            GameKind::Memory => ActiveGame::Memory(MemoryGame::new(seed, pairs, photos.len())?),
            GameKind::Puzzle => {
                photos.check(photo)?;
                ActiveGame::Puzzle(PuzzleGame::new(seed, photo)?)
            }
            GameKind::Swap => {
                photos.check(photo)?;
                ActiveGame::Swap(SwapGame::new(seed, photo)?)
            }
            GameKind::Reveal => ActiveGame::Reveal(RevealGame::new(seed, photos.len())?),
        };
        Ok(game)
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Memory(_) => GameKind::Memory,
            ActiveGame::Puzzle(_) => GameKind::Puzzle,
            ActiveGame::Swap(_) => GameKind::Swap,
            ActiveGame::Reveal(_) => GameKind::Reveal,
        }
    }

    /// Columns and slot count of the clickable grid.
    pub fn grid(&self) -> (usize, usize) {
        match self {
            ActiveGame::Memory(g) => (MEMORY_COLUMNS, g.engine().cells().len()),
            ActiveGame::Puzzle(_) | ActiveGame::Swap(_) => (GRID_SIZE, GRID_TILES),
            ActiveGame::Reveal(_) => (REVEAL_GRID, REVEAL_BLOCKS),
        }
    }

    /// Photo the tile games are cut from.
    pub fn photo(&self) -> Option<PhotoId> {
        match self {
            ActiveGame::Puzzle(g) => Some(g.photo()),
            ActiveGame::Swap(g) => Some(g.photo()),
            _ => None,
        }
    }

    /// Click a slot: flip a card, move a tile, or remove a reveal block.
    pub fn click(&mut self, slot: usize) -> Step {
        match self {
            ActiveGame::Memory(g) => g.click(slot),
            ActiveGame::Puzzle(g) => g.click(slot),
            ActiveGame::Swap(g) => g.click(slot),
            ActiveGame::Reveal(g) => g.remove_block(slot),
        }
    }

    /// Guess the `index`-th reveal choice.
    pub fn choose(&mut self, index: usize) -> Option<GuessOutcome> {
        match self {
            ActiveGame::Reveal(g) => g.guess_choice(index),
            _ => None,
        }
    }

    /// Guess a reveal photo by id.
    pub fn guess(&mut self, photo: PhotoId) -> Option<GuessOutcome> {
        match self {
            ActiveGame::Reveal(g) => g.guess(photo),
            _ => None,
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self {
            ActiveGame::Memory(g) => g.tick(elapsed_ms),
            ActiveGame::Puzzle(g) => g.tick(elapsed_ms),
            ActiveGame::Swap(g) => g.tick(elapsed_ms),
            ActiveGame::Reveal(g) => g.tick(elapsed_ms),
        }
    }

    /// Land a pending memory comparison immediately.
    pub fn settle_now(&mut self) -> bool {
        let ActiveGame::Memory(g) = self else {
            return false;
        };
        g.pending_token()
            .map(|token| g.resolve(token))
            .unwrap_or(false)
    }

    /// New game, reshuffle, or next reveal round.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        match self {
            ActiveGame::Memory(g) => g.new_game(),
            ActiveGame::Puzzle(g) => g.shuffle(),
            ActiveGame::Swap(g) => g.shuffle(),
            ActiveGame::Reveal(g) => g.next_round(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        match self {
            ActiveGame::Memory(g) => GameSnapshot::Memory(g.snapshot()),
            ActiveGame::Puzzle(g) => GameSnapshot::Tiles(g.snapshot()),
            ActiveGame::Swap(g) => GameSnapshot::Tiles(g.snapshot()),
            ActiveGame::Reveal(g) => GameSnapshot::Reveal(g.snapshot()),
        }
    }
}
