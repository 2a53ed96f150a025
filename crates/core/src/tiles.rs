//! Photo tile games (Puzzle and Swap).
//!
//! Both cut one chosen photo into a 3x3 grid and differ only in their move
//! rules, so they share this wrapper around a [`SlotEngine`].

use crate::arrangement::Arrangement;
use crate::engine::{MovePolicy, SlotEngine, Step};
use crate::error::Result;
use crate::photos::PhotoId;
use crate::rng::SimpleRng;
use crate::slide::SlidePolicy;
use crate::snapshot::TileSnapshot;
use crate::swap::SwapPolicy;
use crate::types::GRID_SIZE;

/// Tap-two-to-swap game.
pub type SwapGame = TileGame<SwapPolicy>;

/// Sliding puzzle.
pub type PuzzleGame = TileGame<SlidePolicy>;

#[derive(Debug, Clone)]
pub struct TileGame<P> {
    engine: SlotEngine<P>,
    rng: SimpleRng,
    photo: PhotoId,
}

impl<P: MovePolicy + Default> TileGame<P> {
    /// Deal a shuffled grid of `photo`.
    pub fn new(seed: u32, photo: PhotoId) -> Result<Self> {
        let mut rng = SimpleRng::new(seed);
        let engine = SlotEngine::deal(P::default(), &mut rng)?;
        Ok(Self { engine, rng, photo })
    }

    /// Start from a hand-built grid.
    pub fn with_arrangement(cells: Arrangement, photo: PhotoId) -> Result<Self> {
        let engine = SlotEngine::with_arrangement(P::default(), cells)?;
        Ok(Self {
            engine,
            rng: SimpleRng::default(),
            photo,
        })
    }
}

impl<P: MovePolicy> TileGame<P> {
    pub fn click(&mut self, slot: usize) -> Step {
        self.engine.click(slot)
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.engine.tick(elapsed_ms)
    }

    /// Reshuffle the same photo into a new round.
    pub fn shuffle(&mut self) -> Result<()> {
        self.engine.restart(&mut self.rng)
    }

    /// Start a new round with a different photo.
    pub fn change_photo(&mut self, photo: PhotoId) -> Result<()> {
        self.photo = photo;
        self.shuffle()
    }

    pub fn photo(&self) -> PhotoId {
        self.photo
    }

    pub fn engine(&self) -> &SlotEngine<P> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SlotEngine<P> {
        &mut self.engine
    }

    pub fn snapshot(&self) -> TileSnapshot {
        let cells = self.engine.cells();
        let blank = self.engine.policy().blank();
        TileSnapshot {
            status: self.engine.status(),
            photo: self.photo,
            tiles: cells.as_slice().to_vec(),
            columns: GRID_SIZE,
            selected: self.engine.selection().first().copied(),
            blank,
            blank_slot: blank.and_then(|b| cells.position_of(b)),
            correct: cells.correct_count(),
            total: cells.len(),
        }
    }
}
