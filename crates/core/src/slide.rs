//! Sliding rules: a tile next to the gap slides into it.

use crate::arrangement::{Arrangement, Identity};
use crate::engine::{MovePolicy, Selection, Step};
use crate::error::{GameError, Result};
use crate::rng::SimpleRng;
use crate::types::{GameKind, BLANK_TILE, GRID_SIZE, GRID_TILES, SLIDE_PAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePolicy {
    blank: Identity,
    columns: usize,
}

impl SlidePolicy {
    pub fn new() -> Self {
        Self {
            blank: BLANK_TILE,
            columns: GRID_SIZE,
        }
    }
}

impl Default for SlidePolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Orthogonal neighbors on a grid `columns` wide.
pub fn is_adjacent(a: usize, b: usize, columns: usize) -> bool {
    let (ar, ac) = (a / columns, a % columns);
    let (br, bc) = (b / columns, b % columns);
    (ar == br && ac.abs_diff(bc) == 1) || (ac == bc && ar.abs_diff(br) == 1)
}

impl MovePolicy for SlidePolicy {
    fn kind(&self) -> GameKind {
        GameKind::Puzzle
    }

    fn par(&self) -> u32 {
        SLIDE_PAR
    }

    fn deal(&self, rng: &mut SimpleRng) -> Result<Arrangement> {
        Arrangement::shuffled_solvable(GRID_TILES, self.blank, rng)
    }

    fn validate(&self, cells: &Arrangement) -> Result<()> {
        if cells.len() != GRID_TILES {
            return Err(GameError::InvalidArrangement("puzzle grid must have 9 tiles"));
        }
        if !cells.has_even_parity(self.blank) {
            return Err(GameError::InvalidArrangement("puzzle is not solvable"));
        }
        Ok(())
    }

    fn click(&mut self, cells: &mut Arrangement, _selection: &mut Selection, slot: usize) -> Step {
        let Some(gap) = cells.position_of(self.blank) else {
            return Step::Ignored;
        };
        if !is_adjacent(slot, gap, self.columns) {
            return Step::Ignored;
        }
        cells.swap(slot, gap);
        Step::Committed
    }

    fn is_solved(&self, cells: &Arrangement) -> bool {
        cells.is_solved()
    }

    fn blank(&self) -> Option<Identity> {
        Some(self.blank)
    }
}
