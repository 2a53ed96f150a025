//! Swap rules: tap two tiles to exchange them.

use crate::arrangement::Arrangement;
use crate::engine::{MovePolicy, Selection, Step};
use crate::error::{GameError, Result};
use crate::rng::SimpleRng;
use crate::types::{GameKind, GRID_TILES, SWAP_PAR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapPolicy;

impl MovePolicy for SwapPolicy {
    fn kind(&self) -> GameKind {
        GameKind::Swap
    }

    fn par(&self) -> u32 {
        SWAP_PAR
    }

    fn deal(&self, rng: &mut SimpleRng) -> Result<Arrangement> {
        Arrangement::shuffled(GRID_TILES, rng)
    }

    fn validate(&self, cells: &Arrangement) -> Result<()> {
        if cells.len() != GRID_TILES {
            return Err(GameError::InvalidArrangement("swap grid must have 9 tiles"));
        }
        Ok(())
    }

    fn click(&mut self, cells: &mut Arrangement, selection: &mut Selection, slot: usize) -> Step {
        match selection.first().copied() {
            None => {
                selection.push(slot);
                Step::Selected
            }
            Some(selected) if selected == slot => {
                selection.clear();
                Step::Selected
            }
            Some(selected) => {
                cells.swap(selected, slot);
                selection.clear();
                Step::Committed
            }
        }
    }

    fn is_solved(&self, cells: &Arrangement) -> bool {
        cells.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_selects() {
        let mut policy = SwapPolicy;
        let mut cells = Arrangement::solved(9);
        let mut selection = Selection::new();

        assert_eq!(policy.click(&mut cells, &mut selection, 4), Step::Selected);
        assert_eq!(selection.as_slice(), &[4]);
        assert!(cells.is_solved());
    }

    #[test]
    fn test_same_slot_deselects() {
        let mut policy = SwapPolicy;
        let mut cells = Arrangement::solved(9);
        let mut selection = Selection::new();

        policy.click(&mut cells, &mut selection, 4);
        assert_eq!(policy.click(&mut cells, &mut selection, 4), Step::Selected);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_second_slot_swaps() {
        let mut policy = SwapPolicy;
        let mut cells = Arrangement::solved(9);
        let mut selection = Selection::new();

        policy.click(&mut cells, &mut selection, 0);
        assert_eq!(policy.click(&mut cells, &mut selection, 8), Step::Committed);
        assert_eq!(cells.get(0), Some(8));
        assert_eq!(cells.get(8), Some(0));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_validate_wants_nine_tiles() {
        assert!(SwapPolicy.validate(&Arrangement::solved(9)).is_ok());
        assert!(SwapPolicy.validate(&Arrangement::solved(4)).is_err());
    }
}
