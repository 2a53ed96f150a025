//! Arrangement module - slot-to-identity layouts and their generators
//!
//! An [`Arrangement`] maps each slot of a grid to the identity currently
//! sitting there. Identities never appear or disappear during a round; the
//! only mutation is exchanging two slots.
//!
//! Generators reject-and-retry on a uniform Fisher-Yates shuffle until the
//! layout is not already solved (and, for the sliding puzzle, solvable).

use serde::Serialize;

use crate::error::{GameError, Result};
use crate::rng::SimpleRng;

/// Stable logical item: a home tile number or a photo-pair id.
pub type Identity = u8;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Arrangement {
    cells: Vec<Identity>,
}

impl Arrangement {
    /// The solved layout: slot `i` holds identity `i`.
    pub fn solved(len: usize) -> Self {
        Self {
            cells: (0..len).map(|i| i as Identity).collect(),
        }
    }

    /// Build from explicit cells, which must be a permutation of `0..len`.
    pub fn from_vec(cells: Vec<Identity>) -> Result<Self> {
        if cells.len() > Identity::MAX as usize + 1 {
            return Err(GameError::InvalidArrangement("too many slots"));
        }
        let mut seen = vec![false; cells.len()];
        for &id in &cells {
            let Some(slot) = seen.get_mut(id as usize) else {
                return Err(GameError::InvalidArrangement("identity out of range"));
            };
            if *slot {
                return Err(GameError::InvalidArrangement("duplicate identity"));
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    /// Build a memory deck from explicit cells: every pair id in
    /// `0..len / 2` must appear exactly twice.
    pub fn from_deck(cells: Vec<Identity>) -> Result<Self> {
        if cells.len() % 2 != 0 {
            return Err(GameError::InvalidArrangement("deck has an odd card count"));
        }
        let mut counts = vec![0u8; cells.len() / 2];
        for &id in &cells {
            let Some(count) = counts.get_mut(id as usize) else {
                return Err(GameError::InvalidArrangement("pair id out of range"));
            };
            if *count == 2 {
                return Err(GameError::InvalidArrangement("every pair must appear twice"));
            }
            *count += 1;
        }
        if counts.iter().any(|&c| c != 2) {
            return Err(GameError::InvalidArrangement("every pair must appear twice"));
        }
        Ok(Self { cells })
    }

    /// Random permutation of `0..len` that is not already solved.
    pub fn shuffled(len: usize, rng: &mut SimpleRng) -> Result<Self> {
        require_len(len)?;
        Ok(Self::shuffle_until(Self::solved(len), rng, |a| !a.is_solved()))
    }

    /// Random permutation of `0..len` that is unsolved and solvable by
    /// sliding `blank` around, i.e. has an even inversion count.
    pub fn shuffled_solvable(len: usize, blank: Identity, rng: &mut SimpleRng) -> Result<Self> {
        require_len(len)?;
        if blank as usize >= len {
            return Err(GameError::InvalidArrangement("blank identity out of range"));
        }
        Ok(Self::shuffle_until(Self::solved(len), rng, |a| {
            !a.is_solved() && a.has_even_parity(blank)
        }))
    }

    /// Random memory deck of `pairs` pairs, not in canonical `[0,0,1,1,..]` order.
    pub fn deck(pairs: usize, rng: &mut SimpleRng) -> Result<Self> {
        require_len(pairs)?;
        let canonical = Self {
            cells: (0..pairs * 2).map(|i| (i / 2) as Identity).collect(),
        };
        Ok(Self::shuffle_until(canonical, rng, |a| !a.is_canonical_deck()))
    }

    fn shuffle_until(
        mut layout: Self,
        rng: &mut SimpleRng,
        accept: impl Fn(&Self) -> bool,
    ) -> Self {
        loop {
            rng.shuffle(&mut layout.cells);
            if accept(&layout) {
                return layout;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[Identity] {
        &self.cells
    }

    pub fn get(&self, slot: usize) -> Option<Identity> {
        self.cells.get(slot).copied()
    }

    /// Slot currently holding `id`.
    pub fn position_of(&self, id: Identity) -> Option<usize> {
        self.cells.iter().position(|&c| c == id)
    }

    /// Exchange the identities of two slots. Out-of-range slots are ignored.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.cells.len() && b < self.cells.len() {
            self.cells.swap(a, b);
        }
    }

    /// Every slot holds its home identity.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, &c)| c as usize == i)
    }

    /// Slots holding their home identity.
    pub fn correct_count(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(i, &c)| c as usize == i)
            .count()
    }

    fn is_canonical_deck(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &c)| c as usize == i / 2)
    }

    /// Pairs of identities out of natural order, ignoring `blank`.
    pub fn inversions(&self, blank: Identity) -> usize {
        let tiles: Vec<Identity> = self.cells.iter().copied().filter(|&c| c != blank).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// On an odd-width grid an even inversion count means solvable.
    pub fn has_even_parity(&self, blank: Identity) -> bool {
        self.inversions(blank) % 2 == 0
    }
}

fn require_len(len: usize) -> Result<()> {
    if len < 2 {
        return Err(GameError::TooFewItems { min: 2, got: len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_deck_rejects_third_copy_early() {
        assert!(Arrangement::from_deck(vec![0, 0, 0, 1]).is_err());
        assert!(Arrangement::from_deck(vec![0u8; 512]).is_err());
        assert!(Arrangement::from_deck(vec![1, 0, 0, 1]).is_ok());
    }

    #[test]
    fn test_solved_layout() {
        let a = Arrangement::solved(9);
        assert!(a.is_solved());
        assert_eq!(a.correct_count(), 9);
        assert_eq!(a.inversions(8), 0);
    }

    #[test]
    fn test_from_vec_rejects_non_permutations() {
        assert!(Arrangement::from_vec(vec![0, 1, 2]).is_ok());
        assert_eq!(
            Arrangement::from_vec(vec![0, 0, 2]),
            Err(GameError::InvalidArrangement("duplicate identity"))
        );
        assert_eq!(
            Arrangement::from_vec(vec![0, 3, 1]),
            Err(GameError::InvalidArrangement("identity out of range"))
        );
    }

    #[test]
    fn test_from_deck_requires_exact_pairs() {
        assert!(Arrangement::from_deck(vec![1, 0, 0, 1]).is_ok());
        assert!(Arrangement::from_deck(vec![0, 0, 0, 1]).is_err());
        assert!(Arrangement::from_deck(vec![0, 0, 1]).is_err());
        assert!(Arrangement::from_deck(vec![0, 0, 2, 2]).is_err());
    }

    #[test]
    fn test_shuffled_is_never_solved() {
        let mut rng = SimpleRng::new(3);
        for len in 2..=25 {
            for _ in 0..20 {
                let a = Arrangement::shuffled(len, &mut rng).unwrap();
                assert_eq!(a.len(), len);
                assert!(!a.is_solved());
            }
        }
    }

    #[test]
    fn test_two_items_always_swap() {
        let mut rng = SimpleRng::new(11);
        let a = Arrangement::shuffled(2, &mut rng).unwrap();
        assert_eq!(a.as_slice(), &[1, 0]);
    }

    #[test]
    fn test_too_few_items_is_an_error() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            Arrangement::shuffled(1, &mut rng),
            Err(GameError::TooFewItems { min: 2, got: 1 })
        );
        assert_eq!(
            Arrangement::shuffled(0, &mut rng),
            Err(GameError::TooFewItems { min: 2, got: 0 })
        );
        assert!(Arrangement::deck(1, &mut rng).is_err());
        assert!(Arrangement::shuffled_solvable(1, 0, &mut rng).is_err());
    }

    #[test]
    fn test_inversions_ignore_blank() {
        let a = Arrangement::from_vec(vec![0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap();
        assert_eq!(a.inversions(8), 0);

        let b = Arrangement::from_vec(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(b.inversions(8), 1);
        assert!(!b.has_even_parity(8));

        let c = Arrangement::from_vec(vec![8, 2, 1, 0, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(c.inversions(8), 3);
    }

    #[test]
    fn test_shuffled_solvable_has_even_parity() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..200 {
            let a = Arrangement::shuffled_solvable(9, 8, &mut rng).unwrap();
            assert!(!a.is_solved());
            assert!(a.has_even_parity(8));
        }
    }

    #[test]
    fn test_deck_holds_every_pair_twice() {
        let mut rng = SimpleRng::new(5);
        for pairs in 2..=8 {
            let deck = Arrangement::deck(pairs, &mut rng).unwrap();
            assert_eq!(deck.len(), pairs * 2);
            assert!(!deck.is_canonical_deck());
            assert!(Arrangement::from_deck(deck.as_slice().to_vec()).is_ok());
        }
    }

    #[test]
    fn test_swap_and_position_of() {
        let mut a = Arrangement::solved(4);
        a.swap(0, 3);
        assert_eq!(a.as_slice(), &[3, 1, 2, 0]);
        assert_eq!(a.position_of(3), Some(0));
        assert_eq!(a.correct_count(), 2);

        // Out-of-range swap leaves the layout alone.
        a.swap(0, 9);
        assert_eq!(a.as_slice(), &[3, 1, 2, 0]);
    }
}
