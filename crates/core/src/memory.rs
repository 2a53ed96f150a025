//! Memory match: flip two cards, keep them if they show the same photo.
//!
//! The second flip of a pair commits a move and locks input for a short
//! settle delay so both faces stay visible; only then does the pair either
//! lock in as matched or flip back.

use crate::arrangement::Arrangement;
use crate::engine::{MovePolicy, ResolutionToken, Selection, SlotEngine, Step};
use crate::error::{GameError, Result};
use crate::photos::PhotoId;
use crate::rng::SimpleRng;
use crate::snapshot::{CardSnapshot, MemorySnapshot};
use crate::types::{
    GameKind, MATCH_SETTLE_MS, MAX_PAIRS, MEMORY_COLUMNS, MIN_PAIRS, MISMATCH_SETTLE_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPolicy {
    pairs: usize,
    face_up: Vec<bool>,
    matched: Vec<bool>,
    matched_pairs: usize,
}

impl MemoryPolicy {
    pub fn new(pairs: usize) -> Self {
        Self {
            pairs,
            face_up: vec![false; pairs * 2],
            matched: vec![false; pairs * 2],
            matched_pairs: 0,
        }
    }

    pub fn pairs(&self) -> usize {
        self.pairs
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn is_face_up(&self, slot: usize) -> bool {
        self.face_up.get(slot).copied().unwrap_or(false)
    }

    pub fn is_matched(&self, slot: usize) -> bool {
        self.matched.get(slot).copied().unwrap_or(false)
    }
}

impl MovePolicy for MemoryPolicy {
    fn kind(&self) -> GameKind {
        GameKind::Memory
    }

    fn par(&self) -> u32 {
        self.pairs as u32
    }

    fn deal(&self, rng: &mut SimpleRng) -> Result<Arrangement> {
        Arrangement::deck(self.pairs, rng)
    }

    fn validate(&self, cells: &Arrangement) -> Result<()> {
        if cells.len() != self.pairs * 2 {
            return Err(GameError::InvalidArrangement("deck size does not match pair count"));
        }
        Arrangement::from_deck(cells.as_slice().to_vec()).map(|_| ())
    }

    fn reset(&mut self, cells: &Arrangement) {
        self.pairs = cells.len() / 2;
        self.face_up = vec![false; cells.len()];
        self.matched = vec![false; cells.len()];
        self.matched_pairs = 0;
    }

    fn click(&mut self, cells: &mut Arrangement, selection: &mut Selection, slot: usize) -> Step {
        // Face-up covers both "already revealed" and "already selected".
        if self.face_up[slot] || self.matched[slot] || selection.is_full() {
            return Step::Ignored;
        }

        self.face_up[slot] = true;
        selection.push(slot);

        let [first, second] = match selection.as_slice() {
            &[first, second] => [first, second],
            _ => return Step::Selected,
        };
        if cells.get(first) == cells.get(second) {
            Step::Deferred(MATCH_SETTLE_MS)
        } else {
            Step::Deferred(MISMATCH_SETTLE_MS)
        }
    }

    fn settle(&mut self, cells: &Arrangement, selection: &mut Selection) {
        if let &[first, second] = selection.as_slice() {
            if cells.get(first) == cells.get(second) {
                self.matched[first] = true;
                self.matched[second] = true;
                self.matched_pairs += 1;
            } else {
                self.face_up[first] = false;
                self.face_up[second] = false;
            }
        }
        selection.clear();
    }

    fn is_solved(&self, _cells: &Arrangement) -> bool {
        self.matched_pairs == self.pairs
    }
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    engine: SlotEngine<MemoryPolicy>,
    rng: SimpleRng,
    catalog_len: usize,
    /// Photo shown by each pair id.
    photos: Vec<PhotoId>,
}

impl MemoryGame {
    /// Deal `pairs` pairs drawn from a catalog of `catalog_len` photos.
    pub fn new(seed: u32, pairs: usize, catalog_len: usize) -> Result<Self> {
        check_pairs(pairs, catalog_len)?;
        let mut rng = SimpleRng::new(seed);
        let photos = pick_photos(pairs, catalog_len, &mut rng);
        let engine = SlotEngine::deal(MemoryPolicy::new(pairs), &mut rng)?;
        Ok(Self {
            engine,
            rng,
            catalog_len,
            photos,
        })
    }

    /// Start from a hand-built deck; `photos[pair]` is the photo for each pair id.
    pub fn with_deck(cells: Arrangement, photos: Vec<PhotoId>) -> Result<Self> {
        let pairs = photos.len();
        check_pairs(pairs, pairs)?;
        let engine = SlotEngine::with_arrangement(MemoryPolicy::new(pairs), cells)?;
        Ok(Self {
            engine,
            rng: SimpleRng::default(),
            catalog_len: pairs,
            photos,
        })
    }

    /// Deal a new round with freshly drawn photos.
    pub fn new_game(&mut self) -> Result<()> {
        self.photos = pick_photos(self.photos.len(), self.catalog_len, &mut self.rng);
        self.engine.restart(&mut self.rng)
    }

    pub fn click(&mut self, slot: usize) -> Step {
        self.engine.click(slot)
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.engine.tick(elapsed_ms)
    }

    /// Land a pending comparison now (for callers that schedule it themselves).
    pub fn resolve(&mut self, token: ResolutionToken) -> bool {
        self.engine.resolve(token)
    }

    pub fn pending_token(&self) -> Option<ResolutionToken> {
        self.engine.pending_token()
    }

    /// Photo on the card in `slot`.
    pub fn photo_at(&self, slot: usize) -> Option<PhotoId> {
        let pair = self.engine.cells().get(slot)?;
        self.photos.get(pair as usize).copied()
    }

    pub fn photos(&self) -> &[PhotoId] {
        &self.photos
    }

    pub fn engine(&self) -> &SlotEngine<MemoryPolicy> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SlotEngine<MemoryPolicy> {
        &mut self.engine
    }

    pub fn snapshot(&self) -> MemorySnapshot {
        let policy = self.engine.policy();
        let cards = (0..self.engine.cells().len())
            .map(|slot| CardSnapshot {
                photo: self.photo_at(slot).unwrap_or_default(),
                face_up: policy.is_face_up(slot),
                matched: policy.is_matched(slot),
            })
            .collect();
        MemorySnapshot {
            status: self.engine.status(),
            cards,
            columns: MEMORY_COLUMNS,
            selection: self.engine.selection().to_vec(),
            matched_pairs: policy.matched_pairs(),
            total_pairs: policy.pairs(),
        }
    }
}

fn check_pairs(pairs: usize, catalog_len: usize) -> Result<()> {
    if pairs < MIN_PAIRS {
        return Err(GameError::TooFewItems {
            min: MIN_PAIRS,
            got: pairs,
        });
    }
    if pairs > MAX_PAIRS {
        return Err(GameError::TooManyPairs {
            max: MAX_PAIRS,
            got: pairs,
        });
    }
    if catalog_len < pairs {
        return Err(GameError::NotEnoughPhotos {
            needed: pairs,
            available: catalog_len,
        });
    }
    Ok(())
}

fn pick_photos(pairs: usize, catalog_len: usize, rng: &mut SimpleRng) -> Vec<PhotoId> {
    let mut ids: Vec<PhotoId> = (0..catalog_len).collect();
    rng.shuffle(&mut ids);
    ids.truncate(pairs);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_pairs() -> MemoryGame {
        let deck = Arrangement::from_deck(vec![0, 1, 2, 3, 0, 1, 2, 3]).unwrap();
        MemoryGame::with_deck(deck, vec![10, 11, 12, 13]).unwrap()
    }

    #[test]
    fn test_new_game_validates_inputs() {
        assert_eq!(
            MemoryGame::new(1, 1, 12).unwrap_err(),
            GameError::TooFewItems { min: 2, got: 1 }
        );
        assert_eq!(
            MemoryGame::new(1, 9, 12).unwrap_err(),
            GameError::TooManyPairs { max: 8, got: 9 }
        );
        assert_eq!(
            MemoryGame::new(1, 8, 5).unwrap_err(),
            GameError::NotEnoughPhotos {
                needed: 8,
                available: 5
            }
        );
    }

    #[test]
    fn test_deal_uses_distinct_photos() {
        let game = MemoryGame::new(42, 8, 12).unwrap();
        let mut photos = game.photos().to_vec();
        photos.sort_unstable();
        photos.dedup();
        assert_eq!(photos.len(), 8);
        assert!(photos.iter().all(|&p| p < 12));
        assert_eq!(game.engine().cells().len(), 16);
    }

    #[test]
    fn test_photo_at_follows_pair_ids() {
        let game = four_pairs();
        assert_eq!(game.photo_at(0), Some(10));
        assert_eq!(game.photo_at(4), Some(10));
        assert_eq!(game.photo_at(7), Some(13));
        assert_eq!(game.photo_at(8), None);
    }

    #[test]
    fn test_first_flip_only_selects() {
        let mut game = four_pairs();
        assert_eq!(game.click(0), Step::Selected);
        assert_eq!(game.engine().moves(), 0);
        assert!(game.engine().policy().is_face_up(0));
        assert!(!game.engine().locked());
    }

    #[test]
    fn test_reclicking_face_up_card_is_ignored() {
        let mut game = four_pairs();
        game.click(0);
        assert_eq!(game.click(0), Step::Ignored);
        assert_eq!(game.engine().selection(), &[0]);
    }

    #[test]
    fn test_match_resolves_after_short_delay() {
        let mut game = four_pairs();
        game.click(0);
        assert_eq!(game.click(4), Step::Deferred(MATCH_SETTLE_MS));
        assert_eq!(game.engine().moves(), 1);
        assert!(game.engine().locked());

        assert!(!game.tick(MATCH_SETTLE_MS - 1));
        assert!(game.tick(1));

        let policy = game.engine().policy();
        assert!(policy.is_matched(0));
        assert!(policy.is_matched(4));
        assert_eq!(policy.matched_pairs(), 1);
        assert!(game.engine().selection().is_empty());
        assert!(!game.engine().locked());
    }

    #[test]
    fn test_mismatch_flips_back() {
        let mut game = four_pairs();
        game.click(0);
        assert_eq!(game.click(1), Step::Deferred(MISMATCH_SETTLE_MS));

        // Still locked after the match delay would have expired.
        assert!(!game.tick(MATCH_SETTLE_MS));
        assert_eq!(game.click(2), Step::Ignored);

        assert!(game.tick(MISMATCH_SETTLE_MS - MATCH_SETTLE_MS));
        let policy = game.engine().policy();
        assert!(!policy.is_face_up(0));
        assert!(!policy.is_face_up(1));
        assert_eq!(policy.matched_pairs(), 0);
        assert_eq!(game.engine().moves(), 1);
    }

    #[test]
    fn test_matched_cards_cannot_be_clicked() {
        let mut game = four_pairs();
        game.click(0);
        game.click(4);
        game.tick(MATCH_SETTLE_MS);
        assert_eq!(game.click(0), Step::Ignored);
        assert_eq!(game.click(4), Step::Ignored);
    }

    #[test]
    fn test_new_game_redraws_and_resets() {
        let mut game = MemoryGame::new(3, 4, 12).unwrap();
        game.click(0);
        game.click(1);
        game.new_game().unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.status.round, 2);
        assert_eq!(snap.status.moves, 0);
        assert!(!snap.status.locked);
        assert!(snap.cards.iter().all(|c| !c.face_up && !c.matched));
        assert_eq!(snap.total_pairs, 4);
    }
}
