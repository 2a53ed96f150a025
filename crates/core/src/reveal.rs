//! Photo reveal: peel blocks off a hidden photo, then guess which one it is.
//!
//! Blocks come off for good. A guess ends the round: a correct one scores
//! more the fewer blocks were removed, a wrong one scores nothing. Rounds
//! chain into a session with a running total.

use arrayvec::ArrayVec;

use crate::arrangement::Arrangement;
use crate::engine::{MovePolicy, Selection, SlotEngine, Step};
use crate::error::{GameError, Result};
use crate::photos::PhotoId;
use crate::rng::SimpleRng;
use crate::scoring::reveal_score;
use crate::snapshot::{GuessOutcome, RevealSnapshot};
use crate::types::{GameKind, REVEAL_BLOCKS, REVEAL_CHOICES, REVEAL_GRID};

/// Removing a block is irreversible; the round never "solves" on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPolicy {
    removed: Vec<bool>,
    removed_count: usize,
}

impl RevealPolicy {
    pub fn new() -> Self {
        Self {
            removed: vec![false; REVEAL_BLOCKS],
            removed_count: 0,
        }
    }

    pub fn is_removed(&self, block: usize) -> bool {
        self.removed.get(block).copied().unwrap_or(false)
    }

    pub fn removed(&self) -> &[bool] {
        &self.removed
    }

    pub fn removed_count(&self) -> usize {
        self.removed_count
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RevealPolicy {
    fn kind(&self) -> GameKind {
        GameKind::Reveal
    }

    fn par(&self) -> u32 {
        REVEAL_BLOCKS as u32
    }

    fn deal(&self, _rng: &mut SimpleRng) -> Result<Arrangement> {
        Ok(Arrangement::solved(REVEAL_BLOCKS))
    }

    fn validate(&self, cells: &Arrangement) -> Result<()> {
        if cells.len() != REVEAL_BLOCKS {
            return Err(GameError::InvalidArrangement("reveal grid must have 25 blocks"));
        }
        Ok(())
    }

    fn reset(&mut self, cells: &Arrangement) {
        self.removed = vec![false; cells.len()];
        self.removed_count = 0;
    }

    fn click(&mut self, _cells: &mut Arrangement, _selection: &mut Selection, slot: usize) -> Step {
        if self.removed[slot] {
            return Step::Ignored;
        }
        self.removed[slot] = true;
        self.removed_count += 1;
        Step::Committed
    }

    fn is_solved(&self, _cells: &Arrangement) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct RevealGame {
    engine: SlotEngine<RevealPolicy>,
    rng: SimpleRng,
    catalog_len: usize,
    target: PhotoId,
    choices: ArrayVec<PhotoId, REVEAL_CHOICES>,
    guess: Option<GuessOutcome>,
    total_score: u32,
    palette: Vec<u8>,
}

impl RevealGame {
    /// Start a session over a catalog of `catalog_len` photos.
    pub fn new(seed: u32, catalog_len: usize) -> Result<Self> {
        if catalog_len < REVEAL_CHOICES {
            return Err(GameError::NotEnoughPhotos {
                needed: REVEAL_CHOICES,
                available: catalog_len,
            });
        }
        let mut rng = SimpleRng::new(seed);
        let mut palette: Vec<u8> = (0..REVEAL_BLOCKS as u8).collect();
        rng.shuffle(&mut palette);

        let target = pick_target(catalog_len, None, &mut rng);
        let choices = pick_choices(target, catalog_len, &mut rng);
        let engine = SlotEngine::deal(RevealPolicy::new(), &mut rng)?;
        Ok(Self {
            engine,
            rng,
            catalog_len,
            target,
            choices,
            guess: None,
            total_score: 0,
            palette,
        })
    }

    /// Start a session on a known target and choice list.
    pub fn with_target(target: PhotoId, choices: &[PhotoId], catalog_len: usize) -> Result<Self> {
        if catalog_len < REVEAL_CHOICES {
            return Err(GameError::NotEnoughPhotos {
                needed: REVEAL_CHOICES,
                available: catalog_len,
            });
        }
        if let Some(&bad) = choices.iter().chain([&target]).find(|&&p| p >= catalog_len) {
            return Err(GameError::PhotoOutOfRange {
                id: bad,
                len: catalog_len,
            });
        }
        let distinct = choices
            .iter()
            .enumerate()
            .all(|(i, photo)| !choices[..i].contains(photo));
        if choices.len() != REVEAL_CHOICES || !distinct || !choices.contains(&target) {
            return Err(GameError::InvalidArrangement(
                "choices must be four distinct photos including the target",
            ));
        }
        let engine =
            SlotEngine::with_arrangement(RevealPolicy::new(), Arrangement::solved(REVEAL_BLOCKS))?;
        Ok(Self {
            engine,
            rng: SimpleRng::default(),
            catalog_len,
            target,
            choices: choices.iter().copied().collect(),
            guess: None,
            total_score: 0,
            palette: (0..REVEAL_BLOCKS as u8).collect(),
        })
    }

    /// Remove a block. Re-clicks and clicks after the guess are ignored.
    pub fn remove_block(&mut self, block: usize) -> Step {
        self.engine.click(block)
    }

    /// Guess a photo. Only the offered choices count, and only once per round.
    pub fn guess(&mut self, photo: PhotoId) -> Option<GuessOutcome> {
        if self.engine.is_over() || !self.choices.contains(&photo) {
            return None;
        }

        let remaining_blocks = self.remaining_blocks();
        let correct = photo == self.target;
        let score = if correct {
            reveal_score(remaining_blocks)
        } else {
            0
        };
        let outcome = GuessOutcome {
            photo,
            correct,
            score,
            remaining_blocks,
        };

        self.engine.finish();
        self.guess = Some(outcome);
        self.total_score = self.total_score.saturating_add(score);
        tracing::info!(
            round = self.engine.round(),
            correct,
            score,
            total = self.total_score,
            "reveal guess"
        );
        Some(outcome)
    }

    /// Guess by position in the choice list.
    pub fn guess_choice(&mut self, index: usize) -> Option<GuessOutcome> {
        let photo = self.choices.get(index).copied()?;
        self.guess(photo)
    }

    /// Next round: a different target, fresh choices, every block back.
    pub fn next_round(&mut self) -> Result<()> {
        self.target = pick_target(self.catalog_len, Some(self.target), &mut self.rng);
        self.choices = pick_choices(self.target, self.catalog_len, &mut self.rng);
        self.guess = None;
        self.engine.restart(&mut self.rng)
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.engine.tick(elapsed_ms)
    }

    pub fn target(&self) -> PhotoId {
        self.target
    }

    pub fn choices(&self) -> &[PhotoId] {
        &self.choices
    }

    pub fn last_guess(&self) -> Option<GuessOutcome> {
        self.guess
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn round(&self) -> u32 {
        self.engine.round()
    }

    pub fn removed_count(&self) -> usize {
        self.engine.policy().removed_count()
    }

    pub fn remaining_blocks(&self) -> usize {
        REVEAL_BLOCKS - self.removed_count()
    }

    /// Share of the photo uncovered, rounded to whole percent.
    pub fn revealed_percent(&self) -> u32 {
        ((self.removed_count() * 100 + REVEAL_BLOCKS / 2) / REVEAL_BLOCKS) as u32
    }

    pub fn engine(&self) -> &SlotEngine<RevealPolicy> {
        &self.engine
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            status: self.engine.status(),
            target: self.target,
            choices: self.choices.to_vec(),
            removed: self.engine.policy().removed().to_vec(),
            columns: REVEAL_GRID,
            palette: self.palette.clone(),
            remaining_blocks: self.remaining_blocks(),
            revealed_percent: self.revealed_percent(),
            guess: self.guess,
            total_score: self.total_score,
        }
    }
}

fn pick_target(catalog_len: usize, exclude: Option<PhotoId>, rng: &mut SimpleRng) -> PhotoId {
    loop {
        let id = rng.next_index(catalog_len);
        if Some(id) != exclude {
            return id;
        }
    }
}

fn pick_choices(
    target: PhotoId,
    catalog_len: usize,
    rng: &mut SimpleRng,
) -> ArrayVec<PhotoId, REVEAL_CHOICES> {
    let mut choices = ArrayVec::new();
    choices.push(target);
    while !choices.is_full() {
        let id = rng.next_index(catalog_len);
        if !choices.contains(&id) {
            choices.push(id);
        }
    }
    rng.shuffle(&mut choices);
    choices
}
