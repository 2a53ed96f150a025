//! Slot engine - the shared round machinery behind every game
//!
//! [`SlotEngine`] owns one round: the arrangement, the current selection, the
//! move counter, the clock and the outcome. What a click *means* is delegated
//! to a [`MovePolicy`] (swap two tiles, slide into the gap, flip a card,
//! remove a block); everything else is common:
//!
//! - clicks after the round is over, while a resolution is pending, or on an
//!   out-of-range slot are silent no-ops
//! - the clock starts on the first accepted click
//! - moves increase by exactly one per committed click
//! - the win predicate runs after every commit (or after a deferred
//!   resolution lands) and its outcome is latched once
//!
//! # Deferred resolution
//!
//! A policy may answer a click with [`Step::Deferred`]. The engine then
//! locks input and holds a [`PendingResolution`] identified by a
//! [`ResolutionToken`]. It lands either when [`SlotEngine::tick`] has counted
//! down the delay, or when a scheduler calls [`SlotEngine::resolve`] with the
//! token. Restarting the round bumps the round id and drops the pending
//! resolution, so a token from an old round never touches the new one.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::arrangement::{Arrangement, Identity};
use crate::clock::RoundClock;
use crate::error::Result;
use crate::rng::SimpleRng;
use crate::scoring::rating_for_moves;
use crate::snapshot::RoundStatus;
use crate::types::{GameKind, Rating};

/// Up to two selected slots.
pub type Selection = ArrayVec<usize, 2>;

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Rejected; nothing changed.
    Ignored,
    /// Selection changed without committing a move.
    Selected,
    /// A move was committed and the win predicate has run.
    Committed,
    /// A move was committed; its outcome lands after this many milliseconds.
    Deferred(u32),
}

impl Step {
    pub fn accepted(&self) -> bool {
        !matches!(self, Step::Ignored)
    }
}

/// Identifies one deferred resolution within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolutionToken {
    pub round: u32,
    pub seq: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingResolution {
    pub token: ResolutionToken,
    pub remaining_ms: u32,
}

/// Per-game rules plugged into a [`SlotEngine`].
pub trait MovePolicy {
    fn kind(&self) -> GameKind;

    /// Move count the star thresholds scale from.
    fn par(&self) -> u32;

    /// Deal a fresh arrangement for a new round.
    fn deal(&self, rng: &mut SimpleRng) -> Result<Arrangement>;

    /// Check a hand-built arrangement against this game's invariants.
    fn validate(&self, cells: &Arrangement) -> Result<()>;

    /// Clear per-round policy state for a newly dealt arrangement.
    fn reset(&mut self, _cells: &Arrangement) {}

    /// Handle a click on an in-range slot of a live, unlocked round.
    fn click(&mut self, cells: &mut Arrangement, selection: &mut Selection, slot: usize) -> Step;

    /// Apply the outcome of a deferred click.
    fn settle(&mut self, _cells: &Arrangement, _selection: &mut Selection) {}

    fn is_solved(&self, cells: &Arrangement) -> bool;

    /// Identity of the gap tile, for games that have one.
    fn blank(&self) -> Option<Identity> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct SlotEngine<P> {
    policy: P,
    cells: Arrangement,
    selection: Selection,
    moves: u32,
    clock: RoundClock,
    /// Monotonic round id (increments on every restart).
    round: u32,
    /// Monotonic id for deferred resolutions within the round.
    resolution_seq: u32,
    pending: Option<PendingResolution>,
    won: bool,
    /// Round ended by an outside event (e.g. a reveal guess).
    closed: bool,
    rating: Option<Rating>,
}

impl<P: MovePolicy> SlotEngine<P> {
    /// Deal the first round.
    pub fn deal(mut policy: P, rng: &mut SimpleRng) -> Result<Self> {
        let cells = policy.deal(rng)?;
        policy.reset(&cells);
        let engine = Self::fresh(policy, cells, 1);
        engine.log_round();
        Ok(engine)
    }

    /// Start from a hand-built arrangement.
    pub fn with_arrangement(mut policy: P, cells: Arrangement) -> Result<Self> {
        policy.validate(&cells)?;
        policy.reset(&cells);
        let engine = Self::fresh(policy, cells, 1);
        engine.log_round();
        Ok(engine)
    }

    fn fresh(policy: P, cells: Arrangement, round: u32) -> Self {
        Self {
            policy,
            cells,
            selection: Selection::new(),
            moves: 0,
            clock: RoundClock::new(),
            round,
            resolution_seq: 0,
            pending: None,
            won: false,
            closed: false,
            rating: None,
        }
    }

    /// Replace the whole round with a freshly dealt one.
    ///
    /// Any pending resolution is dropped and its token goes stale.
    pub fn restart(&mut self, rng: &mut SimpleRng) -> Result<()> {
        let cells = self.policy.deal(rng)?;
        self.replace(cells);
        Ok(())
    }

    /// Replace the whole round with a hand-built arrangement.
    pub fn restart_with(&mut self, cells: Arrangement) -> Result<()> {
        self.policy.validate(&cells)?;
        self.replace(cells);
        Ok(())
    }

    fn replace(&mut self, cells: Arrangement) {
        self.policy.reset(&cells);
        self.cells = cells;
        self.selection.clear();
        self.moves = 0;
        self.clock = RoundClock::new();
        self.round = self.round.wrapping_add(1);
        self.resolution_seq = 0;
        self.pending = None;
        self.won = false;
        self.closed = false;
        self.rating = None;
        self.log_round();
    }

    fn log_round(&self) {
        tracing::debug!(
            game = self.policy.kind().as_str(),
            round = self.round,
            cells = ?self.cells.as_slice(),
            "round dealt"
        );
    }

    /// Apply a click on `slot`.
    pub fn click(&mut self, slot: usize) -> Step {
        if self.is_over() || self.pending.is_some() || slot >= self.cells.len() {
            return Step::Ignored;
        }

        let step = self
            .policy
            .click(&mut self.cells, &mut self.selection, slot);

        match step {
            Step::Ignored => {}
            Step::Selected => self.clock.start(),
            Step::Committed => {
                self.clock.start();
                self.moves += 1;
                tracing::trace!(
                    game = self.policy.kind().as_str(),
                    slot,
                    moves = self.moves,
                    "move"
                );
                self.check_win();
            }
            Step::Deferred(delay_ms) => {
                self.clock.start();
                self.moves += 1;
                self.resolution_seq = self.resolution_seq.wrapping_add(1);
                self.pending = Some(PendingResolution {
                    token: ResolutionToken {
                        round: self.round,
                        seq: self.resolution_seq,
                    },
                    remaining_ms: delay_ms,
                });
            }
        }
        step
    }

    /// Advance the clock and any pending resolution.
    ///
    /// Returns true if a resolution landed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.clock.tick(elapsed_ms);

        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return false;
        }
        self.settle();
        true
    }

    /// Land the pending resolution now, if `token` still names it.
    pub fn resolve(&mut self, token: ResolutionToken) -> bool {
        if self.pending.map(|p| p.token) != Some(token) {
            return false;
        }
        self.settle();
        true
    }

    fn settle(&mut self) {
        self.pending = None;
        self.policy.settle(&self.cells, &mut self.selection);
        self.check_win();
    }

    /// Run the win predicate. Latches once; later calls change nothing.
    pub fn check_win(&mut self) -> bool {
        if self.won {
            return true;
        }
        if self.closed || !self.policy.is_solved(&self.cells) {
            return false;
        }

        self.won = true;
        self.clock.stop();
        let rating = rating_for_moves(self.moves, self.policy.par());
        self.rating = Some(rating);
        tracing::info!(
            game = self.policy.kind().as_str(),
            round = self.round,
            moves = self.moves,
            secs = self.clock.elapsed_secs(),
            stars = rating.stars(),
            "round won"
        );
        true
    }

    /// End the round without a win. Returns false if it was already over.
    pub fn finish(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.closed = true;
        self.pending = None;
        self.selection.clear();
        self.clock.stop();
        true
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn cells(&self) -> &Arrangement {
        &self.cells
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        self.won || self.closed
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingResolution> {
        self.pending
    }

    pub fn pending_token(&self) -> Option<ResolutionToken> {
        self.pending.map(|p| p.token)
    }

    pub fn correct_count(&self) -> usize {
        self.cells.correct_count()
    }

    pub fn status(&self) -> RoundStatus {
        RoundStatus {
            game: self.policy.kind(),
            round: self.round,
            moves: self.moves,
            elapsed_secs: self.clock.elapsed_secs(),
            clock_running: self.clock.is_running(),
            locked: self.pending.is_some(),
            won: self.won,
            over: self.is_over(),
            rating: self.rating,
        }
    }
}
