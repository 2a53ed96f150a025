//! Scoring module - star ratings and reveal points
//!
//! Star thresholds scale with a per-game par rather than being fixed
//! constants: three stars up to `ceil(par * 5 / 4)` moves, two stars up to
//! `par * 2`, one star beyond. With the memory game's par of 8 pairs this
//! gives the familiar 10 / 16 move bands.

use crate::types::{Rating, REVEAL_MIN_SCORE, REVEAL_POINTS_PER_BLOCK};

/// Move thresholds for (three stars, two stars).
pub fn star_thresholds(par: u32) -> (u32, u32) {
    (par.saturating_mul(5).div_ceil(4), par.saturating_mul(2))
}

/// Rating for a finished round.
pub fn rating_for_moves(moves: u32, par: u32) -> Rating {
    let (three, two) = star_thresholds(par);
    if moves <= three {
        Rating::Three
    } else if moves <= two {
        Rating::Two
    } else {
        Rating::One
    }
}

/// Points for a correct reveal guess with `remaining_blocks` still covering
/// the photo. Fewer blocks removed scores higher, never below the floor.
pub fn reveal_score(remaining_blocks: usize) -> u32 {
    let points = (remaining_blocks as u32).saturating_mul(REVEAL_POINTS_PER_BLOCK);
    points.max(REVEAL_MIN_SCORE)
}
