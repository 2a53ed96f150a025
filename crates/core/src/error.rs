//! Construction-time errors.
//!
//! Gameplay never fails: rejected clicks are silent no-ops. Only dealing a
//! round from bad inputs (too few items, a catalog that is too small, a
//! hand-built arrangement that breaks the game's invariants) is an error.

use thiserror::Error;

use crate::photos::PhotoId;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("arrangement needs at least {min} items, got {got}")]
    TooFewItems { min: usize, got: usize },

    #[error("memory deck supports at most {max} pairs, got {got}")]
    TooManyPairs { max: usize, got: usize },

    #[error("{needed} photos required, catalog has {available}")]
    NotEnoughPhotos { needed: usize, available: usize },

    #[error("invalid arrangement: {0}")]
    InvalidArrangement(&'static str),

    #[error("photo {id} is not in the catalog ({len} photos)")]
    PhotoOutOfRange { id: PhotoId, len: usize },
}
