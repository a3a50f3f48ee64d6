//! Errors surfaced by session actions and snapshot restore.
//!
//! None of these cross the crate boundary as panics: a rejected action
//! leaves the session untouched and returns the reason.

use super::role::Role;
use super::stats::Stats;
use crate::session::Phase;

/// Why a session action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("action requires phase {expected:?}, session is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("no training offer is pending")]
    NoPendingOffer,

    #[error("the training offer has not been resolved")]
    OfferPending,

    #[error("expected {expected} selected cards, got {got}")]
    SelectionCount { expected: usize, got: usize },

    #[error("selection index {index} out of range for {len} cards")]
    SelectionIndex { index: usize, len: usize },

    #[error("card {0} selected more than once")]
    DuplicateSelection(usize),

    #[error("delete quota is {quota}, {got} cards selected")]
    DeleteQuotaExceeded { quota: u8, got: usize },

    #[error("hand index {index} out of range for {len} cards")]
    HandIndex { index: usize, len: usize },

    #[error("{0} slot already holds a card")]
    SlotOccupied(Role),

    #[error("the game has ended")]
    GameOver,

    #[error("turn {0} is outside the turn table")]
    TurnOutOfRange(u8),

    #[error("stats break their bounds: {0:?}")]
    InvalidStats(Stats),

    #[error("a training offer cannot be pending in phase {0:?}")]
    UnexpectedOffer(Phase),
}

/// Errors from encoding or restoring a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot rejected: {0}")]
    Invalid(#[from] SessionError),
}
