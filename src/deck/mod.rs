//! Deck and draw subsystem.
//!
//! - `draw_cards`: forced-name override, then pop from the top
//! - `TrainingPools`: per-rarity piles the training offers come from
//!
//! The player's own deck lives in `GamePlayerState` and draws through the
//! same `draw_cards` routine.

mod draw;
mod pools;

pub use draw::draw_cards;
pub use pools::TrainingPools;
