//! Game configuration types.
//!
//! - `TurnConfig`: the static per-turn table (training rarity,
//!   recommended category and stat, delete quota)
//! - `ForcedDraws`: card names that override normal draws
//! - `SessionConfig`: seed, draw/pick sizes, and forced draws
//!
//! The turn table is constant for the process lifetime.

use serde::{Deserialize, Serialize};

use super::role::RoleMap;
use super::stats::Stat;
use crate::cards::{Card, Category, Rarity};

/// Number of turns in a game.
pub const TURN_COUNT: u8 = 8;

/// Static configuration for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnConfig {
    /// Calendar label shown to the player.
    pub label: &'static str,
    /// Pool the training offer is drawn from.
    pub training_rarity: Rarity,
    pub recommended_category: Option<Category>,
    /// Stat that gets +1 for each placed card of the recommended category.
    pub recommended_stat: Option<Stat>,
    /// Cards that may be removed from the deck in the meeting (0..=2).
    pub delete_quota: u8,
}

const fn turn(
    label: &'static str,
    training_rarity: Rarity,
    category: Category,
    stat: Stat,
    delete_quota: u8,
) -> TurnConfig {
    TurnConfig {
        label,
        training_rarity,
        recommended_category: Some(category),
        recommended_stat: Some(stat),
        delete_quota,
    }
}

/// The eight turns, late January through early May.
pub static TURN_TABLE: [TurnConfig; TURN_COUNT as usize] = [
    turn("1月下旬", Rarity::R, Category::Outreach, Stat::Experience, 2),
    turn("2月上旬", Rarity::SR, Category::Reception, Stat::Satisfaction, 2),
    turn("2月下旬", Rarity::R, Category::Outreach, Stat::Experience, 1),
    turn("3月上旬", Rarity::SSR, Category::Administration, Stat::Accounting, 1),
    turn("3月下旬", Rarity::SSR, Category::Academics, Stat::Enrollment, 1),
    turn("4月上旬", Rarity::SR, Category::Reception, Stat::Satisfaction, 1),
    turn("4月下旬", Rarity::SR, Category::Academics, Stat::Enrollment, 1),
    turn("5月上旬", Rarity::SR, Category::Administration, Stat::Accounting, 0),
];

impl TurnConfig {
    /// Look up the configuration for a turn index.
    #[must_use]
    pub fn for_turn(turn: u8) -> Option<&'static TurnConfig> {
        TURN_TABLE.get(turn as usize)
    }

    /// Whether a card earns this turn's recommended-stat bonus.
    #[must_use]
    pub fn is_recommended(&self, card: &Card) -> bool {
        self.recommended_category == Some(card.category)
    }

    /// Count placed cards that match the recommended category.
    #[must_use]
    pub fn recommended_count(&self, placed: &RoleMap<Option<Card>>) -> usize {
        placed
            .iter()
            .filter_map(|(_, slot)| slot.as_ref())
            .filter(|card| self.is_recommended(card))
            .count()
    }
}

/// Card names that are drawn first, in order, ahead of the normal draw.
///
/// Used for deterministic tests and debugging. A name found in the
/// source pile is taken from it; a name found only in the catalog is
/// inserted as a fresh copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedDraws {
    /// Applied to training offers.
    pub training: Vec<String>,
    /// Applied to hand draws from the player's deck.
    pub hand: Vec<String>,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for every shuffle in the session.
    pub seed: u64,
    /// Cards offered by the opening draft.
    pub opening_offer: usize,
    /// Cards that must be picked from the opening draft.
    pub opening_picks: usize,
    /// Cards offered by later training phases.
    pub training_offer: usize,
    /// Cards that must be picked from later training offers.
    pub training_picks: usize,
    /// Cards drawn into hand at the start of each action phase.
    pub hand_size: usize,
    pub forced: ForcedDraws,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            opening_offer: 4,
            opening_picks: 2,
            training_offer: 3,
            training_picks: 1,
            hand_size: 4,
            forced: ForcedDraws::default(),
        }
    }
}

impl SessionConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Force the named cards into training offers.
    #[must_use]
    pub fn with_forced_training(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.forced.training = names.into_iter().map(Into::into).collect();
        self
    }

    /// Force the named cards into hand draws.
    #[must_use]
    pub fn with_forced_hand(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.forced.hand = names.into_iter().map(Into::into).collect();
        self
    }

    /// Create a new config with custom hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// (offered, picks) for the training phase of `turn`.
    ///
    /// Turn 0 is the opening draft; every later turn uses the regular sizes.
    #[must_use]
    pub fn training_arity(&self, turn: u8) -> (usize, usize) {
        if turn == 0 {
            (self.opening_offer, self.opening_picks)
        } else {
            (self.training_offer, self.training_picks)
        }
    }
}
