//! Read-only placement check for UIs.
//!
//! Uses the same parser and evaluator as the applicator, so an advisory
//! never disagrees with what resolution will actually do at the moment
//! of the preview.

use super::condition::ConditionEvaluator;
use super::effect::Condition;
use super::parser::parse;
use crate::cards::Card;
use crate::core::{Role, Stats};

/// Result of previewing a card in a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementPreview {
    /// False when the role restriction would reject the card.
    pub allowed: bool,
    /// Role and stat conditions that do not hold right now.
    pub unmet_conditions: Vec<Condition>,
}

impl PlacementPreview {
    /// Allowed and every condition currently holds.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.allowed && self.unmet_conditions.is_empty()
    }
}

/// Preview placing `card` into `role` without touching `stats`.
#[must_use]
pub fn preview_placement(card: &Card, role: Role, stats: &Stats) -> PlacementPreview {
    let ast = parse(&card.effect);

    let unmet_conditions = ast
        .conditional_blocks
        .iter()
        .map(|block| &block.condition)
        .filter(|condition| !matches!(condition, Condition::Unknown { .. }))
        .filter(|condition| !ConditionEvaluator::evaluate(condition, role, stats))
        .cloned()
        .collect();

    PlacementPreview {
        allowed: ast.allows(role),
        unmet_conditions,
    }
}
