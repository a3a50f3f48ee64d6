//! Effect application - turning a parsed card effect into stat changes.
//!
//! Resolution order for one card played by one role:
//!
//! 1. A card with no effect text is rejected.
//! 2. The role restriction gate is all-or-nothing: a disallowed role
//!    changes nothing, not even the base effects.
//! 3. Base effects apply in order.
//! 4. Conditional blocks are checked in source order against the live
//!    stats, so an earlier block can enable or disable a later one.

use tracing::{debug, warn};

use super::condition::ConditionEvaluator;
use super::effect::{EffectAst, RoleSet};
use super::parser::EffectCache;
use crate::cards::Card;
use crate::core::{Role, Stat, StatChange, Stats};

/// Why a card's effect was not applied. No stats changed in either case.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyRejection {
    #[error("{card} has no effect text")]
    EmptyEffect { card: String },

    #[error("{card} cannot be played by {role}")]
    RoleRestricted {
        card: String,
        role: Role,
        allowed: RoleSet,
    },
}

/// What an applied effect did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectReport {
    /// Every realized stat change, in application order.
    pub changes: Vec<StatChange>,
    /// Indices into `conditional_blocks` whose condition held.
    pub fired_blocks: Vec<usize>,
}

impl EffectReport {
    /// Net realized change per stat, skipping stats that did not move.
    #[must_use]
    pub fn net_changes(&self) -> Vec<(Stat, i64)> {
        let mut net: Vec<(Stat, i64)> = Vec::new();
        for change in &self.changes {
            match net.iter_mut().find(|(stat, _)| *stat == change.stat) {
                Some((_, total)) => *total += change.realized(),
                None => net.push((change.stat, change.realized())),
            }
        }
        net.retain(|(_, total)| *total != 0);
        net
    }
}

/// Applies card effects, caching parses by effect text.
#[derive(Clone, Debug, Default)]
pub struct EffectApplicator {
    cache: EffectCache,
}

impl EffectApplicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `card` as played by `role`. Returns true if it resolved.
    pub fn apply(&mut self, card: &Card, role: Role, stats: &mut Stats) -> bool {
        self.try_apply(card, role, stats).is_ok()
    }

    /// Apply `card` as played by `role`, reporting what changed.
    pub fn try_apply(
        &mut self,
        card: &Card,
        role: Role,
        stats: &mut Stats,
    ) -> Result<EffectReport, ApplyRejection> {
        if !card.has_effect() {
            warn!(card = %card.name, "card has no effect text");
            return Err(ApplyRejection::EmptyEffect {
                card: card.name.clone(),
            });
        }

        let ast = self.cache.get_or_parse(&card.effect);
        if !ast.allows(role) {
            warn!(card = %card.name, role = %role, "role restriction rejected card");
            return Err(ApplyRejection::RoleRestricted {
                card: card.name.clone(),
                role,
                allowed: ast.role_restrictions.clone(),
            });
        }

        debug!(card = %card.name, role = %role, "applying card effect");
        Ok(Self::resolve(ast, role, stats))
    }

    /// Apply an already-gated AST. Does not check role restrictions.
    pub fn resolve(ast: &EffectAst, role: Role, stats: &mut Stats) -> EffectReport {
        let mut report = EffectReport::default();

        for delta in &ast.base_effects {
            report.changes.extend(delta.apply_to(stats));
        }

        for (index, block) in ast.conditional_blocks.iter().enumerate() {
            if !ConditionEvaluator::evaluate(&block.condition, role, stats) {
                continue;
            }
            debug!(condition = %block.condition, "condition met");
            report.fired_blocks.push(index);
            for delta in &block.effects {
                report.changes.extend(delta.apply_to(stats));
            }
        }

        report
    }
}

/// One-shot apply without a shared cache.
pub fn apply_card_effect(card: &Card, role: Role, stats: &mut Stats) -> bool {
    EffectApplicator::new().apply(card, role, stats)
}
