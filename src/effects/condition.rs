//! Condition evaluation.
//!
//! Conditions are checked against the acting role and the live stats.
//! `Condition::Unknown` fails closed: a block with an unrecognized
//! condition never fires.

use super::effect::Condition;
use crate::core::{Role, Stats};

/// Evaluator for parsed conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check if a condition is satisfied.
    #[must_use]
    pub fn evaluate(condition: &Condition, role: Role, stats: &Stats) -> bool {
        match condition {
            Condition::Role { roles } => roles.contains(&role),

            Condition::Stat {
                stat,
                threshold,
                comparator,
            } => comparator.holds(stats.get(*stat), *threshold),

            Condition::Unknown { .. } => false,
        }
    }
}
