//! Effect AST.
//!
//! One card's effect text parses into an [`EffectAst`]:
//!
//! - `role_restrictions`: roles allowed to play the card (empty = any)
//! - `base_effects`: stat deltas applied unconditionally
//! - `conditional_blocks`: condition-gated deltas, in source order
//!
//! The grammar is closed, so every node is a plain tagged enum.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Role, Stat, StatChanges, Stats};

/// A set of roles. At most three entries, no duplicates, authored order.
pub type RoleSet = SmallVec<[Role; 3]>;

/// Deltas parsed from one fragment. Usually one or two.
pub type DeltaList = SmallVec<[StatDelta; 2]>;

/// A single stat mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatDelta {
    /// 「経理を14にする」: set to an absolute value.
    SetTo { stat: Stat, value: i64 },
    /// 「体験+2」「満足-1」: add a signed amount.
    ChangeBy { stat: Stat, delta: i64 },
}

impl StatDelta {
    /// Apply through the stat store's clamp rule.
    pub fn apply_to(&self, stats: &mut Stats) -> StatChanges {
        match *self {
            StatDelta::SetTo { stat, value } => stats.set(stat, value),
            StatDelta::ChangeBy { stat, delta } => stats.change(stat, delta),
        }
    }
}

impl std::fmt::Display for StatDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatDelta::SetTo { stat, value } => write!(f, "{stat}を{value}にする"),
            StatDelta::ChangeBy { stat, delta } if *delta < 0 => write!(f, "{stat}{delta}"),
            StatDelta::ChangeBy { stat, delta } => write!(f, "{stat}+{delta}"),
        }
    }
}

/// Threshold comparison for stat conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// 以上
    Gte,
    /// 以下
    Lte,
}

impl Comparator {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Comparator::Gte => "以上",
            Comparator::Lte => "以下",
        }
    }

    #[must_use]
    pub const fn holds(self, value: i64, threshold: i64) -> bool {
        match self {
            Comparator::Gte => value >= threshold,
            Comparator::Lte => value <= threshold,
        }
    }
}

/// A condition gating a conditional block.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Holds when the acting role is one of `roles`.
    Role { roles: RoleSet },
    /// Holds when `stat` compares against `threshold`.
    Stat {
        stat: Stat,
        threshold: i64,
        comparator: Comparator,
    },
    /// Unrecognized text. Never holds.
    Unknown { raw: String },
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Role { roles } => {
                for (i, role) in roles.iter().enumerate() {
                    if i > 0 {
                        f.write_str("・")?;
                    }
                    write!(f, "{role}")?;
                }
                Ok(())
            }
            Condition::Stat {
                stat,
                threshold,
                comparator,
            } => write!(f, "{stat}{threshold}{}", comparator.label()),
            Condition::Unknown { raw } if raw.is_empty() => f.write_str("不明"),
            Condition::Unknown { raw } => f.write_str(raw),
        }
    }
}

/// A condition and the deltas it unlocks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionalBlock {
    pub condition: Condition,
    pub effects: DeltaList,
}

/// Parsed form of one card's effect text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectAst {
    /// Empty means any role may play the card.
    pub role_restrictions: RoleSet,
    pub base_effects: DeltaList,
    pub conditional_blocks: Vec<ConditionalBlock>,
}

impl EffectAst {
    /// Whether `role` passes the restriction gate.
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.role_restrictions.is_empty() || self.role_restrictions.contains(&role)
    }
}
