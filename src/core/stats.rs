//! The four bounded player stats and their update rule.
//!
//! Every mutation goes through [`Stats::set`] or [`Stats::change`], which
//! share a single clamp so the invariants below hold after each call:
//!
//! - `0 <= accounting <= 15`
//! - every stat `>= 0`
//! - `enrollment <= experience`
//!
//! The clamp order matters: the range/floor clamp runs first, then
//! enrollment is capped by the (possibly just-updated) experience value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

/// Upper bound for `accounting`.
pub const ACCOUNTING_MAX: i64 = 15;

/// One of the four player stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    /// 体験: trial lessons booked.
    Experience,
    /// 入塾: enrolled students. Capped by `Experience`.
    Enrollment,
    /// 満足: customer satisfaction.
    Satisfaction,
    /// 経理: bookkeeping health, `0..=15`.
    Accounting,
}

impl Stat {
    /// All stats, in display order.
    pub const ALL: [Stat; 4] = [
        Stat::Experience,
        Stat::Enrollment,
        Stat::Satisfaction,
        Stat::Accounting,
    ];

    const fn index(self) -> usize {
        match self {
            Stat::Experience => 0,
            Stat::Enrollment => 1,
            Stat::Satisfaction => 2,
            Stat::Accounting => 3,
        }
    }

    /// The token card text uses for this stat.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Experience => "体験",
            Stat::Enrollment => "入塾",
            Stat::Satisfaction => "満足",
            Stat::Accounting => "経理",
        }
    }

    /// Map a card-text token to a stat.
    #[must_use]
    pub fn from_label(token: &str) -> Option<Stat> {
        Stat::ALL.into_iter().find(|stat| stat.label() == token)
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A realized change to one stat.
///
/// `realized()` is post-clamp minus pre-clamp and may differ from the
/// requested amount when a bound was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    pub stat: Stat,
    pub before: i64,
    pub after: i64,
}

impl StatChange {
    /// Post-clamp minus pre-clamp value.
    #[must_use]
    pub const fn realized(&self) -> i64 {
        self.after - self.before
    }
}

/// Changes produced by a single mutation: the target stat first, then an
/// enrollment cascade if the experience cap moved it.
pub type StatChanges = SmallVec<[StatChange; 2]>;

/// The player's four stats.
///
/// `Copy`, so a plain copy serves as a before/after snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    values: [i64; 4],
}

/// A copied view of all four stats, taken for before/after reports.
pub type StatSnapshot = Stats;

impl Default for Stats {
    /// Opening values: experience 0, enrollment 0, satisfaction 3, accounting 3.
    fn default() -> Self {
        Self { values: [0, 0, 3, 3] }
    }
}

impl Stats {
    /// Build a stat block, clamping the inputs into a valid state.
    ///
    /// ```
    /// use juku_deck::core::{Stat, Stats};
    ///
    /// let stats = Stats::new(2, 5, 1, 20);
    /// assert_eq!(stats.get(Stat::Enrollment), 2);
    /// assert_eq!(stats.get(Stat::Accounting), 15);
    /// ```
    #[must_use]
    pub fn new(experience: i64, enrollment: i64, satisfaction: i64, accounting: i64) -> Self {
        let mut stats = Self {
            values: [experience, enrollment, satisfaction, accounting],
        };
        for stat in Stat::ALL {
            stats.values[stat.index()] = Self::bound(stat, stats.get(stat));
        }
        stats.cap_enrollment();
        stats
    }

    /// Current value of a stat.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> i64 {
        self.values[stat.index()]
    }

    /// Set a stat to an absolute value, then clamp.
    pub fn set(&mut self, stat: Stat, value: i64) -> StatChanges {
        self.update(stat, value, value.saturating_sub(self.get(stat)))
    }

    /// Add a (possibly negative) delta to a stat, then clamp.
    pub fn change(&mut self, stat: Stat, delta: i64) -> StatChanges {
        let target = self.get(stat).saturating_add(delta);
        self.update(stat, target, delta)
    }

    /// Check all invariants.
    ///
    /// Holds for every value produced by `new`, `set` and `change`.
    /// Deserialized values skip the clamp, so restore checks this.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.values.iter().all(|&v| v >= 0)
            && self.get(Stat::Accounting) <= ACCOUNTING_MAX
            && self.get(Stat::Enrollment) <= self.get(Stat::Experience)
    }

    fn update(&mut self, stat: Stat, target: i64, requested: i64) -> StatChanges {
        let before = self.get(stat);
        let enrollment_before = self.get(Stat::Enrollment);

        self.values[stat.index()] = Self::bound(stat, target);
        self.cap_enrollment();

        let change = StatChange {
            stat,
            before,
            after: self.get(stat),
        };
        debug!(
            stat = %stat,
            before,
            after = change.after,
            requested,
            realized = change.realized(),
            "stat updated"
        );

        let mut changes = StatChanges::new();
        changes.push(change);

        let enrollment_after = self.get(Stat::Enrollment);
        if stat != Stat::Enrollment && enrollment_after != enrollment_before {
            debug!(
                before = enrollment_before,
                after = enrollment_after,
                "enrollment capped by experience"
            );
            changes.push(StatChange {
                stat: Stat::Enrollment,
                before: enrollment_before,
                after: enrollment_after,
            });
        }
        changes
    }

    fn bound(stat: Stat, value: i64) -> i64 {
        match stat {
            Stat::Accounting => value.clamp(0, ACCOUNTING_MAX),
            _ => value.max(0),
        }
    }

    fn cap_enrollment(&mut self) {
        let cap = self.get(Stat::Experience);
        let enrollment = &mut self.values[Stat::Enrollment.index()];
        *enrollment = (*enrollment).min(cap);
    }
}
