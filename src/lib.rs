//! # juku-deck
//!
//! Rules core for a single-player deck-building game about running a
//! cram-school classroom.
//!
//! Cards carry short Japanese effect sentences such as
//! `【室長】満足+2、〈満足8以上〉経理+1。`. The crate parses them into a
//! small AST, evaluates their conditions, applies their stat changes
//! under a fixed clamp rule, and sequences all of it through an
//! eight-turn phase machine with seeded shuffles.
//!
//! ## Design Principles
//!
//! 1. **Total parsing**: any text parses; unrecognized pieces become
//!    empty lists or `Condition::Unknown`, which never fires.
//!
//! 2. **One clamp rule**: every stat write goes through `Stats`, so the
//!    invariants hold after each mutation.
//!
//! 3. **Deterministic**: the only randomness is `GameRng`, seeded from
//!    the config and captured in snapshots.
//!
//! ## Modules
//!
//! - `core`: stats, roles, turn table, player state, RNG, config, errors
//! - `cards`: card value type and catalog
//! - `effects`: effect parser, condition evaluator, applicator, preview
//! - `deck`: training pools and the draw routine
//! - `session`: the phase machine and snapshots
//!
//! ## Example
//!
//! ```
//! use juku_deck::core::{Role, Stat, Stats};
//! use juku_deck::cards::{Card, Category, Rarity};
//! use juku_deck::effects::EffectApplicator;
//!
//! let card = Card::new(
//!     Category::Reception,
//!     Rarity::SR,
//!     "保護者面談",
//!     "【室長】満足+2、〈満足8以上〉経理+1。",
//! );
//! let mut stats = Stats::new(0, 0, 6, 3);
//! let mut applicator = EffectApplicator::new();
//!
//! assert!(applicator.apply(&card, Role::Leader, &mut stats));
//! assert_eq!(stats.get(Stat::Satisfaction), 8);
//! assert_eq!(stats.get(Stat::Accounting), 4);
//!
//! assert!(!applicator.apply(&card, Role::Teacher, &mut stats));
//! ```

pub mod core;
pub mod cards;
pub mod effects;
pub mod deck;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Role, RoleMap, Stat, StatChange, Stats,
    GameRng, GameRngState,
    SessionConfig, ForcedDraws, TurnConfig, TURN_TABLE, TURN_COUNT,
    GamePlayerState, SessionError, SnapshotError,
};

pub use crate::cards::{Card, CardCatalog, Category, Rarity};

pub use crate::effects::{
    parse, apply_card_effect, Condition, EffectAst, StatDelta,
    ApplyRejection, EffectApplicator, EffectReport,
};

pub use crate::deck::{draw_cards, TrainingPools};

pub use crate::session::{Phase, RoleResolution, Session, SessionSnapshot};
