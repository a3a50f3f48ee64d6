//! Core types: stats, roles, turn table, player state, RNG, configuration.
//!
//! Everything the phase machine owns lives here; the effect system only
//! ever touches `Stats`.

pub mod stats;
pub mod role;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use stats::{Stat, StatChange, StatChanges, StatSnapshot, Stats, ACCOUNTING_MAX};
pub use role::{Role, RoleMap};
pub use rng::{GameRng, GameRngState};
pub use config::{ForcedDraws, SessionConfig, TurnConfig, TURN_COUNT, TURN_TABLE};
pub use state::GamePlayerState;
pub use error::{SessionError, SnapshotError};
