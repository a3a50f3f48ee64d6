//! Game session: the turn/phase machine and its snapshots.
//!
//! - `Phase`: start, training, action, meeting, end
//! - `Session`: owns all mutable game state and drives the phases
//! - `SessionSnapshot`: lossless capture for save and resume

mod phase;
mod machine;
mod snapshot;

pub use phase::Phase;
pub use machine::{RoleResolution, Session};
pub use snapshot::SessionSnapshot;
