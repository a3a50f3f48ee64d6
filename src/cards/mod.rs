//! Card system: the card value type and the catalog.
//!
//! ## Key Types
//!
//! - `Rarity`: N/R/SR/SSR, selects the training pool
//! - `Category`: action type, matched against the turn's recommendation
//! - `Card`: catalog fields plus first-write-wins `acquired_turn`
//! - `CardCatalog`: every known card, in load order
//!
//! Loading the catalog from an external table format is the caller's job.

pub mod card;
pub mod catalog;

pub use card::{Card, Category, Rarity};
pub use catalog::CardCatalog;
