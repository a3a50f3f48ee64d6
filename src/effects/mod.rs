//! Card effect system.
//!
//! Effect text flows through three stages:
//! - `parse`: effect text to `EffectAst` (total, never fails)
//! - `ConditionEvaluator`: decides whether a block's condition holds
//! - `EffectApplicator`: gates on role, then mutates `Stats`
//!
//! `preview_placement` runs the first two stages read-only for
//! advisory checks before a card is committed to a slot.

mod effect;
mod scan;
mod parser;
mod condition;
mod applicator;
mod preview;

pub use effect::{
    Comparator, Condition, ConditionalBlock, DeltaList, EffectAst, RoleSet, StatDelta,
};
pub use parser::{parse, parse_condition, parse_fragment, EffectCache};
pub use condition::ConditionEvaluator;
pub use applicator::{apply_card_effect, ApplyRejection, EffectApplicator, EffectReport};
pub use preview::{preview_placement, PlacementPreview};
