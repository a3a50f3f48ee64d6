//! Effect text parser.
//!
//! Card effects are short authored sentences built from a closed set of
//! patterns:
//!
//! | Pattern | Meaning |
//! |---|---|
//! | `【室長・講師】` | only these roles may play the card |
//! | `〈条件〉効果` | apply `効果` only if `条件` holds |
//! | `経理を14にする` | set a stat |
//! | `体験+2`, `満足-1` | change a stat |
//!
//! Parsing is total: unrecognized text yields empty lists or
//! `Condition::Unknown`, never an error.
//!
//! ```
//! use juku_deck::core::{Role, Stat};
//! use juku_deck::effects::{parse, StatDelta};
//!
//! let ast = parse("【室長】満足+2、〈満足8以上〉経理+1。");
//! assert_eq!(ast.role_restrictions.as_slice(), &[Role::Leader]);
//! assert_eq!(
//!     ast.base_effects.as_slice(),
//!     &[StatDelta::ChangeBy { stat: Stat::Satisfaction, delta: 2 }]
//! );
//! assert_eq!(ast.conditional_blocks.len(), 1);
//! ```

use rustc_hash::FxHashMap;

use super::effect::{
    Comparator, Condition, ConditionalBlock, DeltaList, EffectAst, RoleSet, StatDelta,
};
use super::scan::{self, LIST_SEPARATOR};
use crate::core::Role;

/// Parse one card's effect text.
#[must_use]
pub fn parse(text: &str) -> EffectAst {
    let restrictions = scan::restriction_spans(text);
    let role_restrictions = restrictions
        .first()
        .map(|span| parse_role_list(&text[span.inner.clone()]))
        .unwrap_or_default();

    let conditional_blocks = scan::conditional_spans(text, 1)
        .into_iter()
        .map(|span| ConditionalBlock {
            condition: parse_condition(text[span.condition].trim()),
            effects: parse_fragment(text[span.effect].trim()),
        })
        .collect();

    // Base text: drop every restriction span, then every conditional span
    // (including ones with no effect text) from what is left.
    let unrestricted = scan::strip_spans(text, restrictions.iter().map(|s| s.start..s.end));
    let base_text = scan::strip_spans(
        &unrestricted,
        scan::conditional_spans(&unrestricted, 0)
            .iter()
            .map(|s| s.start..s.end()),
    );

    EffectAst {
        role_restrictions,
        base_effects: parse_fragment(&base_text),
        conditional_blocks,
    }
}

/// Parse the text inside a condition marker.
///
/// A `・`-separated list that names at least one role is a role condition
/// (unrecognized items are dropped). Otherwise the first
/// `<stat><N>以上|以下` found anywhere in the text is a stat condition.
#[must_use]
pub fn parse_condition(text: &str) -> Condition {
    let roles = parse_role_list(text);
    if !roles.is_empty() {
        return Condition::Role { roles };
    }

    char_offsets(text)
        .find_map(|pos| stat_condition_at(text, pos))
        .unwrap_or_else(|| Condition::Unknown {
            raw: text.to_string(),
        })
}

/// Parse an effect fragment into stat deltas.
///
/// At most one `SetTo` (the first occurrence) comes first, followed by
/// every non-overlapping `ChangeBy` from left to right.
#[must_use]
pub fn parse_fragment(fragment: &str) -> DeltaList {
    let mut deltas = DeltaList::new();

    if let Some(set) = char_offsets(fragment).find_map(|pos| set_to_at(fragment, pos)) {
        deltas.push(set);
    }

    let mut pos = 0;
    while pos < fragment.len() {
        match change_by_at(fragment, pos) {
            Some((delta, end)) => {
                deltas.push(delta);
                pos = end;
            }
            None => pos = scan::next_char(fragment, pos),
        }
    }

    deltas
}

fn parse_role_list(text: &str) -> RoleSet {
    let mut roles = RoleSet::new();
    for role in text.split(LIST_SEPARATOR).filter_map(|t| Role::from_label(t.trim())) {
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles
}

fn char_offsets(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.char_indices().map(|(i, _)| i)
}

/// `<stat>を<N>にする`
fn set_to_at(text: &str, pos: usize) -> Option<StatDelta> {
    let (stat, pos) = scan::stat_at(text, pos)?;
    let pos = scan::literal_at(text, pos, "を")?;
    let (value, pos) = scan::number_at(text, pos)?;
    scan::literal_at(text, pos, "にする")?;
    Some(StatDelta::SetTo { stat, value })
}

/// `<stat>+<N>` or `<stat>-<N>`
fn change_by_at(text: &str, pos: usize) -> Option<(StatDelta, usize)> {
    let (stat, pos) = scan::stat_at(text, pos)?;
    let (sign, pos) = if let Some(pos) = scan::literal_at(text, pos, "+") {
        (1, pos)
    } else {
        (-1, scan::literal_at(text, pos, "-")?)
    };
    let (amount, end) = scan::number_at(text, pos)?;
    Some((
        StatDelta::ChangeBy {
            stat,
            delta: sign * amount,
        },
        end,
    ))
}

/// `<stat><N>以上` or `<stat><N>以下`
fn stat_condition_at(text: &str, pos: usize) -> Option<Condition> {
    let (stat, pos) = scan::stat_at(text, pos)?;
    let (threshold, pos) = scan::number_at(text, pos)?;
    let comparator = [Comparator::Gte, Comparator::Lte]
        .into_iter()
        .find(|c| scan::literal_at(text, pos, c.label()).is_some())?;
    Some(Condition::Stat {
        stat,
        threshold,
        comparator,
    })
}

/// Memoized `parse`, keyed by effect text.
#[derive(Clone, Debug, Default)]
pub struct EffectCache {
    entries: FxHashMap<String, EffectAst>,
}

impl EffectCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text`, or return the earlier parse of the same text.
    pub fn get_or_parse(&mut self, text: &str) -> &EffectAst {
        if !self.entries.contains_key(text) {
            self.entries.insert(text.to_owned(), parse(text));
        }
        &self.entries[text]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
