//! Property tests for the effect parser and the stat clamp.

use juku_deck::cards::{Card, Category, Rarity};
use juku_deck::core::{Role, Stat, Stats, ACCOUNTING_MAX};
use juku_deck::deck::draw_cards;
use juku_deck::effects::{parse, EffectApplicator, StatDelta};
use juku_deck::CardCatalog;
use proptest::prelude::*;

fn stat() -> impl Strategy<Value = Stat> {
    prop::sample::select(Stat::ALL.to_vec())
}

fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn delta() -> impl Strategy<Value = StatDelta> {
    prop_oneof![
        (stat(), -50i64..50).prop_map(|(stat, value)| StatDelta::SetTo { stat, value }),
        (stat(), -50i64..50).prop_map(|(stat, delta)| StatDelta::ChangeBy { stat, delta }),
    ]
}

/// Text built from grammar fragments, so brackets and tokens collide often.
fn effect_text() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec![
        "【", "】", "〈", "〉", "・", "。", "、", "室長", "講師", "事務", "体験", "入塾", "満足",
        "経理", "+", "-", "を", "にする", "以上", "以下", "0", "3", "8", "15", "99999999999999999999",
        "x", " ",
    ]);
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

fn stats() -> impl Strategy<Value = Stats> {
    (0i64..20, 0i64..20, 0i64..20, 0i64..=ACCOUNTING_MAX)
        .prop_map(|(exp, enr, sat, acc)| Stats::new(exp, enr, sat, acc))
}

proptest! {
    #[test]
    fn clamp_invariants_hold_after_every_delta(
        start in stats(),
        deltas in prop::collection::vec(delta(), 0..40),
    ) {
        let mut stats = start;
        for delta in deltas {
            delta.apply_to(&mut stats);
            prop_assert!(stats.get(Stat::Accounting) <= ACCOUNTING_MAX);
            prop_assert!(Stat::ALL.iter().all(|&s| stats.get(s) >= 0));
            prop_assert!(stats.get(Stat::Enrollment) <= stats.get(Stat::Experience));
        }
    }

    #[test]
    fn parse_is_total_on_grammar_soup(text in effect_text()) {
        let ast = parse(&text);
        prop_assert!(ast.role_restrictions.len() <= Role::ALL.len());
        for (i, role) in ast.role_restrictions.iter().enumerate() {
            prop_assert!(!ast.role_restrictions[..i].contains(role));
        }
        let set_to_count = ast.base_effects.iter().filter(|d| matches!(d, StatDelta::SetTo { .. })).count();
        prop_assert!(set_to_count <= 1);
        prop_assert_eq!(parse(&text), ast);
    }

    #[test]
    fn parse_is_total_on_any_string(text in any::<String>()) {
        let _ = parse(&text);
    }

    #[test]
    fn restricted_roles_never_mutate(text in effect_text(), acting in role(), start in stats()) {
        let card = Card::new(Category::Academics, Rarity::R, "prop", text.clone());
        let ast = parse(&text);
        let mut stats = start;

        let applied = EffectApplicator::new().apply(&card, acting, &mut stats);

        if !ast.allows(acting) || text.is_empty() {
            prop_assert!(!applied);
            prop_assert_eq!(stats, start);
        } else {
            prop_assert!(applied);
        }
        prop_assert!(stats.is_valid());
    }

    #[test]
    fn draw_never_exceeds_request_or_pile(pile_len in 0usize..10, count in 0usize..15) {
        let mut pile: Vec<Card> = (0..pile_len)
            .map(|i| Card::new(Category::Outreach, Rarity::N, format!("c{i}"), "体験+1"))
            .collect();

        let drawn = draw_cards(&mut pile, count, &[], &CardCatalog::new());

        prop_assert_eq!(drawn.len(), count.min(pile_len));
        prop_assert_eq!(pile.len() + drawn.len(), pile_len);
    }
}
