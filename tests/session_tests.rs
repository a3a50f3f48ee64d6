//! Session flow tests.
//!
//! These tests drive a whole game through the public session API:
//! - Phase order across all eight turns
//! - Meeting skip on a zero-quota turn
//! - Forced draws and draw shortfalls
//! - Snapshot and restore without re-drawing

use juku_deck::cards::{Card, CardCatalog, Category, Rarity};
use juku_deck::core::{Role, SessionConfig, SessionError, Stat, Stats, TURN_COUNT, TURN_TABLE};
use juku_deck::session::{Phase, Session, SessionSnapshot};

fn catalog() -> CardCatalog {
    let mut cards = vec![
        Card::new(Category::Outreach, Rarity::N, "ビラ配り", "体験+1"),
        Card::new(Category::Reception, Rarity::N, "電話応対", "満足+1"),
        Card::new(Category::Administration, Rarity::N, "帳簿整理", "経理+1"),
        Card::new(Category::Academics, Rarity::N, "授業準備", "入塾+1"),
    ];
    for i in 0..12 {
        cards.push(Card::new(Category::Outreach, Rarity::R, format!("体験会{i}"), "体験+2"));
    }
    for i in 0..12 {
        cards.push(Card::new(
            Category::Reception,
            Rarity::SR,
            format!("面談{i}"),
            "満足+2、〈満足8以上〉入塾+1。",
        ));
    }
    for i in 0..6 {
        cards.push(Card::new(
            Category::Administration,
            Rarity::SSR,
            format!("決算{i}"),
            "【事務】経理を12にする",
        ));
    }
    CardCatalog::from_cards(cards)
}

fn new_session() -> Session {
    Session::new(catalog(), SessionConfig::default())
}

/// Play the current action phase: fill as many slots as the hand allows.
fn play_action(session: &mut Session) {
    for role in Role::ALL {
        if session.player().hand.is_empty() {
            break;
        }
        session.place_card(0, role).unwrap();
    }
    session.confirm_actions().unwrap();
}

/// Test a full game from the opening draft to the end.
#[test]
fn test_full_game() {
    let mut session = new_session();
    assert_eq!(session.player().deck.len(), 8);

    let mut offered_rarities = Vec::new();
    session.start_game().unwrap();

    while !session.is_over() {
        match session.phase() {
            Phase::Training => {
                let offer = session.pending_offer().unwrap();
                offered_rarities.push((session.turn(), offer[0].rarity, offer.len()));
                let picks: Vec<usize> = if session.turn() == 0 { vec![0, 1] } else { vec![0] };
                session.confirm_training_choice(&picks).unwrap();
            }
            Phase::Action => {
                assert_eq!(session.player().hand.len(), 4);
                play_action(&mut session);
            }
            Phase::Meeting => {
                session.confirm_meeting(&[]).unwrap();
            }
            phase => panic!("unexpected phase {phase}"),
        }
    }

    assert_eq!(offered_rarities.len(), TURN_COUNT as usize);
    for (turn, rarity, len) in offered_rarities {
        let config = &TURN_TABLE[turn as usize];
        assert_eq!(rarity, config.training_rarity, "turn {turn}");
        assert_eq!(len, if turn == 0 { 4 } else { 3 }, "turn {turn}");
    }

    // 8 starters, 2 opening picks, 7 later picks, nothing deleted.
    assert_eq!(session.player().deck.len(), 17);
    assert!(session.player().hand.is_empty());
    assert!(session.player().placed.iter().all(|(_, slot)| slot.is_none()));
    assert_eq!(session.turn(), TURN_COUNT);
    assert!(session.stats().is_valid());
    assert_eq!(session.advance_phase(), Err(SessionError::GameOver));
}

/// Test that the last turn's zero quota skips straight past the meeting.
#[test]
fn test_zero_quota_skips_meeting() {
    let mut session = new_session();
    session.start_game().unwrap();
    session.confirm_training_choice(&[0, 1]).unwrap();

    while session.turn() < TURN_COUNT - 1 {
        match session.phase() {
            Phase::Training => {
                session.confirm_training_choice(&[0]).unwrap();
            }
            Phase::Action => play_action(&mut session),
            Phase::Meeting => {
                session.confirm_meeting(&[]).unwrap();
            }
            phase => panic!("unexpected phase {phase}"),
        }
    }

    session.confirm_training_choice(&[0]).unwrap();
    assert_eq!(session.phase(), Phase::Action);
    assert_eq!(TURN_TABLE[session.turn() as usize].delete_quota, 0);

    let owned = session.player().card_count();
    session.place_card(0, Role::Leader).unwrap();
    session.place_card(0, Role::Teacher).unwrap();
    session.confirm_actions().unwrap();

    assert_eq!(session.phase(), Phase::End);
    assert_eq!(session.turn(), TURN_COUNT);
    assert_eq!(session.player().deck.len(), owned);
    assert!(session.player().hand.is_empty());
}

/// Test that a non-zero quota turn stops in the meeting.
#[test]
fn test_meeting_stops_and_deletes() {
    let mut session = new_session();
    session.start_game().unwrap();
    session.confirm_training_choice(&[0, 1]).unwrap();
    session.confirm_actions().unwrap();

    assert_eq!(session.phase(), Phase::Meeting);
    assert_eq!(session.turn(), 0);
    assert_eq!(session.player().deck.len(), 10);

    // Delete the last two cards in listing order.
    let order = session.deck_by_acquisition();
    assert_eq!(order.len(), 10);
    let picked: Vec<usize> = order[order.len() - 2..].to_vec();
    let before = session.player().deck.clone();

    assert_eq!(session.confirm_meeting(&picked), Ok(Phase::Training));
    assert_eq!(session.player().deck.len(), 8);

    let mut expected = before;
    let mut doomed = picked;
    doomed.sort_unstable_by(|a, b| b.cmp(a));
    for i in doomed {
        expected.remove(i);
    }
    assert_eq!(session.player().deck, expected);
}

/// Test placement validation during the action phase.
#[test]
fn test_wrong_phase_actions() {
    let mut session = new_session();

    assert_eq!(
        session.place_card(0, Role::Leader),
        Err(SessionError::WrongPhase {
            expected: Phase::Action,
            actual: Phase::Start,
        })
    );
    assert!(matches!(
        session.confirm_meeting(&[]),
        Err(SessionError::WrongPhase { .. })
    ));
    assert!(matches!(
        session.confirm_training_choice(&[0]),
        Err(SessionError::WrongPhase { .. })
    ));
}

/// Test the recommended bonus and restriction outcome per role.
#[test]
fn test_resolution_report() {
    let config = SessionConfig::default().with_forced_hand(["決算0", "ビラ配り"]);
    let mut session = Session::new(catalog(), config);
    session.start_game().unwrap();
    session.confirm_training_choice(&[0, 1]).unwrap();

    let hand: Vec<&str> = session.player().hand.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(&hand[..2], &["決算0", "ビラ配り"]);

    // 決算0 is staff-only; place it with the teacher so it is rejected.
    let preview = session.place_card(0, Role::Teacher).unwrap();
    assert!(!preview.allowed);
    session.place_card(0, Role::Leader).unwrap();

    let resolutions = session.confirm_actions().unwrap();
    assert_eq!(resolutions.len(), 2);

    let leader = &resolutions[0];
    assert_eq!(leader.role, Role::Leader);
    assert_eq!(leader.card_name, "ビラ配り");
    assert!(leader.recommended);
    assert!(leader.applied());
    assert_eq!(leader.after.get(Stat::Experience), 2);

    let teacher = &resolutions[1];
    assert_eq!(teacher.role, Role::Teacher);
    assert!(!teacher.recommended);
    assert!(!teacher.applied());
    assert_eq!(teacher.before, teacher.after);
    assert_eq!(teacher.after.get(Stat::Accounting), 3);
}

/// Test forced training names, both from the pool and from the catalog.
#[test]
fn test_forced_training_draws() {
    let config = SessionConfig::default().with_forced_training(["体験会5", "決算2"]);
    let mut session = Session::new(catalog(), config);

    let names: Vec<String> = session
        .start_game()
        .unwrap()
        .iter()
        .map(|c| c.name.clone())
        .collect();

    assert_eq!(&names[..2], &["体験会5".to_string(), "決算2".to_string()]);
    assert_eq!(names.len(), 4);

    // The R card left its pool; the SSR insert did not touch the SSR pool.
    assert_eq!(session.pools().remaining(Rarity::R), 12 - 3);
    assert_eq!(session.pools().remaining(Rarity::SSR), 6);
    assert!(session
        .pools()
        .pool(Rarity::R)
        .iter()
        .all(|c| c.name != "体験会5"));
}

/// Test drawing past the end of a pool.
#[test]
fn test_draw_shortfall() {
    let mut session = new_session();

    assert_eq!(session.draw_training(Rarity::SSR, 10).len(), 6);
    assert!(session.draw_training(Rarity::SSR, 1).is_empty());

    let drawn = session.draw_hand(20);
    assert_eq!(drawn, 8);
    assert!(session.player().deck.is_empty());
}

/// Test resuming a pending offer without re-drawing.
#[test]
fn test_snapshot_restore_keeps_offer() {
    let mut session = new_session();
    session.start_game().unwrap();

    let bytes = session.snapshot().to_bytes().unwrap();
    let snapshot = SessionSnapshot::from_bytes(&bytes).unwrap();
    let mut restored = Session::restore(catalog(), SessionConfig::default(), snapshot).unwrap();

    assert_eq!(restored.phase(), Phase::Training);
    assert_eq!(restored.pending_offer(), session.pending_offer());
    assert_eq!(restored.pools().remaining(Rarity::R), 8);

    session.confirm_training_choice(&[2, 3]).unwrap();
    restored.confirm_training_choice(&[2, 3]).unwrap();
    assert_eq!(restored.player(), session.player());
    assert_eq!(restored.snapshot(), session.snapshot());
}

/// Test resuming in the middle of the action phase with cards placed.
#[test]
fn test_snapshot_restore_mid_action() {
    let mut session = new_session();
    session.start_game().unwrap();
    session.confirm_training_choice(&[0, 1]).unwrap();
    session.place_card(1, Role::Staff).unwrap();

    let snapshot = session.snapshot();
    let mut restored = Session::restore(catalog(), SessionConfig::default(), snapshot).unwrap();

    assert_eq!(restored.player().hand.len(), 3);
    assert!(restored.player().placed[Role::Staff].is_some());

    let a = session.confirm_actions().unwrap();
    let b = restored.confirm_actions().unwrap();
    assert_eq!(a, b);
    assert_eq!(restored.stats(), session.stats());
}

/// Test that the same seed produces the same game.
#[test]
fn test_seeded_determinism() {
    let mut a = Session::new(catalog(), SessionConfig::default().with_seed(7));
    let mut b = Session::new(catalog(), SessionConfig::default().with_seed(7));

    assert_eq!(a.start_game().unwrap(), b.start_game().unwrap());
    a.confirm_training_choice(&[0, 3]).unwrap();
    b.confirm_training_choice(&[0, 3]).unwrap();
    assert_eq!(a.player().hand, b.player().hand);
}

/// Test restarting mid-game.
#[test]
fn test_restart() {
    let mut session = new_session();
    session.start_game().unwrap();
    session.confirm_training_choice(&[0, 1]).unwrap();
    play_action(&mut session);

    session.initialize_session();

    assert_eq!(session.phase(), Phase::Start);
    assert_eq!(session.turn(), 0);
    assert_eq!(session.player().deck.len(), 8);
    assert!(session.player().deck.iter().all(|c| c.acquired_turn.is_none()));
    assert_eq!(session.pools().remaining(Rarity::R), 12);
    assert_eq!(*session.stats(), Stats::default());
}
