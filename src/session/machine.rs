//! The phase machine for one player's game.
//!
//! A `Session` owns every piece of mutable game state: the player, the
//! training pools, the turn index and phase, the pending training offer,
//! the RNG, and the parse cache. All mutation goes through the methods
//! below, and each public action either completes or returns a
//! `SessionError` with the session unchanged.
//!
//! ## Turn flow
//!
//! | from | to | trigger | side effects |
//! |---|---|---|---|
//! | start | training | `start_game` | draw the opening offer |
//! | training | action | `confirm_training_choice` | picks join the deck, shuffle, draw hand |
//! | action | meeting | `confirm_actions` | placed cards resolve, everything returns to the deck |
//! | meeting | training | `confirm_meeting` | deletions, next turn's offer |
//! | meeting | end | `confirm_meeting` on the last turn | none |
//!
//! A turn whose delete quota is zero passes through the meeting without
//! stopping.

use tracing::{error, info, warn};

use super::phase::Phase;
use crate::cards::{Card, CardCatalog, Rarity};
use crate::core::{
    GamePlayerState, GameRng, Role, SessionConfig, SessionError, StatSnapshot, Stats,
    TurnConfig, TURN_COUNT,
};
use crate::deck::TrainingPools;
use crate::effects::{
    preview_placement, ApplyRejection, EffectApplicator, EffectReport, PlacementPreview,
};

/// What happened when one placed card resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleResolution {
    pub role: Role,
    pub card_name: String,
    /// Stats before the recommended bonus and the card effect.
    pub before: StatSnapshot,
    /// Stats after both.
    pub after: StatSnapshot,
    /// Whether the card matched the turn's recommended category.
    pub recommended: bool,
    pub outcome: Result<EffectReport, ApplyRejection>,
}

impl RoleResolution {
    /// Whether the card's own effect resolved.
    #[must_use]
    pub fn applied(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// One player's game session.
#[derive(Clone, Debug)]
pub struct Session {
    pub(super) config: SessionConfig,
    pub(super) catalog: CardCatalog,
    pub(super) pools: TrainingPools,
    pub(super) player: GamePlayerState,
    pub(super) turn: u8,
    pub(super) phase: Phase,
    pub(super) pending_offer: Option<Vec<Card>>,
    pub(super) rng: GameRng,
    pub(super) applicator: EffectApplicator,
}

impl Session {
    /// Create a session and initialize it for a new game.
    #[must_use]
    pub fn new(catalog: CardCatalog, config: SessionConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let mut session = Self {
            config,
            catalog,
            pools: TrainingPools::default(),
            player: GamePlayerState::new(),
            turn: 0,
            phase: Phase::Start,
            pending_offer: None,
            rng,
            applicator: EffectApplicator::new(),
        };
        session.initialize_session();
        session
    }

    /// Reset to a fresh game.
    ///
    /// Rebuilds the training pools, resets the player, deals the starter
    /// cards into the deck, and shuffles the R, SR, and SSR pools. The RNG
    /// stream continues, so a restart does not replay the previous game.
    pub fn initialize_session(&mut self) -> &GamePlayerState {
        self.pools = TrainingPools::from_catalog(&self.catalog);
        self.player = GamePlayerState::new();
        self.player.deck = self.catalog.starter_cards();
        self.turn = 0;
        self.phase = Phase::Start;
        self.pending_offer = None;

        for rarity in [Rarity::R, Rarity::SR, Rarity::SSR] {
            self.pools.shuffle(rarity, &mut self.rng);
        }

        info!(deck = self.player.deck.len(), "session initialized");
        &self.player
    }

    /// Leave `start` and draw the opening offer.
    pub fn start_game(&mut self) -> Result<&[Card], SessionError> {
        self.expect_phase(Phase::Start)?;
        self.advance_phase()?;
        Ok(self.pending_offer.as_deref().unwrap_or_default())
    }

    /// Move to the next phase, running its entry actions.
    ///
    /// Normally driven by the `confirm_*` methods; calling it directly
    /// skips their validation but not the phase's entry actions.
    pub fn advance_phase(&mut self) -> Result<Phase, SessionError> {
        let from = self.phase;

        match from {
            Phase::Start => self.enter_training()?,

            Phase::Training => {
                if self.pending_offer.is_some() {
                    return Err(rejected(SessionError::OfferPending));
                }
                self.enter_action();
            }

            Phase::Action => {
                let skip_meeting = self.turn_config()?.delete_quota == 0;
                self.enter_meeting();
                if skip_meeting {
                    info!(turn = self.turn, "no deletions this turn, meeting skipped");
                    self.log_transition(from);
                    return self.advance_phase();
                }
            }

            Phase::Meeting => {
                self.player.return_all_to_deck();
                if self.turn + 1 >= TURN_COUNT {
                    self.turn = TURN_COUNT;
                    self.phase = Phase::End;
                } else {
                    self.turn += 1;
                    self.enter_training()?;
                }
            }

            Phase::End => {
                error!(turn = self.turn, "cannot advance past the end of the game");
                return Err(SessionError::GameOver);
            }
        }

        self.log_transition(from);
        Ok(self.phase)
    }

    /// Take the listed cards from the pending offer and move to `action`.
    ///
    /// Exactly `min(picks, offer size)` distinct indices are required.
    pub fn confirm_training_choice(&mut self, indices: &[usize]) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Training)?;
        let offered = self
            .pending_offer
            .as_ref()
            .map(Vec::len)
            .ok_or_else(|| rejected(SessionError::NoPendingOffer))?;

        let (_, picks) = self.config.training_arity(self.turn);
        let expected = picks.min(offered);
        if indices.len() != expected {
            return Err(rejected(SessionError::SelectionCount {
                expected,
                got: indices.len(),
            }));
        }
        validate_selection(indices, offered)?;

        let offer = self.pending_offer.take().unwrap_or_default();
        for &index in indices {
            self.player.add_to_deck(offer[index].clone(), self.turn);
        }

        self.advance_phase()
    }

    /// Move a hand card into an empty role slot.
    ///
    /// Placement is allowed even when the card's restriction excludes the
    /// role; the returned preview says how it would resolve right now.
    pub fn place_card(
        &mut self,
        hand_index: usize,
        role: Role,
    ) -> Result<PlacementPreview, SessionError> {
        self.expect_phase(Phase::Action)?;
        if self.player.placed[role].is_some() {
            return Err(rejected(SessionError::SlotOccupied(role)));
        }

        let len = self.player.hand.len();
        let card = self
            .player
            .remove_from_hand(hand_index)
            .ok_or_else(|| rejected(SessionError::HandIndex { index: hand_index, len }))?;

        let preview = preview_placement(&card, role, &self.player.stats);
        if !preview.allowed {
            warn!(card = %card.name, role = %role, "placed card is restricted from this role");
        }
        self.player.place(role, card);
        Ok(preview)
    }

    /// Return one slot's card to the hand. Returns false if it was empty.
    pub fn unplace(&mut self, role: Role) -> Result<bool, SessionError> {
        self.expect_phase(Phase::Action)?;
        Ok(match self.player.take_placed(role) {
            Some(card) => {
                self.player.hand.push(card);
                true
            }
            None => false,
        })
    }

    /// Return every placed card to the hand.
    pub fn clear_placed(&mut self) -> Result<usize, SessionError> {
        self.expect_phase(Phase::Action)?;
        let cards = self.player.clear_placed();
        let count = cards.len();
        self.player.hand.extend(cards);
        Ok(count)
    }

    /// Resolve every placed card in role order.
    ///
    /// For each occupied slot: the recommended-stat bonus (+1) applies
    /// first if the card matches the turn's category, then the card's own
    /// effect. A restricted card still gets the bonus.
    pub fn resolve_placed_actions(&mut self) -> Result<Vec<RoleResolution>, SessionError> {
        self.expect_phase(Phase::Action)?;
        let turn_config = self.turn_config()?;

        let mut resolutions = Vec::new();
        for role in Role::ALL {
            let Some(card) = self.player.placed[role].as_ref() else {
                continue;
            };

            let before = self.player.stats;
            let recommended = turn_config.is_recommended(card);
            if let (true, Some(stat)) = (recommended, turn_config.recommended_stat) {
                self.player.stats.change(stat, 1);
            }

            let outcome = self.applicator.try_apply(card, role, &mut self.player.stats);
            let after = self.player.stats;

            info!(
                role = %role,
                card = %card.name,
                recommended,
                applied = outcome.is_ok(),
                "card resolved"
            );
            resolutions.push(RoleResolution {
                role,
                card_name: card.name.clone(),
                before,
                after,
                recommended,
                outcome,
            });
        }

        Ok(resolutions)
    }

    /// Resolve placed cards, then leave the action phase.
    pub fn confirm_actions(&mut self) -> Result<Vec<RoleResolution>, SessionError> {
        let resolutions = self.resolve_placed_actions()?;
        self.advance_phase()?;
        Ok(resolutions)
    }

    /// Delete the listed deck cards (at most the turn's quota) and move on.
    pub fn confirm_meeting(&mut self, deck_indices: &[usize]) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Meeting)?;
        let quota = self.turn_config()?.delete_quota;
        if deck_indices.len() > usize::from(quota) {
            return Err(rejected(SessionError::DeleteQuotaExceeded {
                quota,
                got: deck_indices.len(),
            }));
        }
        validate_selection(deck_indices, self.player.deck.len())?;

        let mut doomed = deck_indices.to_vec();
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        for index in doomed {
            self.player.remove_from_deck(index);
        }

        self.advance_phase()
    }

    /// Draw from a training pool, honoring the configured forced names.
    pub fn draw_training(&mut self, rarity: Rarity, count: usize) -> Vec<Card> {
        self.pools
            .draw(rarity, count, &self.config.forced.training, &self.catalog)
    }

    /// Draw from the deck into the hand, honoring the configured forced
    /// names. Returns how many cards were drawn.
    pub fn draw_hand(&mut self, count: usize) -> usize {
        self.player
            .draw_hand(count, &self.config.forced.hand, &self.catalog)
    }

    /// Preview placing a hand card into a slot without placing it.
    #[must_use]
    pub fn preview_hand_card(&self, hand_index: usize, role: Role) -> Option<PlacementPreview> {
        let card = self.player.hand.get(hand_index)?;
        Some(preview_placement(card, role, &self.player.stats))
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn player(&self) -> &GamePlayerState {
        &self.player
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.player.stats
    }

    #[must_use]
    pub fn pools(&self) -> &TrainingPools {
        &self.pools
    }

    /// Turn index. Equals `TURN_COUNT` once the game has ended.
    #[must_use]
    pub fn turn(&self) -> u8 {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Cards offered by the current training phase, if not yet confirmed.
    #[must_use]
    pub fn pending_offer(&self) -> Option<&[Card]> {
        self.pending_offer.as_deref()
    }

    /// Configuration for the current turn. `None` once the game has ended.
    #[must_use]
    pub fn current_turn_config(&self) -> Option<&'static TurnConfig> {
        TurnConfig::for_turn(self.turn)
    }

    /// Deck indices in the order the meeting lists them.
    #[must_use]
    pub fn deck_by_acquisition(&self) -> Vec<usize> {
        self.player.deck_by_acquisition()
    }

    // === Phase entry ===

    fn enter_training(&mut self) -> Result<(), SessionError> {
        let rarity = self.turn_config()?.training_rarity;
        let (offered, _) = self.config.training_arity(self.turn);

        let offer = self.draw_training(rarity, offered);
        info!(turn = self.turn, rarity = %rarity, offered = offer.len(), "training offer drawn");

        self.pending_offer = Some(offer);
        self.phase = Phase::Training;
        Ok(())
    }

    fn enter_action(&mut self) {
        self.phase = Phase::Action;
        self.player.shuffle_deck(&mut self.rng);
        let hand_size = self.config.hand_size;
        self.draw_hand(hand_size);
    }

    fn enter_meeting(&mut self) {
        self.phase = Phase::Meeting;
        self.player.return_all_to_deck();
    }

    // === Helpers ===

    fn turn_config(&self) -> Result<&'static TurnConfig, SessionError> {
        TurnConfig::for_turn(self.turn).ok_or_else(|| {
            error!(turn = self.turn, "turn index outside the turn table");
            SessionError::TurnOutOfRange(self.turn)
        })
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(rejected(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            }))
        }
    }

    fn log_transition(&self, from: Phase) {
        info!(from = %from, to = %self.phase, turn = self.turn, "phase advanced");
    }
}

/// Check that every index is in range and none repeats.
fn validate_selection(indices: &[usize], len: usize) -> Result<(), SessionError> {
    for (i, &index) in indices.iter().enumerate() {
        if index >= len {
            return Err(rejected(SessionError::SelectionIndex { index, len }));
        }
        if indices[..i].contains(&index) {
            return Err(rejected(SessionError::DuplicateSelection(index)));
        }
    }
    Ok(())
}

fn rejected(err: SessionError) -> SessionError {
    warn!(error = %err, "session action rejected");
    err
}
