//! Player state: stats plus the three card containers.
//!
//! - `deck`: ordered, used as a stack (top = end of vec)
//! - `hand`: unordered
//! - `placed`: one optional card per role
//!
//! Cards move between containers by value, so no two containers ever
//! share an instance.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::rng::GameRng;
use super::role::{Role, RoleMap};
use super::stats::Stats;
use crate::cards::{Card, CardCatalog};
use crate::deck::draw_cards;

/// Everything the player owns during a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayerState {
    pub stats: Stats,
    /// Top of the deck is the end of the vec.
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub placed: RoleMap<Option<Card>>,
}

impl GamePlayerState {
    /// Fresh state: opening stats and empty containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Deck ===

    /// Put a card on top of the deck, stamping its acquisition turn if unset.
    pub fn add_to_deck(&mut self, mut card: Card, turn: u8) {
        card.mark_acquired(turn);
        info!(card = %card.name, rarity = %card.rarity, "added to deck");
        self.deck.push(card);
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
        info!(size = self.deck.len(), "deck shuffled");
    }

    /// Remove a card from the game by deck index.
    pub fn remove_from_deck(&mut self, index: usize) -> Option<Card> {
        if index >= self.deck.len() {
            return None;
        }
        let card = self.deck.remove(index);
        info!(card = %card.name, "removed from deck");
        Some(card)
    }

    /// Deck indices ordered by acquisition turn (oldest first, stable).
    ///
    /// Cards without an acquisition turn sort as turn 0.
    #[must_use]
    pub fn deck_by_acquisition(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.deck.len()).collect();
        order.sort_by_key(|&i| self.deck[i].acquired_turn.unwrap_or(0));
        order
    }

    // === Hand ===

    /// Draw up to `count` cards from the deck into the hand.
    ///
    /// Returns how many cards were drawn; an empty deck ends the draw early.
    pub fn draw_hand(&mut self, count: usize, forced: &[String], catalog: &CardCatalog) -> usize {
        let drawn = draw_cards(&mut self.deck, count, forced, catalog);
        let n = drawn.len();
        self.hand.extend(drawn);
        if n > 0 {
            info!(count = n, "drew into hand");
        }
        n
    }

    /// Take a card out of the hand by index.
    pub fn remove_from_hand(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    // === Placement ===

    /// Put a card into a role slot, returning whatever was there.
    pub fn place(&mut self, role: Role, card: Card) -> Option<Card> {
        info!(role = %role, card = %card.name, "card placed");
        self.placed[role].replace(card)
    }

    /// Empty one role slot.
    pub fn take_placed(&mut self, role: Role) -> Option<Card> {
        self.placed[role].take()
    }

    /// Empty every role slot, returning the cards in resolution order.
    pub fn clear_placed(&mut self) -> Vec<Card> {
        self.placed
            .iter_mut()
            .filter_map(|(_, slot)| slot.take())
            .collect()
    }

    /// Move every placed card, then every hand card, onto the deck.
    pub fn return_all_to_deck(&mut self) {
        let placed = self.clear_placed();
        self.deck.extend(placed);
        self.deck.append(&mut self.hand);
        info!(size = self.deck.len(), "returned all cards to deck");
    }

    /// Total cards the player owns across all containers.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.placed.iter().filter(|(_, slot)| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Category, Rarity};

    fn card(name: &str) -> Card {
        Card::new(Category::Outreach, Rarity::N, name, "体験+1")
    }

    #[test]
    fn test_add_to_deck_first_write_wins() {
        let mut state = GamePlayerState::new();

        let mut seasoned = card("old");
        seasoned.mark_acquired(1);
        state.add_to_deck(seasoned, 4);
        state.add_to_deck(card("new"), 4);

        assert_eq!(state.deck[0].acquired_turn, Some(1));
        assert_eq!(state.deck[1].acquired_turn, Some(4));
    }

    #[test]
    fn test_draw_from_top() {
        let mut state = GamePlayerState::new();
        state.deck = vec![card("a"), card("b"), card("c")];

        let drawn = state.draw_hand(2, &[], &CardCatalog::new());

        assert_eq!(drawn, 2);
        let names: Vec<_> = state.hand.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b"]);
        assert_eq!(state.deck.len(), 1);
    }

    #[test]
    fn test_place_and_clear() {
        let mut state = GamePlayerState::new();

        assert!(state.place(Role::Teacher, card("t")).is_none());
        assert!(state.place(Role::Leader, card("l")).is_none());

        let cleared = state.clear_placed();
        let names: Vec<_> = cleared.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["l", "t"]);
        assert!(state.placed.iter().all(|(_, slot)| slot.is_none()));
    }

    #[test]
    fn test_return_all_to_deck() {
        let mut state = GamePlayerState::new();
        state.deck = vec![card("d")];
        state.hand = vec![card("h1"), card("h2")];
        state.place(Role::Staff, card("s"));

        state.return_all_to_deck();

        let names: Vec<_> = state.deck.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["d", "s", "h1", "h2"]);
        assert!(state.hand.is_empty());
        assert_eq!(state.card_count(), 4);
    }

    #[test]
    fn test_deck_by_acquisition() {
        let mut state = GamePlayerState::new();
        state.add_to_deck(card("late"), 3);
        state.deck.push(card("starter"));
        state.add_to_deck(card("early"), 1);

        let order: Vec<_> = state
            .deck_by_acquisition()
            .into_iter()
            .map(|i| state.deck[i].name.as_str())
            .collect();
        assert_eq!(order, vec!["starter", "early", "late"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut state = GamePlayerState::new();
        assert!(state.remove_from_deck(0).is_none());
        assert!(state.remove_from_hand(3).is_none());
    }
}
