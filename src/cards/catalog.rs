//! Card catalog for lookup by name and rarity.
//!
//! The `CardCatalog` holds every card the game knows about, in load
//! order. Load order matters: the training pools are filled from it
//! rarity by rarity, and name lookup returns the first card with a
//! given name.

use rustc_hash::FxHashMap;

use super::card::{Card, Rarity};

/// Catalog of all cards, fully loaded by the caller.
///
/// ## Example
///
/// ```
/// use juku_deck::cards::{Card, CardCatalog, Category, Rarity};
///
/// let catalog = CardCatalog::from_cards([
///     Card::new(Category::Outreach, Rarity::N, "ビラ配り", "体験+1"),
///     Card::new(Category::Reception, Rarity::R, "電話対応", "満足+2"),
/// ]);
///
/// assert_eq!(catalog.find_by_name("電話対応").unwrap().rarity, Rarity::R);
/// assert_eq!(catalog.starter_cards().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from cards in load order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card);
        }
        catalog
    }

    /// Add a card. Duplicate names are kept; lookup returns the first.
    pub fn register(&mut self, card: Card) {
        let index = self.cards.len();
        self.by_name.entry(card.name.clone()).or_insert(index);
        self.cards.push(card);
    }

    /// Find the first card with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).map(|&i| &self.cards[i])
    }

    /// Cards of one rarity, in load order.
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.rarity == rarity)
    }

    /// The starting deck: two independent copies of every N card.
    #[must_use]
    pub fn starter_cards(&self) -> Vec<Card> {
        self.by_rarity(Rarity::N)
            .flat_map(|card| [card.clone(), card.clone()])
            .collect()
    }

    /// Iterate over all cards in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
