//! The card value type.
//!
//! A `Card` carries its immutable catalog fields plus one provenance
//! field, `acquired_turn`, which is written once when the card first
//! enters the player's deck. Cards are plain values: moving one between
//! deck, hand, and slot never aliases another instance.

use serde::{Deserialize, Serialize};

/// Rarity tier. Each tier has its own training pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    N,
    R,
    SR,
    SSR,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 4] = [Rarity::N, Rarity::R, Rarity::SR, Rarity::SSR];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Rarity::N => 0,
            Rarity::R => 1,
            Rarity::SR => 2,
            Rarity::SSR => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::N => "N",
            Rarity::R => "R",
            Rarity::SR => "SR",
            Rarity::SSR => "SSR",
        }
    }

    /// Parse a tier label (`"N"`, `"R"`, `"SR"`, `"SSR"`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Rarity> {
        Rarity::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card's action type, compared against the turn's recommended category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 動員: outreach and recruiting.
    Outreach,
    /// 応対: front-desk reception.
    Reception,
    /// 庶務: general administration.
    Administration,
    /// 教務: teaching affairs.
    Academics,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Outreach,
        Category::Reception,
        Category::Administration,
        Category::Academics,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Outreach => "動員",
            Category::Reception => "応対",
            Category::Administration => "庶務",
            Category::Academics => "教務",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single card.
///
/// ## Example
///
/// ```
/// use juku_deck::cards::{Card, Category, Rarity};
///
/// let mut card = Card::new(Category::Outreach, Rarity::N, "ビラ配り", "体験+1")
///     .with_top_effect("体験を増やす");
///
/// assert!(card.mark_acquired(2));
/// assert!(!card.mark_acquired(5));
/// assert_eq!(card.acquired_turn, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub category: Category,
    pub rarity: Rarity,
    pub name: String,
    /// Short display text.
    pub top_effect: String,
    /// Raw effect DSL text.
    pub effect: String,
    /// Turn the card first entered the deck. First write wins.
    pub acquired_turn: Option<u8>,
}

impl Card {
    #[must_use]
    pub fn new(
        category: Category,
        rarity: Rarity,
        name: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            category,
            rarity,
            name: name.into(),
            top_effect: String::new(),
            effect: effect.into(),
            acquired_turn: None,
        }
    }

    /// Set the display text (builder pattern).
    #[must_use]
    pub fn with_top_effect(mut self, top_effect: impl Into<String>) -> Self {
        self.top_effect = top_effect.into();
        self
    }

    /// Record the acquisition turn if it is not set yet.
    ///
    /// Returns true if this call wrote the value.
    pub fn mark_acquired(&mut self, turn: u8) -> bool {
        if self.acquired_turn.is_some() {
            return false;
        }
        self.acquired_turn = Some(turn);
        true
    }

    /// Whether the card has any effect text to resolve.
    #[must_use]
    pub fn has_effect(&self) -> bool {
        !self.effect.is_empty()
    }
}
