//! Drawing from an ordered pile.
//!
//! One routine serves both the training pools and the player's deck:
//!
//! 1. Forced names, in order: take the first matching card out of the
//!    pile, or insert a fresh catalog copy if the pile has none.
//!    Names unknown to the catalog are skipped.
//! 2. Fill the rest by popping from the top (end) of the pile.
//!
//! Running out of cards is not an error; the result is just shorter.

use tracing::{debug, info};

use crate::cards::{Card, CardCatalog};

/// Draw up to `count` cards from `pile`.
///
/// `forced` is an explicit override list of card names; pass an empty
/// slice for a normal draw.
///
/// ```
/// use juku_deck::cards::{Card, CardCatalog, Category, Rarity};
/// use juku_deck::deck::draw_cards;
///
/// let mut pile = vec![
///     Card::new(Category::Outreach, Rarity::N, "a", ""),
///     Card::new(Category::Outreach, Rarity::N, "b", ""),
/// ];
/// let drawn = draw_cards(&mut pile, 5, &[], &CardCatalog::new());
///
/// assert_eq!(drawn.len(), 2);
/// assert_eq!(drawn[0].name, "b");
/// assert!(pile.is_empty());
/// ```
pub fn draw_cards(
    pile: &mut Vec<Card>,
    count: usize,
    forced: &[String],
    catalog: &CardCatalog,
) -> Vec<Card> {
    let mut drawn = Vec::with_capacity(count);

    for name in forced {
        if drawn.len() >= count {
            break;
        }
        if let Some(pos) = pile.iter().position(|c| &c.name == name) {
            debug!(card = %name, "forced draw from pile");
            drawn.push(pile.remove(pos));
        } else if let Some(card) = catalog.find_by_name(name) {
            debug!(card = %name, "forced draw inserted from catalog");
            drawn.push(card.clone());
        }
    }

    while drawn.len() < count {
        match pile.pop() {
            Some(card) => drawn.push(card),
            None => {
                info!(requested = count, drawn = drawn.len(), "pile exhausted");
                break;
            }
        }
    }

    drawn
}
