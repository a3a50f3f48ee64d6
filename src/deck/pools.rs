//! Training pools: one ordered pile per rarity.
//!
//! Pools are filled from the catalog in load order and drawn from the
//! top (end). Cards drawn into a training offer leave the pool for good,
//! whether or not the player picks them.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::draw::draw_cards;
use crate::cards::{Card, CardCatalog, Rarity};
use crate::core::GameRng;

/// Four independent piles keyed by rarity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPools {
    pools: [Vec<Card>; 4],
}

impl TrainingPools {
    /// Fill every pool from the catalog, in load order.
    #[must_use]
    pub fn from_catalog(catalog: &CardCatalog) -> Self {
        let mut pools = Self::default();
        for card in catalog.iter() {
            pools.pools[card.rarity.index()].push(card.clone());
        }
        pools
    }

    /// Cards remaining in one pool (top = last).
    #[must_use]
    pub fn pool(&self, rarity: Rarity) -> &[Card] {
        &self.pools[rarity.index()]
    }

    /// Cards remaining in one pool.
    #[must_use]
    pub fn remaining(&self, rarity: Rarity) -> usize {
        self.pools[rarity.index()].len()
    }

    /// Uniformly shuffle one pool in place.
    pub fn shuffle(&mut self, rarity: Rarity, rng: &mut GameRng) {
        rng.shuffle(&mut self.pools[rarity.index()]);
        info!(rarity = %rarity, size = self.remaining(rarity), "training pool shuffled");
    }

    /// Draw up to `count` cards from one pool, honoring forced names.
    pub fn draw(
        &mut self,
        rarity: Rarity,
        count: usize,
        forced: &[String],
        catalog: &CardCatalog,
    ) -> Vec<Card> {
        draw_cards(&mut self.pools[rarity.index()], count, forced, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    fn catalog() -> CardCatalog {
        CardCatalog::from_cards([
            Card::new(Category::Outreach, Rarity::N, "n1", "体験+1"),
            Card::new(Category::Outreach, Rarity::R, "r1", "体験+2"),
            Card::new(Category::Reception, Rarity::R, "r2", "満足+2"),
            Card::new(Category::Reception, Rarity::R, "r3", "満足+1"),
            Card::new(Category::Academics, Rarity::SSR, "ssr1", "入塾+3"),
        ])
    }

    #[test]
    fn test_from_catalog() {
        let pools = TrainingPools::from_catalog(&catalog());

        assert_eq!(pools.remaining(Rarity::N), 1);
        assert_eq!(pools.remaining(Rarity::R), 3);
        assert_eq!(pools.remaining(Rarity::SR), 0);
        assert_eq!(pools.remaining(Rarity::SSR), 1);
        assert_eq!(pools.pool(Rarity::R)[0].name, "r1");
    }

    #[test]
    fn test_draw_is_per_pool() {
        let catalog = catalog();
        let mut pools = TrainingPools::from_catalog(&catalog);

        let drawn = pools.draw(Rarity::R, 2, &[], &catalog);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].name, "r3");
        assert_eq!(pools.remaining(Rarity::R), 1);
        assert_eq!(pools.remaining(Rarity::N), 1);

        assert!(pools.draw(Rarity::SR, 3, &[], &catalog).is_empty());
    }

    #[test]
    fn test_shuffle_keeps_contents() {
        let catalog = catalog();
        let mut pools = TrainingPools::from_catalog(&catalog);
        let mut rng = GameRng::new(7);

        pools.shuffle(Rarity::R, &mut rng);

        let mut names: Vec<_> = pools.pool(Rarity::R).iter().map(|c| c.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_forced_from_other_rarity() {
        let catalog = catalog();
        let mut pools = TrainingPools::from_catalog(&catalog);

        let drawn = pools.draw(Rarity::R, 1, &["ssr1".to_string()], &catalog);

        assert_eq!(drawn[0].name, "ssr1");
        assert_eq!(pools.remaining(Rarity::R), 3);
        assert_eq!(pools.remaining(Rarity::SSR), 1);
    }
}
