//! Session snapshots.
//!
//! A snapshot captures everything needed to resume mid-phase without
//! re-drawing: the player containers, turn and phase, the unresolved
//! training offer, the remaining training pools, and the RNG position.
//! The card catalog and session config are supplied again on restore.

use serde::{Deserialize, Serialize};

use super::machine::Session;
use super::phase::Phase;
use crate::cards::{Card, CardCatalog};
use crate::core::{
    GamePlayerState, GameRng, GameRngState, RoleMap, SessionConfig, SessionError, SnapshotError,
    Stats, TURN_COUNT,
};
use crate::deck::TrainingPools;
use crate::effects::EffectApplicator;

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub stats: Stats,
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub placed: RoleMap<Option<Card>>,
    pub turn: u8,
    pub phase: Phase,
    pub pending_training_offer: Option<Vec<Card>>,
    pub pools: TrainingPools,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn validate(&self) -> Result<(), SessionError> {
        let in_table = self.turn < TURN_COUNT;
        let ended = self.turn == TURN_COUNT && self.phase == Phase::End;
        if !(in_table || ended) {
            return Err(SessionError::TurnOutOfRange(self.turn));
        }
        if !self.stats.is_valid() {
            return Err(SessionError::InvalidStats(self.stats));
        }
        if self.pending_training_offer.is_some() && self.phase != Phase::Training {
            return Err(SessionError::UnexpectedOffer(self.phase));
        }
        Ok(())
    }
}

impl Session {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            stats: self.player.stats,
            deck: self.player.deck.clone(),
            hand: self.player.hand.clone(),
            placed: self.player.placed.clone(),
            turn: self.turn,
            phase: self.phase,
            pending_training_offer: self.pending_offer.clone(),
            pools: self.pools.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot. Nothing is drawn or shuffled.
    pub fn restore(
        catalog: CardCatalog,
        config: SessionConfig,
        snapshot: SessionSnapshot,
    ) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        Ok(Self {
            config,
            catalog,
            pools: snapshot.pools,
            player: GamePlayerState {
                stats: snapshot.stats,
                deck: snapshot.deck,
                hand: snapshot.hand,
                placed: snapshot.placed,
            },
            turn: snapshot.turn,
            phase: snapshot.phase,
            pending_offer: snapshot.pending_training_offer,
            rng: GameRng::from_state(&snapshot.rng),
            applicator: EffectApplicator::new(),
        })
    }
}
