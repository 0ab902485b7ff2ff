//! Engine configuration.
//!
//! Builder-style options resolved once at engine construction. The player
//! count is not configurable: Kuhn poker is two real players plus the
//! chance seat, and attempts to set it are ignored with a warning.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, NUM_PLAYERS};

/// Options for a Kuhn poker engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Keep full table snapshots across the hand (one per transition).
    pub record_history: bool,

    /// Which player acts first after the deal. `None` means the engine
    /// samples uniformly at each `init`.
    pub start_turn: Option<PlayerId>,

    /// Seed for the engine RNG (start-turn sampling, dealer forks).
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            record_history: false,
            start_turn: None,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep full table snapshots across the hand.
    #[must_use]
    pub fn record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Fix which player acts first after the deal.
    #[must_use]
    pub fn start_turn(mut self, player: PlayerId) -> Self {
        self.start_turn = Some(player);
        self
    }

    /// Seed the engine RNG.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Kuhn poker is fixed at two real players plus one chance seat.
    /// The requested count is ignored; this setter exists so callers
    /// porting from generic engines get a warning instead of silence.
    #[must_use]
    pub fn num_players(self, requested: usize) -> Self {
        if requested != NUM_PLAYERS {
            log::warn!(
                "Kuhn poker always has {} players plus a chance seat; ignoring num_players = {}",
                NUM_PLAYERS,
                requested
            );
        }
        self
    }
}
