//! The chance dealer.

use crate::core::{Action, GameRng, Rank};
use crate::engine::PlayerView;

use super::KuhnPlayer;

/// The synthetic third seat. Owns the deck shuffle: it draws two of the
/// three cards without replacement and emits the deal. The engine only
/// validates the deal, it never produces one.
pub struct ChanceDealer {
    rng: GameRng,
}

impl ChanceDealer {
    /// Create a dealer around an existing RNG, typically a fork of the
    /// engine RNG so a seeded match replays identically.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a dealer from a raw seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl KuhnPlayer for ChanceDealer {
    fn observe(&mut self, _view: &PlayerView) {}

    fn act(&mut self) -> Action {
        let mut deck = Rank::DECK;
        self.rng.shuffle(&mut deck);
        Action::Deal {
            ranks: [deck[0], deck[1]],
        }
    }
}
