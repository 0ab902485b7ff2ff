//! Reference players: scripted replay and uniform random.
//!
//! Strategy logic is out of scope for the engine; these exist so the
//! match runner and the tests have something to seat. A real agent
//! implements [`KuhnPlayer`](super::KuhnPlayer) outside this crate.

use std::collections::VecDeque;

use crate::core::{Action, ActionClass, AvailableActions, GameRng};
use crate::engine::PlayerView;

use super::KuhnPlayer;

/// Replays a fixed sequence of actions.
pub struct ScriptedPlayer {
    script: VecDeque<Action>,
}

impl ScriptedPlayer {
    /// Create a player that will play `actions` in order.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: actions.into_iter().collect(),
        }
    }
}

impl KuhnPlayer for ScriptedPlayer {
    fn observe(&mut self, _view: &PlayerView) {}

    fn act(&mut self) -> Action {
        self.script.pop_front().expect("scripted player ran out of actions")
    }
}

/// Picks uniformly from its available actions. Sits only in a real
/// player's seat; it cannot construct a deal.
pub struct RandomPlayer {
    rng: GameRng,
    available: AvailableActions,
}

impl RandomPlayer {
    /// Create a random player from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            available: AvailableActions::new(),
        }
    }
}

impl KuhnPlayer for RandomPlayer {
    fn observe(&mut self, view: &PlayerView) {
        self.available = view.person.available().clone();
    }

    fn act(&mut self) -> Action {
        let class = self
            .rng
            .choose(&self.available)
            .copied()
            .expect("acting with an empty available set");
        match class {
            ActionClass::Check => Action::Check,
            ActionClass::Bet => Action::Bet,
            ActionClass::Deal => panic!("random player seated as chance"),
        }
    }
}
