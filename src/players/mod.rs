//! The collaborator seam: participants that supply actions.
//!
//! The engine never generates actions, the deal included. Participants
//! implement [`KuhnPlayer`]: they receive their view after every
//! transition and produce an action when asked. This module ships the
//! chance dealer (the synthetic third seat) and two reference players
//! for tests and baselines; real agents live outside the engine.

mod chance;
mod reference;

pub use chance::ChanceDealer;
pub use reference::{RandomPlayer, ScriptedPlayer};

use crate::core::Action;
use crate::engine::PlayerView;

/// A participant in a hand: one of the two real players, or the chance
/// dealer.
///
/// The driver calls `observe` with the participant's own view after
/// `init` and after every `forward`, then calls `act` only when the view
/// shows the participant holds the turn.
pub trait KuhnPlayer {
    /// Receive this seat's view of the latest transition.
    fn observe(&mut self, view: &PlayerView);

    /// Produce an action. Called only when this seat holds the turn.
    fn act(&mut self) -> Action;
}
