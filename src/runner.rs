//! Reference match loop.
//!
//! Wires two [`KuhnPlayer`] implementations and the internal chance
//! dealer to one engine: `init`, distribute views, then ask the turn
//! holder for an action and `forward` it until the hand is scored.
//! Anything fancier (best-of-N drivers, trajectory collection, solvers)
//! belongs to the caller; this is the minimal correct loop.

use crate::core::{Seat, CHANCE_INDEX, NUM_PLAYERS};
use crate::engine::KuhnEngine;
use crate::error::EngineError;
use crate::players::{ChanceDealer, KuhnPlayer};

/// Play one hand to completion and return the final scores in player
/// order.
///
/// The slice must hold exactly two players; the chance dealer is seated
/// internally, seeded from a fork of the engine RNG so seeded matches
/// replay identically.
pub fn run_match(
    engine: &mut KuhnEngine,
    players: &mut [&mut dyn KuhnPlayer],
) -> Result<[i32; 2], EngineError> {
    if players.len() != NUM_PLAYERS {
        return Err(EngineError::PlayerCount {
            got: players.len(),
        });
    }

    let mut dealer = ChanceDealer::new(engine.fork_rng());
    let mut transition = engine.init();

    loop {
        for (i, player) in players.iter_mut().enumerate() {
            player.observe(&transition.views[i]);
        }
        dealer.observe(&transition.views[CHANCE_INDEX]);

        if let Some(scores) = transition.public.scores() {
            return Ok(scores);
        }

        let action = match transition.public.turn() {
            Seat::Chance => dealer.act(),
            Seat::Player(p) => players[p.index()].act(),
        };
        transition = engine.forward(action)?;
    }
}
