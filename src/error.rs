//! Engine error taxonomy.
//!
//! Every error here is fatal for the current hand. A pure rules engine
//! has nothing to retry; the caller decides whether to abort the match.
//! `forward` validates before mutating, so a returned error leaves the
//! hand state untouched.

use thiserror::Error;

use crate::core::{ActionClass, Seat};

/// Fatal engine errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The match runner was handed other than two real players.
    #[error("Kuhn poker takes exactly 2 players, got {got}")]
    PlayerCount { got: usize },

    /// A non-deal action arrived before the deal.
    #[error("the deal must be the first action of the hand")]
    DealRequired,

    /// A second deal arrived.
    #[error("the deal has already been applied")]
    DealAlreadyApplied,

    /// The deal payload is not two distinct cards from the 3-card deck.
    #[error("invalid deal: ranks must be two distinct cards from the 3-card deck")]
    InvalidDeal,

    /// An action outside the acting seat's available set.
    #[error("{action:?} is not available to {seat}")]
    IllegalAction { seat: Seat, action: ActionClass },

    /// An action arrived after the hand was scored.
    #[error("the hand is over; call init to start a new one")]
    HandOver,

    /// The round counter left the 0..=3 range. Signals an engine or
    /// caller bug; the engine refuses to continue.
    #[error("Kuhn poker has at most 3 rounds of action, reached round {round}")]
    RoundOverflow { round: u8 },
}
