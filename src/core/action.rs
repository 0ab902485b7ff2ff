//! Action representation.
//!
//! Kuhn poker has three actions. The deal is a chance action carrying the
//! two hidden ranks; check and bet are the only player moves. Actions are
//! a sum type matched exhaustively by the transition engine - legality is
//! tracked per seat as `ActionClass` sets, since the concrete ranks of a
//! future deal are not known when the deal is merely *available*.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cards::Rank;
use super::player::Seat;

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The chance action: one private rank per real player, in player
    /// order. Legal only as the very first action of a hand.
    Deal { ranks: [Rank; 2] },
    /// Decline to raise the stake.
    Check,
    /// Raise the stake by one unit.
    Bet,
}

impl Action {
    /// The legality class of this action.
    #[must_use]
    pub const fn class(&self) -> ActionClass {
        match self {
            Action::Deal { .. } => ActionClass::Deal,
            Action::Check => ActionClass::Check,
            Action::Bet => ActionClass::Bet,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Deal { ranks } => write!(f, "deal({}, {})", ranks[0], ranks[1]),
            Action::Check => write!(f, "check"),
            Action::Bet => write!(f, "bet"),
        }
    }
}

/// Action identity without payload, used for availability sets and the
/// legal-move table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionClass {
    Deal,
    Check,
    Bet,
}

/// The moves always legal for the turn-holding player once dealing is
/// done. Kuhn poker has no bet sizing and no separate fold action.
pub const PLAYER_MOVES: [ActionClass; 2] = [ActionClass::Check, ActionClass::Bet];

/// A seat's currently-available actions.
///
/// Holds at most two entries, so `SmallVec` keeps it off the heap.
pub type AvailableActions = SmallVec<[ActionClass; 2]>;

/// A recorded action for the append-only history.
///
/// The history is public, so it records the deal's *identity*, never its
/// payload: storing `Action::Deal` here would hand both private ranks to
/// anyone holding the public state. Ranks live only in per-seat person
/// states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub actor: Seat,

    /// The action taken, payload stripped.
    pub action: ActionClass,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(actor: Seat, action: ActionClass) -> Self {
        Self { actor, action }
    }
}
