//! Hand state: public, per-seat, and private information.
//!
//! ## PublicState
//!
//! Everything both players may observe: whose turn it is, who acted first,
//! the betting-round counter, the final scores once the hand is over, and
//! the append-only action history. Read-only outside the crate; only the
//! transition engine mutates it.
//!
//! ## PersonState
//!
//! One per seat (two players plus chance): the seat's dealt rank and its
//! currently-available actions. A seat's rank is never shown to the other
//! seats; views hand each participant only its own `PersonState`.
//!
//! ## PrivateState
//!
//! Reserved container for information hidden from every seat. Kuhn poker
//! keeps nothing there, but it stays part of the transition contract.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionClass, ActionRecord, AvailableActions};
use super::cards::Rank;
use super::player::{PlayerId, Seat};

/// Public hand state - observable by all seats.
///
/// The action history is an `im::Vector` for O(1) clone; solver code
/// clones public state once per tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Seat to act next.
    turn: Seat,

    /// The player who acts first once the deal resolves. Fixed for the
    /// whole hand; also the player who must respond to a round-3 bet.
    first: PlayerId,

    /// Player actions taken so far (0..=3). The deal does not count.
    round: u8,

    /// Final zero-sum scores in player order. Present exactly when the
    /// hand is terminal.
    scores: Option<[i32; 2]>,

    /// Append-only history, the deal record included. Records carry the
    /// action identity only; the deal's ranks never enter public state.
    history: Vector<ActionRecord>,
}

impl PublicState {
    /// Fresh state for a hand where `first` will act after the deal.
    ///
    /// The turn starts at the chance seat.
    #[must_use]
    pub(crate) fn new(first: PlayerId) -> Self {
        Self {
            turn: Seat::Chance,
            first,
            round: 0,
            scores: None,
            history: Vector::new(),
        }
    }

    /// Seat to act next.
    #[must_use]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// The player who acted first in this hand.
    #[must_use]
    pub fn first(&self) -> PlayerId {
        self.first
    }

    /// Count of player actions taken so far.
    #[must_use]
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Final scores in player order, once the hand is over.
    #[must_use]
    pub fn scores(&self) -> Option<[i32; 2]> {
        self.scores
    }

    /// Whether the hand has a final score. Scores are present exactly
    /// when the hand is terminal, so this is derived, not stored.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.scores.is_some()
    }

    /// Full action history, the deal record included.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// History restricted to player actions. Its length equals `round()`
    /// after every non-chance transition.
    pub fn player_history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history
            .iter()
            .filter(|r| r.action != ActionClass::Deal)
    }

    pub(crate) fn set_turn(&mut self, seat: Seat) {
        self.turn = seat;
    }

    pub(crate) fn record(&mut self, actor: Seat, action: ActionClass) {
        self.history.push_back(ActionRecord::new(actor, action));
    }

    pub(crate) fn advance_round(&mut self) {
        self.round += 1;
    }

    /// Set the final scores. Called once, at the terminal transition.
    pub(crate) fn finish(&mut self, scores: [i32; 2]) {
        debug_assert!(self.scores.is_none(), "scores are set exactly once");
        debug_assert_eq!(scores[0] + scores[1], 0, "Kuhn poker is zero-sum");
        self.scores = Some(scores);
    }
}

/// Per-seat state: identity, dealt rank, available actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonState {
    /// The seat this state belongs to.
    seat: Seat,

    /// The dealt private rank. `None` until the deal resolves; always
    /// `None` for the chance seat.
    rank: Option<Rank>,

    /// Actions legal for this seat right now. Empty unless the seat
    /// holds the turn.
    available: AvailableActions,
}

impl PersonState {
    #[must_use]
    pub(crate) fn new(seat: Seat) -> Self {
        Self {
            seat,
            rank: None,
            available: AvailableActions::new(),
        }
    }

    /// The seat this state belongs to.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// This seat's dealt rank, if any.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// Actions legal for this seat right now.
    #[must_use]
    pub fn available(&self) -> &AvailableActions {
        &self.available
    }

    pub(crate) fn set_rank(&mut self, rank: Rank) {
        self.rank = Some(rank);
    }

    pub(crate) fn grant(&mut self, actions: &[ActionClass]) {
        self.available = AvailableActions::from_slice(actions);
    }

    pub(crate) fn clear_available(&mut self) {
        self.available.clear();
    }
}

/// Information hidden from every seat. Unused by current rules, but part
/// of the contract returned by every transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateState;

/// A point-in-time copy of the full table state, kept by the engine when
/// `record_history` is enabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub public: PublicState,
    pub persons: [PersonState; 3],
}
