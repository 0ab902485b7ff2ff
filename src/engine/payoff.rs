//! Payoff evaluation at showdown and fold.
//!
//! Pure functions over the player-action sequence. `first` is the player
//! who opened the hand; `win` holds the strictly higher rank (ranks are
//! dealt without replacement, so there is no tie). All results are
//! zero-sum pairs in player order.
//!
//! | round 1 | round 2 | result                         |
//! |---------|---------|--------------------------------|
//! | check   | check   | showdown for 1                 |
//! | check   | bet     | undecided, round 3 follows     |
//! | bet     | check   | `first` wins 1 (opponent folds)|
//! | bet     | bet     | showdown for 2                 |
//!
//! Round 3 only exists after check, bet. It is `first`'s response: a
//! check folds (the opponent wins 1), a bet calls (showdown for 2).

use crate::core::{ActionClass, PlayerId};

/// Zero-sum score pair awarding `stake` to `winner`.
#[must_use]
fn award(winner: PlayerId, stake: i32) -> [i32; 2] {
    let mut scores = [0, 0];
    scores[winner.index()] = stake;
    scores[winner.other().index()] = -stake;
    scores
}

/// Evaluate a hand after two player actions.
///
/// Returns `None` for the check-then-bet line: the checking player still
/// has to respond, so the hand continues into round 3.
#[must_use]
pub fn evaluate_two_round(
    first: PlayerId,
    win: PlayerId,
    opening: [ActionClass; 2],
) -> Option<[i32; 2]> {
    match (opening[0], opening[1]) {
        (ActionClass::Check, ActionClass::Check) => Some(award(win, 1)),
        (ActionClass::Check, ActionClass::Bet) => None,
        (ActionClass::Bet, ActionClass::Check) => Some(award(first, 1)),
        (ActionClass::Bet, ActionClass::Bet) => Some(award(win, 2)),
        (ActionClass::Deal, _) | (_, ActionClass::Deal) => {
            unreachable!("the deal is excluded from payoff evaluation")
        }
    }
}

/// Evaluate a hand after the third player action.
///
/// Only the check, bet line reaches round 3, and the responder is always
/// `first` (the player who checked in round 1). A check here folds; a
/// bet calls and goes to showdown.
#[must_use]
pub fn evaluate_three_round(first: PlayerId, win: PlayerId, response: ActionClass) -> [i32; 2] {
    match response {
        ActionClass::Check => award(first.other(), 1),
        ActionClass::Bet => award(win, 2),
        ActionClass::Deal => unreachable!("the deal is excluded from payoff evaluation"),
    }
}
