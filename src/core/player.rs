//! Participant identification.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two real players (0 and 1).
//!
//! ## Seat
//!
//! A hand has three participants: the two real players and a synthetic
//! chance seat that deals the private ranks. `Seat` keeps the chance seat
//! out of `PlayerId` entirely, so turn order can only alternate between
//! real players once play begins.

use serde::{Deserialize, Serialize};

/// Index reserved for the chance seat in participant arrays and views.
pub const CHANCE_INDEX: usize = 2;

/// Number of real (competing) players. Fixed for Kuhn poker.
pub const NUM_PLAYERS: usize = 2;

/// Identifier for one of the two real players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1; Kuhn poker has exactly two players.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!(id < NUM_PLAYERS as u8, "Kuhn poker has players 0 and 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the opposing player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..NUM_PLAYERS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One of the three seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// A real player.
    Player(PlayerId),
    /// The chance seat. Acts exactly once, to deal.
    Chance,
}

impl Seat {
    /// Index into participant arrays: players at 0 and 1, chance at 2.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player(p) => p.index(),
            Seat::Chance => CHANCE_INDEX,
        }
    }

    /// Get the player ID if this is a real player's seat.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Seat::Player(p) => Some(p),
            Seat::Chance => None,
        }
    }

    /// All three seats in participant-array order.
    #[must_use]
    pub const fn all() -> [Seat; 3] {
        [
            Seat::Player(PlayerId(0)),
            Seat::Player(PlayerId(1)),
            Seat::Chance,
        ]
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player(p) => write!(f, "{}", p),
            Seat::Chance => write!(f, "Chance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_other() {
        assert_eq!(PlayerId::new(0).other(), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).other(), PlayerId::new(0));
    }

    #[test]
    fn test_player_both() {
        let players: Vec<_> = PlayerId::both().collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    #[should_panic(expected = "Kuhn poker has players 0 and 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::Player(PlayerId::new(0)).index(), 0);
        assert_eq!(Seat::Player(PlayerId::new(1)).index(), 1);
        assert_eq!(Seat::Chance.index(), CHANCE_INDEX);
    }

    #[test]
    fn test_seat_player() {
        assert_eq!(Seat::Player(PlayerId::new(1)).player(), Some(PlayerId::new(1)));
        assert_eq!(Seat::Chance.player(), None);
    }

    #[test]
    fn test_seat_all_order() {
        let seats = Seat::all();
        for (i, seat) in seats.iter().enumerate() {
            assert_eq!(seat.index(), i);
        }
    }

    #[test]
    fn test_seat_display() {
        assert_eq!(format!("{}", Seat::Player(PlayerId::new(1))), "Player 1");
        assert_eq!(format!("{}", Seat::Chance), "Chance");
    }

    #[test]
    fn test_serialization() {
        let seat = Seat::Player(PlayerId::new(1));
        let json = serde_json::to_string(&seat).unwrap();
        let deserialized: Seat = serde_json::from_str(&json).unwrap();
        assert_eq!(seat, deserialized);
    }
}
