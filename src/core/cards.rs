//! The three-card Kuhn deck.
//!
//! Kuhn poker is played with exactly three ranks. Two are dealt, one per
//! player, and the third stays hidden. Ranks compare by value; there are
//! no suits and no ties, since cards are drawn without replacement.

use serde::{Deserialize, Serialize};

/// A card rank from the fixed 3-value deck.
///
/// Rank 0 is the lowest (Jack), rank 2 the highest (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// The full deck, lowest rank first.
    pub const DECK: [Rank; 3] = [Rank(0), Rank(1), Rank(2)];

    /// Create a rank.
    ///
    /// Panics if `value` is not a member of the 3-card deck.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < Self::DECK.len(),
            "Kuhn deck has ranks 0, 1, 2"
        );
        Self(value)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether this rank belongs to the deck.
    #[must_use]
    pub const fn in_deck(self) -> bool {
        (self.0 as usize) < Self::DECK.len()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "J"),
            1 => write!(f, "Q"),
            2 => write!(f, "K"),
            n => write!(f, "Rank({})", n),
        }
    }
}
