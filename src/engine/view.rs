//! Per-participant views of a transition.
//!
//! Every `init`/`forward` builds a fresh, owned view for each seat. A
//! view carries the shared public state and only that seat's person
//! state, so a collaborator handed its view can never read another
//! seat's rank. The full table (all person states) goes only to the
//! trusted driver via `Transition`.

use serde::{Deserialize, Serialize};

use crate::core::{PersonState, PrivateState, PublicState, Seat};

/// What one participant is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// This seat's own state, its private rank included.
    pub person: PersonState,

    /// The shared public state.
    pub public: PublicState,
}

impl PlayerView {
    /// The seat this view belongs to.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.person.seat()
    }

    /// Whether this seat holds the turn right now.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.public.turn() == self.seat()
    }
}

/// The result of one `init` or `forward` call.
///
/// Views are indexed by seat: players at 0 and 1, chance at
/// [`crate::core::CHANCE_INDEX`]. The driver routes each view to its
/// participant and keeps the rest to itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Per-seat information slices, built fresh for this transition.
    pub views: [PlayerView; 3],

    /// The shared public state.
    pub public: PublicState,

    /// All three person states (driver-only; leaks both ranks).
    pub persons: [PersonState; 3],

    /// Reserved hidden state.
    pub private: PrivateState,
}

impl Transition {
    /// Build a transition snapshot from the engine's current state.
    #[must_use]
    pub(crate) fn new(
        public: &PublicState,
        persons: &[PersonState; 3],
        private: PrivateState,
    ) -> Self {
        let view = |i: usize| PlayerView {
            person: persons[i].clone(),
            public: public.clone(),
        };
        Self {
            views: [view(0), view(1), view(2)],
            public: public.clone(),
            persons: persons.clone(),
            private,
        }
    }

    /// The view for a given seat.
    #[must_use]
    pub fn view(&self, seat: Seat) -> &PlayerView {
        &self.views[seat.index()]
    }
}
