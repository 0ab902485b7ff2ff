//! The Kuhn poker transition engine.
//!
//! One engine instance owns one active hand. `init` resets the table and
//! hands the chance seat its sole pending action, the deal. Every
//! `forward` applies exactly one action, either the deal or a player
//! move, and returns fresh per-seat views. Availability is granted only
//! while the hand is undecided; at a terminal state every seat's set is
//! empty.
//!
//! `forward` validates before it mutates, so a returned error leaves the
//! hand untouched. All errors are fatal for the hand.

use smallvec::SmallVec;

use super::payoff;
use super::view::Transition;
use crate::core::{
    Action, ActionClass, EngineConfig, GameRng, PersonState, PlayerId, PrivateState, PublicState,
    Rank, Seat, Snapshot, CHANCE_INDEX, PLAYER_MOVES,
};
use crate::error::EngineError;

/// The rules engine for one hand of Kuhn poker.
pub struct KuhnEngine {
    config: EngineConfig,

    /// Legal-move table for the turn-holding player, fixed at
    /// construction. Engine-local; there is no global action registry.
    legal_moves: [ActionClass; 2],

    rng: GameRng,
    public: PublicState,
    persons: [PersonState; 3],
    private: PrivateState,
    dealt: bool,

    /// Full-table snapshots, one per transition, when the config asks
    /// for them.
    snapshots: Vec<Snapshot>,
}

impl KuhnEngine {
    /// Create an engine. The table starts in the same state `init`
    /// produces; call [`init`](Self::init) to obtain the first views.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut engine = Self {
            rng: GameRng::new(config.seed),
            config,
            legal_moves: PLAYER_MOVES,
            public: PublicState::new(PlayerId::new(0)),
            persons: Self::fresh_persons(),
            private: PrivateState,
            dealt: false,
            snapshots: Vec::new(),
        };
        engine.reset();
        engine
    }

    /// Start a fresh, independent hand.
    ///
    /// The turn goes to the chance seat, whose only available action is
    /// the deal. No state survives from a previous hand.
    pub fn init(&mut self) -> Transition {
        self.reset();
        self.transition()
    }

    /// Apply one action and return the updated views.
    pub fn forward(&mut self, action: Action) -> Result<Transition, EngineError> {
        if self.public.is_terminal() {
            return Err(EngineError::HandOver);
        }

        match action {
            Action::Deal { ranks } => self.apply_deal(ranks)?,
            Action::Check | Action::Bet => self.apply_move(action)?,
        }

        if self.config.record_history {
            self.snapshot();
        }
        Ok(self.transition())
    }

    /// The shared public state.
    #[must_use]
    pub fn public(&self) -> &PublicState {
        &self.public
    }

    /// A seat's person state. Driver-only: exposes the seat's rank.
    #[must_use]
    pub fn person(&self, seat: Seat) -> &PersonState {
        &self.persons[seat.index()]
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Snapshots recorded so far (empty unless `record_history` is set).
    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Fork the engine RNG, e.g. to seed a chance dealer deterministically.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Transition branches ===

    fn apply_deal(&mut self, ranks: [Rank; 2]) -> Result<(), EngineError> {
        if self.dealt {
            return Err(EngineError::DealAlreadyApplied);
        }
        if ranks[0] == ranks[1] || !ranks[0].in_deck() || !ranks[1].in_deck() {
            return Err(EngineError::InvalidDeal);
        }

        self.public.record(Seat::Chance, ActionClass::Deal);
        for (person, rank) in self.persons.iter_mut().zip(ranks) {
            person.set_rank(rank);
        }
        self.persons[CHANCE_INDEX].clear_available();

        let first = self.public.first();
        self.public.set_turn(Seat::Player(first));
        self.persons[first.index()].grant(&self.legal_moves);
        self.dealt = true;

        // The hand is never terminal straight after the deal.
        Ok(())
    }

    fn apply_move(&mut self, action: Action) -> Result<(), EngineError> {
        let actor = match self.public.turn() {
            Seat::Player(p) => p,
            // Turn sits with chance exactly until the deal resolves.
            Seat::Chance => return Err(EngineError::DealRequired),
        };
        if !self.persons[actor.index()].available().contains(&action.class()) {
            return Err(EngineError::IllegalAction {
                seat: Seat::Player(actor),
                action: action.class(),
            });
        }

        self.persons[actor.index()].clear_available();
        self.public.record(Seat::Player(actor), action.class());
        self.public.advance_round();

        let next = actor.other();
        self.public.set_turn(Seat::Player(next));

        let first = self.public.first();
        match self.public.round() {
            1 => self.persons[next.index()].grant(&self.legal_moves),
            2 => {
                let moves = self.player_moves();
                match payoff::evaluate_two_round(first, self.showdown_winner(), [moves[0], moves[1]])
                {
                    Some(scores) => self.public.finish(scores),
                    // check then bet: the checking player must respond.
                    None => self.persons[next.index()].grant(&self.legal_moves),
                }
            }
            3 => {
                let moves = self.player_moves();
                let scores =
                    payoff::evaluate_three_round(first, self.showdown_winner(), moves[2]);
                self.public.finish(scores);
            }
            round => return Err(EngineError::RoundOverflow { round }),
        }
        Ok(())
    }

    // === Helpers ===

    fn reset(&mut self) {
        let first = match self.config.start_turn {
            Some(player) => player,
            None => PlayerId::new(self.rng.gen_range(0..2) as u8),
        };
        self.public = PublicState::new(first);
        self.persons = Self::fresh_persons();
        self.persons[CHANCE_INDEX].grant(&[ActionClass::Deal]);
        self.dealt = false;
        self.snapshots.clear();
        if self.config.record_history {
            self.snapshot();
        }
    }

    fn fresh_persons() -> [PersonState; 3] {
        Seat::all().map(PersonState::new)
    }

    /// The player holding the strictly higher rank. Meaningful only
    /// after the deal; ranks are distinct by deal validation.
    fn showdown_winner(&self) -> PlayerId {
        debug_assert!(self.dealt);
        if self.persons[0].rank() > self.persons[1].rank() {
            PlayerId::new(0)
        } else {
            PlayerId::new(1)
        }
    }

    fn player_moves(&self) -> SmallVec<[ActionClass; 3]> {
        let moves: SmallVec<[ActionClass; 3]> = self
            .public
            .player_history()
            .map(|r| r.action)
            .collect();
        debug_assert_eq!(moves.len(), self.public.round() as usize);
        moves
    }

    fn snapshot(&mut self) {
        self.snapshots.push(Snapshot {
            public: self.public.clone(),
            persons: self.persons.clone(),
        });
    }

    fn transition(&self) -> Transition {
        Transition::new(&self.public, &self.persons, self.private)
    }
}
