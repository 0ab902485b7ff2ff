//! # kuhn-poker
//!
//! A two-player Kuhn poker engine for RL/solver training.
//!
//! The engine is a finite, fully-specified state machine: one hidden
//! rank per player from a 3-card deck, at most three rounds of
//! check/bet, fixed payoffs at fold or showdown. Agents and game-tree
//! solvers drive it through two calls - `init` once, then `forward` per
//! action - and read per-seat views that never leak the opponent's card.
//!
//! ## Design Principles
//!
//! 1. **Exact semantics**: turn order, information asymmetry, and
//!    showdown tie-breaks are encoded in types and validated
//!    transitions; any deviation would corrupt downstream training.
//!
//! 2. **The engine never acts**: the deal comes from a chance seat
//!    implemented as an external collaborator, and moves come from
//!    players. The engine only validates and transitions.
//!
//! 3. **No ambient state**: configuration, RNG, and the legal-move
//!    table are engine-local; a seeded engine replays identically.
//!
//! ## Modules
//!
//! - `core`: participants, cards, actions, state, RNG, configuration
//! - `engine`: transition engine, payoff evaluation, per-seat views
//! - `players`: the `KuhnPlayer` trait, chance dealer, reference players
//! - `runner`: reference match loop
//! - `error`: fatal engine errors

pub mod core;
pub mod engine;
pub mod error;
pub mod players;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionClass, ActionRecord, AvailableActions, EngineConfig, GameRng, GameRngState,
    PersonState, PlayerId, PrivateState, PublicState, Rank, Seat, Snapshot, CHANCE_INDEX,
    NUM_PLAYERS, PLAYER_MOVES,
};

pub use crate::engine::{KuhnEngine, PlayerView, Transition};

pub use crate::error::EngineError;

pub use crate::players::{ChanceDealer, KuhnPlayer, RandomPlayer, ScriptedPlayer};

pub use crate::runner::run_match;
