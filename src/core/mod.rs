//! Core types: participants, cards, actions, state, RNG, configuration.
//!
//! These are the building blocks the transition engine operates on. The
//! legal-move table lives here as a constant handed to the engine at
//! construction; nothing in this module is a process-wide singleton.

pub mod action;
pub mod cards;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionClass, ActionRecord, AvailableActions, PLAYER_MOVES};
pub use cards::Rank;
pub use config::EngineConfig;
pub use player::{PlayerId, Seat, CHANCE_INDEX, NUM_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use state::{PersonState, PrivateState, PublicState, Snapshot};
