//! The game engine: transitions, payoffs, per-seat views.
//!
//! `KuhnEngine` owns one active hand and exposes the two-call surface
//! drivers use: `init` once, then `forward` per action until the public
//! state is terminal.

pub mod engine;
pub mod payoff;
pub mod view;

pub use engine::KuhnEngine;
pub use view::{PlayerView, Transition};
