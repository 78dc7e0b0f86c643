//! # duckgoose
//!
//! A multiplayer pattern-matching card game engine.
//!
//! Players scan a board of cards — four features per card, three values
//! per feature — and race to call out *flights*: triples of cards where
//! every feature is either uniform across all three or pairwise distinct.
//! When a player believes no unclaimed flights remain, they call "GOOSE";
//! a correct call ends the round.
//!
//! ## Design Principles
//!
//! 1. **Engine, not bot**: rendering, message payloads, permissions, and
//!    transport live outside. The engine consumes opaque player/session
//!    handles and extracted answer triples, and emits outcome signals and
//!    summaries a presentation layer can display.
//!
//! 2. **Race-tolerant by construction**: answers, goose calls, timeouts,
//!    and stops may arrive concurrently and more than once. Compound steps
//!    are atomic, terminal transitions pick exactly one winner, and
//!    duplicate or stale events degrade to no-ops instead of errors.
//!
//! 3. **Controlled difficulty**: boards are rejection-sampled against a
//!    minimum flight count drawn from a weighted distribution, keeping
//!    rounds lively without making flight counts predictable.
//!
//! ## Modules
//!
//! - `core`: player/session identifiers, configuration, RNG
//! - `cards`: the card universe, catalog indexing, board sampling
//! - `solver`: exhaustive flight enumeration
//! - `round`: the per-round state machine, scoring, summaries
//! - `director`: session registry, timers, message routing

pub mod cards;
pub mod core;
pub mod director;
pub mod round;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, PlayerId, Scoring, SessionId, DEFAULT_ROUND_DURATION,
    DEFAULT_SOLUTION_WEIGHTS,
};

pub use crate::cards::{Board, BoardError, Card, DECK, DECK_SIZE, FEATURE_COUNT, FEATURE_VALUES};

pub use crate::solver::{solve, Flight};

pub use crate::round::{AnswerOutcome, EndReason, GooseOutcome, Round, RoundSummary};

pub use crate::director::{
    is_goose_call, parse_answer, Director, RoundEvent, RoundHandle, StartError,
};
