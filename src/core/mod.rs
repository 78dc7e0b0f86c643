//! Identifiers, configuration, and RNG.
//!
//! - [`PlayerId`] / [`SessionId`]: opaque handles from the embedding layer
//! - [`GameConfig`] / [`Scoring`]: deployment knobs and score deltas
//! - [`GameRng`]: deterministic ChaCha8 randomness for board sampling

mod config;
mod player;
mod rng;

pub use config::{
    ConfigError, GameConfig, Scoring, DEFAULT_ROUND_DURATION, DEFAULT_SOLUTION_WEIGHTS,
};
pub use player::{PlayerId, SessionId};
pub use rng::GameRng;
