//! The round state machine and its results.
//!
//! - [`Round`]: concurrent-safe answer/goose handling for one game
//! - [`AnswerOutcome`] / [`GooseOutcome`]: per-event signals
//! - [`RoundSummary`] / [`EndReason`]: end-of-round results

mod state;
mod summary;

pub use state::{AnswerOutcome, GooseOutcome, Round};
pub use summary::{EndReason, RoundSummary};
