//! End-of-round results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::solver::Flight;

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A correct goose call: every flight had been claimed.
    Goosed,
    /// The round duration elapsed.
    TimedOut,
    /// An explicit stop request from the embedding layer.
    Stopped,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::Goosed => write!(f, "goosed"),
            EndReason::TimedOut => write!(f, "time up"),
            EndReason::Stopped => write!(f, "stopped"),
        }
    }
}

/// Everything the presentation layer needs to close out a round.
///
/// Produced exactly once per round, by whichever terminal event wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// The terminal event that ended the round.
    pub reason: EndReason,

    /// Final scores, descending. The sort is stable, so players tied on
    /// score stay in the order they first scored.
    pub ranking: Vec<(PlayerId, i64)>,

    /// Flights nobody claimed, in canonical order. Empty after a correct
    /// goose call.
    pub missed: Vec<Flight>,
}

impl RoundSummary {
    /// The final score of a player, if they scored at all.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<i64> {
        self.ranking
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, score)| *score)
    }
}
