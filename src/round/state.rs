//! The round state machine.
//!
//! A round is shared mutable state: many players submit answers and goose
//! calls concurrently, and the director's timer races them with a timeout.
//! One mutex guards the phase, the claimed-answer ledger, and the scores,
//! so every compound step — membership check then claim, phase check then
//! terminal transition — is atomic. Whichever terminal event wins the lock
//! first produces the summary; the losers observe `Ended` and no-op.
//!
//! Adversarial input never errors. Out-of-range triples, duplicate claims,
//! and events arriving after the end are ignored (the outer layer delivers
//! at least once, so duplicates are expected, not exceptional); wrong
//! answers and premature goose calls score negatively as part of the game.

use std::sync::Mutex;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::summary::{EndReason, RoundSummary};
use crate::cards::Board;
use crate::core::{PlayerId, Scoring};
use crate::solver::Flight;

/// Outcome of an answer submission, for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// A valid, previously unclaimed flight. The submitter scored.
    Claimed { player: PlayerId, flight: Flight },
    /// Not a flight on this board. The submitter was penalized.
    Wrong,
    /// Not treated as an answer: indices out of range, flight already
    /// claimed, or round already over. No score change.
    Ignored,
}

/// Outcome of a goose call, for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GooseOutcome {
    /// Every flight had been claimed. The round is over and the caller
    /// scored the goose bonus.
    Goosed {
        player: PlayerId,
        summary: RoundSummary,
    },
    /// Unclaimed flights remain. The caller was penalized and the round
    /// keeps running.
    Wrong,
    /// The round was already over. No score change.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Ended,
}

struct Ledger {
    phase: Phase,
    /// First claimant per flight. Entries are never overwritten or removed.
    claimed: FxHashMap<Flight, PlayerId>,
    /// Score accumulators in first-scored order, so ranking ties are
    /// deterministic.
    scores: Vec<(PlayerId, i64)>,
}

impl Ledger {
    fn score(&mut self, player: PlayerId, delta: i64) {
        match self.scores.iter().position(|(p, _)| *p == player) {
            Some(i) => self.scores[i].1 += delta,
            None => self.scores.push((player, delta)),
        }
    }
}

/// A single timed game: board, claimed-answer ledger, and scores.
///
/// All operations take `&self` and are safe under concurrent invocation.
/// The round enters `Running` on construction and ends exactly once, by
/// whichever of goose call, timeout, or explicit stop fires first.
pub struct Round {
    board: Board,
    scoring: Scoring,
    ledger: Mutex<Ledger>,
}

impl Round {
    /// Start a round on the given board.
    #[must_use]
    pub fn new(board: Board, scoring: Scoring) -> Self {
        Self {
            board,
            scoring,
            ledger: Mutex::new(Ledger {
                phase: Phase::Running,
                claimed: FxHashMap::default(),
                scores: Vec::new(),
            }),
        }
    }

    /// The board in play.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the round is still accepting events.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lock().phase == Phase::Running
    }

    /// Claimed flights with their claimants, in canonical flight order.
    #[must_use]
    pub fn claimed_answers(&self) -> Vec<(Flight, PlayerId)> {
        let ledger = self.lock();
        let mut claims: Vec<_> = ledger
            .claimed
            .iter()
            .map(|(&flight, &player)| (flight, player))
            .collect();
        claims.sort_by_key(|(flight, _)| *flight);
        claims
    }

    /// Current scores in first-scored order.
    #[must_use]
    pub fn scores(&self) -> Vec<(PlayerId, i64)> {
        self.lock().scores.clone()
    }

    /// Submit an index triple as a flight, in any order.
    ///
    /// Indices are re-validated against the board even if the caller
    /// already range-checked them; a triple that is out of range, already
    /// claimed, or arrives after the round ended is ignored rather than
    /// penalized. A well-formed triple that is not a flight costs the
    /// submitter [`Scoring::incorrect_solution`].
    pub fn submit_answer(&self, player: PlayerId, answer: [usize; 3]) -> AnswerOutcome {
        let flight = Flight::from(answer);
        let mut ledger = self.lock();

        if ledger.phase == Phase::Ended {
            return AnswerOutcome::Ignored;
        }
        // Forgiving for indices not on the board: not an answer
        if !flight.in_bounds(self.board.len()) {
            return AnswerOutcome::Ignored;
        }
        // A repeated index names only two cards; well-formed but never a
        // flight, so it is scored as a wrong answer
        if !flight.is_distinct() {
            ledger.score(player, self.scoring.incorrect_solution);
            return AnswerOutcome::Wrong;
        }
        // Forgiving for claims that lost a race: no penalty for a correct
        // answer someone else got in first
        if ledger.claimed.contains_key(&flight) {
            return AnswerOutcome::Ignored;
        }

        if self.board.solutions().contains(&flight) {
            ledger.claimed.insert(flight, player);
            ledger.score(player, self.scoring.correct_solution);
            AnswerOutcome::Claimed { player, flight }
        } else {
            ledger.score(player, self.scoring.incorrect_solution);
            AnswerOutcome::Wrong
        }
    }

    /// Call that no unclaimed flights remain.
    ///
    /// Correct (claims equal solutions at call time): the caller scores
    /// [`Scoring::correct_goose`] and the round ends. Incorrect: the caller
    /// scores [`Scoring::incorrect_goose`] and the round keeps running —
    /// a goose call is a gamble, not a query.
    pub fn call_goose(&self, player: PlayerId) -> GooseOutcome {
        let mut ledger = self.lock();

        if ledger.phase == Phase::Ended {
            return GooseOutcome::Ignored;
        }

        if ledger.claimed.len() == self.board.solutions().len() {
            ledger.score(player, self.scoring.correct_goose);
            ledger.phase = Phase::Ended;
            let summary = self.finalize(&ledger, EndReason::Goosed);
            GooseOutcome::Goosed { player, summary }
        } else {
            ledger.score(player, self.scoring.incorrect_goose);
            GooseOutcome::Wrong
        }
    }

    /// End the round on behalf of the timeout timer.
    ///
    /// Returns `None` if another terminal event already won; firing twice
    /// is harmless by design, since termination races are expected.
    pub fn expire(&self) -> Option<RoundSummary> {
        self.end(EndReason::TimedOut)
    }

    /// End the round on an explicit, externally authorized stop request.
    ///
    /// Returns `None` if another terminal event already won.
    pub fn stop(&self) -> Option<RoundSummary> {
        self.end(EndReason::Stopped)
    }

    fn end(&self, reason: EndReason) -> Option<RoundSummary> {
        let mut ledger = self.lock();
        match ledger.phase {
            Phase::Ended => None,
            Phase::Running => {
                ledger.phase = Phase::Ended;
                Some(self.finalize(&ledger, reason))
            }
        }
    }

    /// Compute the final ranking and missed flights. Called exactly once,
    /// by the terminal transition that flipped the phase.
    fn finalize(&self, ledger: &Ledger, reason: EndReason) -> RoundSummary {
        debug_assert_eq!(ledger.phase, Phase::Ended);

        let mut ranking = ledger.scores.clone();
        // Stable sort: ties keep first-scored order
        ranking.sort_by(|a, b| b.1.cmp(&a.1));

        let missed = self
            .board
            .solutions()
            .iter()
            .filter(|flight| !ledger.claimed.contains_key(flight))
            .copied()
            .collect();

        RoundSummary {
            reason,
            ranking,
            missed,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Ledger> {
        // Poisoning means a panic mid-update; that is a caller-side bug,
        // not a game event, so propagate it
        self.ledger.lock().expect("round ledger poisoned")
    }
}
