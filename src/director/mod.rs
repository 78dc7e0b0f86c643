//! Process-wide game orchestration.
//!
//! The [`Director`] maps each session to at most one active [`Round`] and
//! owns round lifecycle: it generates the board, arms the timeout timer,
//! routes message text into the round, and deregisters the round when any
//! terminal event fires. The registry is `RwLock`-guarded so that
//! check-then-insert on start and check-then-remove on termination are
//! atomic against concurrent events for the same session.

mod input;

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::{oneshot, RwLock};

pub use input::{is_goose_call, parse_answer};

use crate::cards::{Board, BoardError};
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, SessionId};
use crate::round::{AnswerOutcome, GooseOutcome, Round, RoundSummary};

/// What a delivered message turned out to be.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// The message parsed as an answer triple.
    Answer(AnswerOutcome),
    /// The message was a goose call.
    Goose(GooseOutcome),
}

/// The error type for [`Director::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartError {
    /// The session already has a running round.
    AlreadyRunning { session: SessionId },
    /// Board generation failed; see [`BoardError`].
    Board(BoardError),
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::AlreadyRunning { session } => {
                write!(f, "{} already has a running round", session)
            }
            StartError::Board(err) => write!(f, "board generation failed: {}", err),
        }
    }
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartError::Board(err) => Some(err),
            StartError::AlreadyRunning { .. } => None,
        }
    }
}

impl From<BoardError> for StartError {
    fn from(err: BoardError) -> Self {
        StartError::Board(err)
    }
}

/// A freshly started round, as seen by the embedding layer.
pub struct RoundHandle {
    /// The session the round runs in.
    pub session: SessionId,
    /// The round itself, for rendering the board and inspecting state.
    pub round: Arc<Round>,
    /// Fires once with the final summary, whichever terminal event wins
    /// (goose, timeout, or stop).
    pub ended: oneshot::Receiver<RoundSummary>,
}

struct ActiveRound {
    round: Arc<Round>,
    done_tx: oneshot::Sender<RoundSummary>,
    cancel_tx: oneshot::Sender<()>,
}

/// Registry of active rounds and owner of their lifecycle.
pub struct Director {
    config: GameConfig,
    rng: Mutex<GameRng>,
    rounds: RwLock<FxHashMap<SessionId, ActiveRound>>,
}

impl Director {
    /// Create a director with entropy-seeded randomness.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create a director that replays deterministically from a seed.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: Mutex::new(rng),
            rounds: RwLock::new(FxHashMap::default()),
        })
    }

    /// The configuration this director runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a round in a session.
    ///
    /// Draws this round's minimum solution count from the configured
    /// weights, generates a board to match, registers the round, and arms
    /// the timeout timer. Fails if the session already has a round.
    pub async fn start(self: &Arc<Self>, session: SessionId) -> Result<RoundHandle, StartError> {
        if self.rounds.read().await.contains_key(&session) {
            return Err(StartError::AlreadyRunning { session });
        }

        // Rejection sampling can run the solver thousands of times, so the
        // board is generated before touching the registry write lock
        let (minimum, board) = {
            let mut rng = self.rng.lock().expect("director rng poisoned");
            let minimum = rng
                .choose_weighted(&self.config.solution_weights)
                .expect("weights validated at construction");
            let board = Board::generate(self.config.rows, self.config.columns, minimum, &mut rng)?;
            (minimum, board)
        };

        let round = Arc::new(Round::new(board, self.config.scoring));
        let (done_tx, done_rx) = oneshot::channel();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        {
            let mut rounds = self.rounds.write().await;
            // A concurrent start may have registered the session while the
            // board was being generated
            if rounds.contains_key(&session) {
                return Err(StartError::AlreadyRunning { session });
            }
            rounds.insert(
                session,
                ActiveRound {
                    round: Arc::clone(&round),
                    done_tx,
                    cancel_tx,
                },
            );
        }

        log::info!(
            "[director] {} started: {} flights on the board (minimum {})",
            session,
            round.board().solutions().len(),
            minimum
        );

        let director = Arc::clone(self);
        let timer_round = Arc::clone(&round);
        let duration = self.config.round_duration;
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(duration) => {
                    // A goose call or stop may have raced us here; the
                    // round's terminal transition picks a single winner
                    if let Some(summary) = timer_round.expire() {
                        director.conclude(session, &timer_round, summary).await;
                    }
                }
                _ = cancel_rx => {}
            }
        });

        Ok(RoundHandle {
            session,
            round,
            ended: done_rx,
        })
    }

    /// The active round for a session, if any.
    pub async fn round(&self, session: SessionId) -> Option<Arc<Round>> {
        self.rounds
            .read()
            .await
            .get(&session)
            .map(|active| Arc::clone(&active.round))
    }

    /// Stop a session's round. The authorization check (who may stop a
    /// game) belongs to the caller.
    ///
    /// Returns `None` when there is nothing to stop, or when a concurrent
    /// terminal event got there first.
    pub async fn stop(&self, session: SessionId) -> Option<RoundSummary> {
        let round = self.round(session).await?;
        let summary = round.stop()?;
        self.conclude(session, &round, summary.clone()).await;
        Some(summary)
    }

    /// Route raw message text into a session's round.
    ///
    /// Returns `None` when the session has no round or the message is
    /// neither a goose call nor an answer. A correct goose call ends and
    /// deregisters the round before this returns.
    pub async fn handle_message(
        &self,
        session: SessionId,
        player: PlayerId,
        text: &str,
    ) -> Option<RoundEvent> {
        let round = self.round(session).await?;

        if input::is_goose_call(text) {
            let outcome = round.call_goose(player);
            if let GooseOutcome::Goosed { summary, .. } = &outcome {
                self.conclude(session, &round, summary.clone()).await;
            }
            return Some(RoundEvent::Goose(outcome));
        }

        let answer = input::parse_answer(text)?;
        let outcome = round.submit_answer(player, answer);
        if let AnswerOutcome::Claimed { player, flight } = &outcome {
            log::debug!("[director] {} claimed {} by {}", session, flight, player);
        }
        Some(RoundEvent::Answer(outcome))
    }

    /// Deregister an ended round and notify the handle holder.
    ///
    /// Called exactly once per round, by whichever terminal path won the
    /// round's transition. Removes the registry entry only if it still
    /// maps to this round; a newer round may already occupy the session.
    async fn conclude(&self, session: SessionId, round: &Arc<Round>, summary: RoundSummary) {
        let entry = {
            let mut rounds = self.rounds.write().await;
            match rounds.get(&session) {
                Some(active) if Arc::ptr_eq(&active.round, round) => rounds.remove(&session),
                _ => None,
            }
        };

        if let Some(entry) = entry {
            log::info!("[director] {} ended: {}", session, summary.reason);
            let _ = entry.cancel_tx.send(());
            let _ = entry.done_tx.send(summary);
        }
    }
}
