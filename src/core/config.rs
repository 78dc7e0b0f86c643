//! Engine configuration.
//!
//! A [`GameConfig`] describes everything that varies between deployments:
//! board shape, round duration, the difficulty distribution, and the four
//! scoring constants. Defaults reproduce the classic game: a 4×3 board,
//! 180-second rounds, +1/−1/+2/−1 scoring.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;

/// Default weights for the minimum acceptable number of solutions at board
/// generation, indexed by minimum value (0..=8).
///
/// This shifts the number of solutions per board up for gameplay reasons,
/// while keeping the end of the game unpredictable. It is *not* the
/// distribution of the number of solutions itself.
pub const DEFAULT_SOLUTION_WEIGHTS: [f32; 9] =
    [0.0, 0.05, 0.05, 0.1, 0.15, 0.25, 0.2, 0.15, 0.05];

/// Default round duration.
pub const DEFAULT_ROUND_DURATION: Duration = Duration::from_secs(180);

/// Score deltas for the four scoring events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    /// Awarded for claiming a valid flight.
    pub correct_solution: i64,
    /// Applied for submitting an invalid flight.
    pub incorrect_solution: i64,
    /// Awarded for a correct goose call.
    pub correct_goose: i64,
    /// Applied for a premature goose call.
    pub incorrect_goose: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            correct_solution: 1,
            incorrect_solution: -1,
            correct_goose: 2,
            incorrect_goose: -1,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows.
    pub rows: usize,

    /// Board columns.
    pub columns: usize,

    /// How long a round runs before it times out.
    pub round_duration: Duration,

    /// Weights for drawing the minimum acceptable solution count per round.
    /// Index `i` is the weight of minimum `i`.
    pub solution_weights: Vec<f32>,

    /// Score deltas.
    pub scoring: Scoring,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 3,
            round_duration: DEFAULT_ROUND_DURATION,
            solution_weights: DEFAULT_SOLUTION_WEIGHTS.to_vec(),
            scoring: Scoring::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the round duration.
    #[must_use]
    pub fn with_round_duration(mut self, duration: Duration) -> Self {
        self.round_duration = duration;
        self
    }

    /// Set the minimum-solutions weights.
    #[must_use]
    pub fn with_solution_weights(mut self, weights: impl Into<Vec<f32>>) -> Self {
        self.solution_weights = weights.into();
        self
    }

    /// Set the scoring constants.
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Board size in cards.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board_size();
        if size < 3 {
            return Err(ConfigError::BoardTooSmall { size });
        }
        if size > DECK_SIZE {
            return Err(ConfigError::BoardExceedsDeck { size });
        }
        if self.solution_weights.is_empty() {
            return Err(ConfigError::EmptyWeights);
        }
        let total: f32 = self.solution_weights.iter().sum();
        if !total.is_finite() || total <= 0.0 || self.solution_weights.iter().any(|w| *w < 0.0) {
            return Err(ConfigError::InvalidWeights);
        }
        Ok(())
    }
}

/// The error type for rejected configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than 3 cards can never contain a flight.
    BoardTooSmall { size: usize },
    /// A board cannot hold more distinct cards than the deck has.
    BoardExceedsDeck { size: usize },
    /// No weights to draw a minimum solution count from.
    EmptyWeights,
    /// Weights must be non-negative with a positive, finite sum.
    InvalidWeights,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::BoardTooSmall { size } => {
                write!(f, "board of {} cards is too small to hold a flight", size)
            }
            ConfigError::BoardExceedsDeck { size } => write!(
                f,
                "board of {} cards exceeds the {}-card deck",
                size, DECK_SIZE
            ),
            ConfigError::EmptyWeights => write!(f, "solution weights are empty"),
            ConfigError::InvalidWeights => {
                write!(f, "solution weights must be non-negative with a positive sum")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 4);
        assert_eq!(config.columns, 3);
        assert_eq!(config.board_size(), 12);
        assert_eq!(config.round_duration, Duration::from_secs(180));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_scoring() {
        let scoring = Scoring::default();
        assert_eq!(scoring.correct_solution, 1);
        assert_eq!(scoring.incorrect_solution, -1);
        assert_eq!(scoring.correct_goose, 2);
        assert_eq!(scoring.incorrect_goose, -1);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_dimensions(3, 3)
            .with_round_duration(Duration::from_secs(60))
            .with_solution_weights([0.5, 0.5]);

        assert_eq!(config.board_size(), 9);
        assert_eq!(config.round_duration, Duration::from_secs(60));
        assert_eq!(config.solution_weights, vec![0.5, 0.5]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_too_small() {
        let config = GameConfig::new().with_dimensions(1, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooSmall { size: 2 })
        );
    }

    #[test]
    fn test_board_exceeds_deck() {
        let config = GameConfig::new().with_dimensions(9, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardExceedsDeck { size: 90 })
        );
    }

    #[test]
    fn test_empty_weights() {
        let config = GameConfig::new().with_solution_weights(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyWeights));
    }

    #[test]
    fn test_invalid_weights() {
        let config = GameConfig::new().with_solution_weights([0.0, 0.0]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidWeights));

        let config = GameConfig::new().with_solution_weights([0.5, -0.1]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidWeights));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
