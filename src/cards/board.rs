//! The board: the cards currently in play.
//!
//! A board is an ordered, duplicate-free sample of the deck. Position in
//! the sequence is the card's public index — players answer with positions,
//! and the presentation layer labels artwork with them — so order is part
//! of the board's identity.
//!
//! Generation is plain rejection sampling: draw boards until one has at
//! least the requested number of flights. Boards with too few flights
//! degenerate quickly, so rounds are generated against a minimum drawn from
//! a weighted distribution (see [`GameConfig`](crate::GameConfig)).

use std::collections::BTreeSet;
use std::sync::OnceLock;

use smallvec::SmallVec;

use super::card::{Card, DECK, DECK_SIZE};
use crate::core::GameRng;
use crate::solver::{solve, Flight};

/// Hard cap on rejection-sampling attempts.
///
/// At the top of the default difficulty weights (minimum 8 for a 12-card
/// board) roughly 1 in 1250 samples is accepted, so the cap only trips on
/// minimums that are genuinely unreachable for the requested dimensions.
const MAX_GENERATION_ATTEMPTS: usize = 100_000;

/// An ordered, duplicate-free sequence of cards in play.
///
/// The flight set is computed lazily on first access and cached for the
/// board's lifetime; a board is never mutated after construction, so the
/// cache can never go stale.
#[derive(Clone, Debug)]
pub struct Board {
    cards: SmallVec<[Card; 12]>,
    rows: usize,
    columns: usize,
    solutions: OnceLock<BTreeSet<Flight>>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // The solution cache is derived state and does not affect identity
        self.cards == other.cards && self.rows == other.rows && self.columns == other.columns
    }
}

impl Eq for Board {}

impl Board {
    /// Sample a `rows` × `columns` board from the deck, uniformly without
    /// replacement, retrying until it contains at least
    /// `minimum_solutions` flights.
    ///
    /// Fails if the dimensions don't fit the deck, or if the minimum is
    /// still unmet after a defensive number of attempts (an unreachable
    /// minimum is a configuration error, not a reason to hang).
    pub fn generate(
        rows: usize,
        columns: usize,
        minimum_solutions: usize,
        rng: &mut GameRng,
    ) -> Result<Self, BoardError> {
        let size = rows * columns;
        if size < 3 || size > DECK_SIZE {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let cards: SmallVec<[Card; 12]> = rng
                .sample_indices(DECK_SIZE, size)
                .into_iter()
                .map(|i| DECK[i])
                .collect();
            let board = Self {
                cards,
                rows,
                columns,
                solutions: OnceLock::new(),
            };
            if board.solutions().len() >= minimum_solutions {
                return Ok(board);
            }
        }

        Err(BoardError::MinimumUnreachable {
            minimum: minimum_solutions,
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Build a board from explicit cards, e.g. for replays or tests.
    ///
    /// The cards must match the dimensions and contain no duplicates.
    pub fn from_cards(
        rows: usize,
        columns: usize,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self, BoardError> {
        let cards: SmallVec<[Card; 12]> = cards.into_iter().collect();
        let size = rows * columns;
        if size < 3 || size > DECK_SIZE {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        if cards.len() != size {
            return Err(BoardError::WrongCardCount {
                expected: size,
                actual: cards.len(),
            });
        }
        for (i, &card) in cards.iter().enumerate() {
            if cards[..i].contains(&card) {
                return Err(BoardError::DuplicateCard { card });
            }
        }
        Ok(Self {
            cards,
            rows,
            columns,
            solutions: OnceLock::new(),
        })
    }

    /// The cards, in public index order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at a public index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the board is empty. Constructed boards never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Board rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Every valid flight on this board, as canonical index triples.
    ///
    /// Computed on first access and cached.
    #[must_use]
    pub fn solutions(&self) -> &BTreeSet<Flight> {
        self.solutions.get_or_init(|| solve(&self.cards))
    }
}

/// The error type for board construction and generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Dimensions produce a board smaller than a flight or larger than the
    /// deck.
    InvalidDimensions { rows: usize, columns: usize },
    /// Explicit card list does not match the dimensions.
    WrongCardCount { expected: usize, actual: usize },
    /// Boards are sampled without replacement; duplicates are invalid.
    DuplicateCard { card: Card },
    /// Rejection sampling gave up; the minimum is unreachable for these
    /// dimensions.
    MinimumUnreachable { minimum: usize, attempts: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, columns } => write!(
                f,
                "{}x{} board does not fit the {}-card deck",
                rows, columns, DECK_SIZE
            ),
            BoardError::WrongCardCount { expected, actual } => {
                write!(f, "expected {} cards, got {}", expected, actual)
            }
            BoardError::DuplicateCard { card } => {
                write!(f, "card {} appears more than once", card)
            }
            BoardError::MinimumUnreachable { minimum, attempts } => write!(
                f,
                "no board with at least {} flights found in {} attempts",
                minimum, attempts
            ),
        }
    }
}

impl std::error::Error for BoardError {}
