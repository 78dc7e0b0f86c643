//! The card universe.
//!
//! A card is a point in the four-dimensional feature space over {0, 1, 2}:
//! four independent features (say color, count, symbol, accessory), three
//! values each. The full deck is the 81-point Cartesian product, enumerated
//! lexicographically so that a card's deck position doubles as its catalog
//! index for artwork lookup.

use serde::{Deserialize, Serialize};

/// Number of features per card.
pub const FEATURE_COUNT: usize = 4;

/// Number of values per feature.
pub const FEATURE_VALUES: u8 = 3;

/// Number of cards in the deck: 3^4.
pub const DECK_SIZE: usize = 81;

/// The fixed 81-card universe, in lexicographic feature order.
///
/// The ordering is load-bearing: `DECK[i].catalog_index() == i`, and
/// presentation layers rely on catalog indices to locate artwork.
pub static DECK: [Card; DECK_SIZE] = build_deck();

/// A card: an immutable 4-tuple of feature values in {0, 1, 2}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    features: [u8; FEATURE_COUNT],
}

impl Card {
    /// Create a card from its feature tuple.
    ///
    /// Panics if any feature value is out of range; cards built from
    /// [`DECK`] are always valid.
    #[must_use]
    pub const fn new(features: [u8; FEATURE_COUNT]) -> Self {
        let mut i = 0;
        while i < FEATURE_COUNT {
            assert!(features[i] < FEATURE_VALUES, "feature value out of range");
            i += 1;
        }
        Self { features }
    }

    /// The full feature tuple.
    #[must_use]
    pub const fn features(self) -> [u8; FEATURE_COUNT] {
        self.features
    }

    /// A single feature value.
    #[must_use]
    pub const fn feature(self, index: usize) -> u8 {
        self.features[index]
    }

    /// The card's unique position (0..81) in the canonical enumeration,
    /// obtained by reading the feature tuple as base-3, most significant
    /// feature first.
    ///
    /// Solving logic never uses this; it exists so presentation layers can
    /// locate card artwork, and must stay stable.
    #[must_use]
    pub const fn catalog_index(self) -> usize {
        let mut index = 0;
        let mut i = 0;
        while i < FEATURE_COUNT {
            index = index * FEATURE_VALUES as usize + self.features[i] as usize;
            i += 1;
        }
        index
    }

    /// The unique third card completing a flight with `self` and `other`.
    ///
    /// Per feature: if the two cards agree, the completion repeats the
    /// value; if they differ, it takes the third value (`3 - a - b` under
    /// the 0/1/2 encoding). Two cards determine exactly one completion, so
    /// any pair of distinct cards extends to exactly one candidate flight.
    #[must_use]
    pub const fn completion(self, other: Card) -> Card {
        let mut features = [0u8; FEATURE_COUNT];
        let mut i = 0;
        while i < FEATURE_COUNT {
            let (a, b) = (self.features[i], other.features[i]);
            features[i] = if a == b { a } else { FEATURE_VALUES - a - b };
            i += 1;
        }
        Card { features }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.features;
        write!(f, "({}, {}, {}, {})", a, b, c, d)
    }
}

const fn build_deck() -> [Card; DECK_SIZE] {
    let mut deck = [Card { features: [0; 4] }; DECK_SIZE];
    let mut i = 0;
    while i < DECK_SIZE {
        deck[i] = Card {
            features: [
                (i / 27 % 3) as u8,
                (i / 9 % 3) as u8,
                (i / 3 % 3) as u8,
                (i % 3) as u8,
            ],
        };
        i += 1;
    }
    deck
}
