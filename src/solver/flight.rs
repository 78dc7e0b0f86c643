//! Canonical flight representation.

use serde::{Deserialize, Serialize};

/// A flight: three distinct board positions whose cards are, feature by
/// feature, either all equal or pairwise distinct.
///
/// Stored as a sorted index triple so that the same flight submitted in any
/// order compares and hashes identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Flight([usize; 3]);

impl Flight {
    /// Canonicalize an index triple by sorting it.
    ///
    /// The indices must be distinct; a "flight" with a repeated position is
    /// meaningless. Callers working from raw player input should route it
    /// through [`Round::submit_answer`](crate::Round::submit_answer), which
    /// treats degenerate triples as wrong answers instead.
    #[must_use]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut indices = [a, b, c];
        indices.sort_unstable();
        Self(indices)
    }

    /// The sorted index triple.
    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Whether every index is a valid position on a board of `board_size`
    /// cards.
    #[must_use]
    pub fn in_bounds(self, board_size: usize) -> bool {
        self.0.iter().all(|&i| i < board_size)
    }

    /// Whether the three indices are pairwise distinct.
    #[must_use]
    pub const fn is_distinct(self) -> bool {
        // Sorted on construction, so adjacent comparison suffices
        self.0[0] != self.0[1] && self.0[1] != self.0[2]
    }
}

impl From<(usize, usize, usize)> for Flight {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<[usize; 3]> for Flight {
    fn from([a, b, c]: [usize; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl std::fmt::Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({}, {}, {})", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_canonicalizes_order() {
        assert_eq!(Flight::new(2, 0, 1), Flight::new(0, 1, 2));
        assert_eq!(Flight::new(2, 0, 1).indices(), [0, 1, 2]);
        assert_eq!(Flight::from((5, 3, 4)), Flight::from([3, 4, 5]));
    }

    #[test]
    fn test_flight_in_bounds() {
        let flight = Flight::new(0, 1, 11);
        assert!(flight.in_bounds(12));
        assert!(!flight.in_bounds(11));
    }

    #[test]
    fn test_flight_is_distinct() {
        assert!(Flight::new(0, 1, 2).is_distinct());
        assert!(!Flight::new(1, 1, 2).is_distinct());
        assert!(!Flight::new(2, 1, 2).is_distinct());
    }

    #[test]
    fn test_flight_display() {
        assert_eq!(format!("{}", Flight::new(7, 2, 5)), "(2, 5, 7)");
    }

    #[test]
    fn test_flight_ordering_is_lexicographic() {
        let mut flights = vec![Flight::new(3, 4, 5), Flight::new(0, 1, 2), Flight::new(0, 2, 3)];
        flights.sort();
        assert_eq!(
            flights,
            vec![Flight::new(0, 1, 2), Flight::new(0, 2, 3), Flight::new(3, 4, 5)]
        );
    }
}
