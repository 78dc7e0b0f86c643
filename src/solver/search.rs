//! Exhaustive flight search.
//!
//! The feature space is the affine space AG(4, 3), and flights are its
//! lines: any two distinct cards lie on exactly one line, and the third
//! point is the feature-wise [completion](crate::Card::completion). So
//! instead of scanning all O(n³) triples, scan the O(n²) unordered pairs,
//! complete each one, and look the completion up on the board by card
//! value — cards are not placed in catalog order, so no index arithmetic
//! can replace the lookup.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::flight::Flight;
use crate::cards::Card;

/// Compute every flight on the board, as canonical sorted triples.
///
/// Each true flight is reached once per constituent pair, i.e. three
/// times; the set representation collapses the copies. The completion of a
/// pair can only equal one of the pair's own cards if the two cards were
/// equal, which a duplicate-free board rules out.
#[must_use]
pub fn solve(cards: &[Card]) -> BTreeSet<Flight> {
    let positions: FxHashMap<Card, usize> = cards
        .iter()
        .enumerate()
        .map(|(index, &card)| (card, index))
        .collect();

    let mut flights = BTreeSet::new();
    for (a, &card_a) in cards.iter().enumerate() {
        for (b, &card_b) in cards.iter().enumerate().skip(a + 1) {
            if let Some(&c) = positions.get(&card_a.completion(card_b)) {
                if c != a && c != b {
                    flights.insert(Flight::new(a, b, c));
                }
            }
        }
    }
    flights
}
