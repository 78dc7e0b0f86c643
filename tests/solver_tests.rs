//! Solver and generator property tests.
//!
//! The solver's pair-completion search is checked against an independent
//! brute-force scan of all triples, written straight from the flight rule:
//! every feature all-equal or all-distinct.

use std::collections::BTreeSet;

use duckgoose::{solve, Board, Card, Flight, GameRng, DECK};
use proptest::prelude::*;

/// The flight rule, straight from the game's definition.
fn is_flight(a: Card, b: Card, c: Card) -> bool {
    (0..4).all(|i| {
        let (x, y, z) = (a.feature(i), b.feature(i), c.feature(i));
        (x == y && y == z) || (x != y && y != z && x != z)
    })
}

/// Independent O(n³) reference: test every triple.
fn brute_force(cards: &[Card]) -> BTreeSet<Flight> {
    let mut flights = BTreeSet::new();
    for a in 0..cards.len() {
        for b in (a + 1)..cards.len() {
            for c in (b + 1)..cards.len() {
                if is_flight(cards[a], cards[b], cards[c]) {
                    flights.insert(Flight::new(a, b, c));
                }
            }
        }
    }
    flights
}

/// Random 12-card boards in random position order.
fn board_cards() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(DECK.to_vec(), 12).prop_shuffle()
}

proptest! {
    #[test]
    fn solver_matches_brute_force(cards in board_cards()) {
        prop_assert_eq!(solve(&cards), brute_force(&cards));
    }

    #[test]
    fn every_solution_satisfies_the_flight_rule(cards in board_cards()) {
        for flight in solve(&cards) {
            let [a, b, c] = flight.indices();
            prop_assert!(a < b && b < c, "triple {} not canonical", flight);
            prop_assert!(
                is_flight(cards[a], cards[b], cards[c]),
                "triple {} breaks the flight rule",
                flight
            );
        }
    }

    #[test]
    fn solutions_follow_cards_not_positions(
        (cards, perm) in (board_cards(), Just((0..12usize).collect::<Vec<_>>()).prop_shuffle())
    ) {
        // Rearrange the same cards; flights must be the same triples of
        // cards, relabeled to their new positions.
        let shuffled: Vec<Card> = perm.iter().map(|&i| cards[i]).collect();

        // inverse[j] = new position of the card at old position j
        let mut inverse = vec![0usize; perm.len()];
        for (new_pos, &old_pos) in perm.iter().enumerate() {
            inverse[old_pos] = new_pos;
        }

        let relabeled: BTreeSet<Flight> = solve(&cards)
            .into_iter()
            .map(|flight| {
                let [a, b, c] = flight.indices();
                Flight::new(inverse[a], inverse[b], inverse[c])
            })
            .collect();

        prop_assert_eq!(solve(&shuffled), relabeled);
    }

    #[test]
    fn generator_respects_minimum(seed in any::<u64>(), minimum in 0usize..5) {
        let mut rng = GameRng::new(seed);
        let board = Board::generate(4, 3, minimum, &mut rng).unwrap();
        prop_assert!(board.solutions().len() >= minimum);
        prop_assert_eq!(board.len(), 12);
    }
}

#[test]
fn test_brute_force_agrees_on_engineered_board() {
    // The fixture used across the round tests: exactly two disjoint
    // flights, at positions (0,1,2) and (3,4,5)
    let cards = vec![
        Card::new([0, 0, 2, 1]),
        Card::new([1, 2, 1, 1]),
        Card::new([2, 1, 0, 1]),
        Card::new([1, 1, 2, 2]),
        Card::new([2, 1, 2, 0]),
        Card::new([0, 1, 2, 1]),
        Card::new([0, 2, 2, 0]),
        Card::new([0, 1, 0, 2]),
        Card::new([2, 2, 1, 2]),
        Card::new([1, 2, 1, 0]),
        Card::new([2, 0, 2, 2]),
        Card::new([0, 1, 2, 0]),
    ];
    let expected = BTreeSet::from([Flight::new(0, 1, 2), Flight::new(3, 4, 5)]);
    assert_eq!(brute_force(&cards), expected);
    assert_eq!(solve(&cards), expected);
}
