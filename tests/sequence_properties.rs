//! Property-based tests for card sequencing
//!
//! Generates card sets and seeds, then checks that shuffling only reorders
//! and that the position controls stay consistent with the set size.

use flashdeck::catalog::Flashcard;
use flashdeck::study::{CardSequence, shuffled_order};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

fn cards_strategy() -> impl Strategy<Value = Vec<Flashcard>> {
    prop::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}"), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(q, a)| Flashcard::new(q, a))
            .collect()
    })
}

fn sorted(cards: impl Iterator<Item = Flashcard>) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = cards.map(|c| (c.question, c.answer)).collect();
    pairs.sort();
    pairs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn shuffled_order_is_a_permutation(len in 0usize..200, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order = shuffled_order(len, &mut rng);

        prop_assert_eq!(order.len(), len);
        order.sort_unstable();
        prop_assert_eq!(order, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn randomize_keeps_the_same_cards(cards in cards_strategy(), seed in any::<u64>()) {
        let mut sequence = CardSequence::seeded(seed);
        sequence.load(cards.clone());
        sequence.set_randomize(true);

        prop_assert_eq!(sequence.original_order(), cards.as_slice());
        prop_assert_eq!(
            sorted(sequence.active_order().cloned()),
            sorted(cards.into_iter())
        );
        prop_assert_eq!(sequence.index(), (!sequence.is_empty()).then_some(0));
    }

    #[test]
    fn next_reaches_the_end_after_len_minus_one_steps(
        cards in cards_strategy(),
        seed in any::<u64>(),
    ) {
        prop_assume!(!cards.is_empty());
        let len = cards.len();
        let mut sequence = CardSequence::seeded(seed);
        sequence.set_randomize(true);
        sequence.load(cards);

        prop_assert!(sequence.previous_disabled());
        for _ in 1..len {
            prop_assert!(!sequence.next_disabled());
            prop_assert!(sequence.next());
        }

        prop_assert!(sequence.next_disabled());
        prop_assert!(!sequence.next());
        prop_assert_eq!(sequence.index(), Some(len - 1));
    }

    #[test]
    fn previous_walks_back_to_the_start_after_reaching_the_end(
        cards in cards_strategy(),
        seed in any::<u64>(),
        randomize in any::<bool>(),
    ) {
        prop_assume!(!cards.is_empty());
        let len = cards.len();
        let mut sequence = CardSequence::seeded(seed);
        sequence.set_randomize(randomize);
        sequence.load(cards);

        for _ in 1..len {
            prop_assert!(sequence.next());
        }
        prop_assert_eq!(sequence.index(), Some(len - 1));

        for step in 1..len {
            prop_assert!(!sequence.previous_disabled());
            sequence.flip();
            prop_assert!(sequence.previous());
            prop_assert!(!sequence.is_flipped());
            prop_assert_eq!(sequence.index(), Some(len - 1 - step));
        }

        prop_assert_eq!(sequence.index(), Some(0));
        prop_assert!(sequence.previous_disabled());
        prop_assert!(!sequence.previous());
        prop_assert_eq!(sequence.index(), Some(0));
    }

    #[test]
    fn randomize_off_restores_original_order(cards in cards_strategy(), seed in any::<u64>()) {
        let mut sequence = CardSequence::seeded(seed);
        sequence.load(cards.clone());
        sequence.set_randomize(true);
        sequence.next();
        sequence.set_randomize(false);

        let active: Vec<_> = sequence.active_order().cloned().collect();
        prop_assert_eq!(active, cards);
        prop_assert!(!sequence.is_flipped());
    }
}

#[test]
fn empty_sequence_disables_both_controls() {
    let mut sequence = CardSequence::seeded(1);
    sequence.load(Vec::new());

    assert!(sequence.next_disabled());
    assert!(sequence.previous_disabled());
    assert!(sequence.current_card().is_none());
    assert!(!sequence.flip());
}

#[test]
fn shuffled_order_is_uniform_over_three_cards() {
    const DRAWS: usize = 60_000;
    // Six orders, so 10 000 expected each; the standard deviation is about 91.
    const TOLERANCE: usize = 500;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(shuffled_order(3, &mut rng)).or_default() += 1;
    }

    assert_eq!(counts.len(), 6, "every order must occur: {counts:?}");
    let expected = DRAWS / 6;
    for (order, count) in &counts {
        assert!(
            count.abs_diff(expected) <= TOLERANCE,
            "order {order:?} drawn {count} times, expected about {expected}"
        );
    }
}
