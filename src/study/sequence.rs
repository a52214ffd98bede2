//! Card sequencing
//!
//! Holds a loaded flashcard set in its original order together with the
//! active display order, the current position and the flip state.
//!
//! The active order is a permutation of indices into the original cards, so
//! both orders always contain the same cards and shuffling never touches the
//! original list.

use crate::catalog::Flashcard;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Uniformly random permutation of `0..len` (Fisher–Yates)
pub fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Original and active order of a flashcard set plus the current position
#[derive(Debug, Clone)]
pub struct CardSequence<R = StdRng> {
    cards: Vec<Flashcard>,
    order: Vec<usize>,
    index: usize,
    randomize: bool,
    flipped: bool,
    rng: R,
}

impl CardSequence<StdRng> {
    /// Create an empty sequence seeded from the OS
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty sequence with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CardSequence<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CardSequence<R> {
    /// Create an empty sequence drawing shuffles from `rng`
    pub const fn with_rng(rng: R) -> Self {
        Self {
            cards: Vec::new(),
            order: Vec::new(),
            index: 0,
            randomize: false,
            flipped: false,
            rng,
        }
    }

    /// Replace the loaded set
    ///
    /// The active order is shuffled when randomize is on. The position
    /// returns to the first card, front side up.
    pub fn load(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
        self.rebuild_order();
    }

    /// Drop the loaded set and turn randomize off
    pub fn reset(&mut self) {
        self.cards.clear();
        self.order.clear();
        self.index = 0;
        self.randomize = false;
        self.flipped = false;
    }

    /// Turn randomized ordering on or off
    ///
    /// With a set loaded this reshuffles (or restores the original order)
    /// and returns to the first card. The flag alone is kept otherwise, and
    /// applies to the next [`load`](Self::load).
    pub fn set_randomize(&mut self, on: bool) {
        self.randomize = on;
        if !self.cards.is_empty() {
            self.rebuild_order();
        }
    }

    #[must_use]
    pub const fn is_randomized(&self) -> bool {
        self.randomize
    }

    /// Advance one card; returns whether the position changed
    pub fn next(&mut self) -> bool {
        if self.next_disabled() {
            return false;
        }
        self.index += 1;
        self.flipped = false;
        true
    }

    /// Go back one card; returns whether the position changed
    pub fn previous(&mut self) -> bool {
        if self.previous_disabled() {
            return false;
        }
        self.index -= 1;
        self.flipped = false;
        true
    }

    /// Whether `next` would be a no-op
    #[must_use]
    pub fn next_disabled(&self) -> bool {
        self.order.is_empty() || self.index + 1 == self.order.len()
    }

    /// Whether `previous` would be a no-op
    #[must_use]
    pub fn previous_disabled(&self) -> bool {
        self.order.is_empty() || self.index == 0
    }

    /// Card at the current position
    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.order.get(self.index).map(|&i| &self.cards[i])
    }

    /// Current position, if a set is loaded
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (!self.order.is_empty()).then_some(self.index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Toggle between question and answer; returns the new flip state
    pub fn flip(&mut self) -> bool {
        if !self.order.is_empty() {
            self.flipped = !self.flipped;
        }
        self.flipped
    }

    /// Whether the current card shows its answer side
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Cards as loaded
    #[must_use]
    pub fn original_order(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Cards in display order
    pub fn active_order(&self) -> impl Iterator<Item = &Flashcard> + '_ {
        self.order.iter().map(|&i| &self.cards[i])
    }

    fn rebuild_order(&mut self) {
        self.order = if self.randomize {
            shuffled_order(self.cards.len(), &mut self.rng)
        } else {
            (0..self.cards.len()).collect()
        };
        self.index = 0;
        self.flipped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Flashcard> {
        (1..=n)
            .map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}")))
            .collect()
    }

    fn questions(seq: &CardSequence) -> Vec<String> {
        seq.active_order().map(|c| c.question.clone()).collect()
    }

    #[test]
    fn test_empty_sequence_navigation_is_noop() {
        let mut seq = CardSequence::seeded(1);

        assert!(!seq.next());
        assert!(!seq.previous());
        assert!(!seq.flip());
        assert!(seq.current_card().is_none());
        assert!(seq.index().is_none());
        assert!(seq.next_disabled());
        assert!(seq.previous_disabled());
    }

    #[test]
    fn test_load_starts_at_first_card() {
        let mut seq = CardSequence::seeded(1);
        seq.load(cards(3));

        assert_eq!(seq.index(), Some(0));
        assert_eq!(seq.current_card().unwrap().question, "Q1");
        assert!(seq.previous_disabled());
        assert!(!seq.next_disabled());
    }

    #[test]
    fn test_next_clamps_at_last_card() {
        let mut seq = CardSequence::seeded(1);
        seq.load(cards(3));

        assert!(seq.next());
        assert!(seq.next());
        assert_eq!(seq.index(), Some(2));
        assert!(seq.next_disabled());
        assert!(!seq.previous_disabled());

        assert!(!seq.next());
        assert_eq!(seq.index(), Some(2));
    }

    #[test]
    fn test_single_card_disables_both_directions() {
        let mut seq = CardSequence::seeded(1);
        seq.load(cards(1));

        assert!(seq.next_disabled());
        assert!(seq.previous_disabled());
    }

    #[test]
    fn test_flip_resets_on_move_and_load() {
        let mut seq = CardSequence::seeded(1);
        seq.load(cards(2));

        assert!(seq.flip());
        assert!(seq.is_flipped());
        seq.next();
        assert!(!seq.is_flipped());

        seq.flip();
        seq.load(cards(2));
        assert!(!seq.is_flipped());
    }

    #[test]
    fn test_randomize_off_restores_original_order() {
        let mut seq = CardSequence::seeded(7);
        seq.load(cards(10));
        seq.next();

        seq.set_randomize(true);
        assert_eq!(seq.index(), Some(0));
        seq.next();

        seq.set_randomize(false);
        assert_eq!(seq.index(), Some(0));
        assert_eq!(questions(&seq), questions_in_order(10));
    }

    fn questions_in_order(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Q{i}")).collect()
    }

    #[test]
    fn test_randomize_before_load_applies_on_load() {
        let mut seq = CardSequence::seeded(3);
        seq.set_randomize(true);
        assert!(seq.is_empty());

        seq.load(cards(20));
        assert!(seq.is_randomized());
        let mut sorted = questions(&seq);
        sorted.sort();
        let mut expected = questions_in_order(20);
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_shuffle_keeps_original_untouched() {
        let mut seq = CardSequence::seeded(11);
        seq.load(cards(5));
        seq.set_randomize(true);

        let original: Vec<_> = seq.original_order().iter().map(|c| c.question.clone()).collect();
        assert_eq!(original, questions_in_order(5));
    }

    #[test]
    fn test_reset_clears_cards_and_randomize() {
        let mut seq = CardSequence::seeded(1);
        seq.set_randomize(true);
        seq.load(cards(4));
        seq.next();
        seq.flip();

        seq.reset();

        assert!(seq.is_empty());
        assert!(!seq.is_randomized());
        assert!(!seq.is_flipped());
        assert!(seq.original_order().is_empty());
    }

    #[test]
    fn test_shuffled_order_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut order = shuffled_order(50, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..50).collect::<Vec<_>>());
    }
}
