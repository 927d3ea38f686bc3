//! Shoe management and the reshuffle policy.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Remaining-card count below which the shoe is rebuilt before a draw.
pub const RESHUFFLE_THRESHOLD: usize = DECK_SIZE;

/// The drawable pool of cards, built from one or more standard decks.
///
/// Cards are drawn from the top of the stack (the end of the vector).
/// Whenever fewer than [`RESHUFFLE_THRESHOLD`] cards remain, the shoe is
/// replaced wholesale with a freshly shuffled set of decks before the next
/// draw; there is no discard pile to top up from.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards remaining, top of the stack at the end.
    pub cards: Vec<Card>,
    /// Number of decks a rebuilt shoe contains.
    num_decks: u8,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds and shuffles a shoe with the given number of decks.
    ///
    /// A deck count of zero is treated as one deck, so a rebuilt shoe always
    /// holds at least [`DECK_SIZE`] cards.
    #[must_use]
    pub fn new(num_decks: u8, rng: ChaCha8Rng) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            num_decks: if num_decks == 0 { 1 } else { num_decks },
            rng,
        };
        shoe.rebuild();
        shoe
    }

    /// Returns the number of decks a full shoe contains.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replaces the shoe with a full, freshly shuffled set of decks.
    ///
    /// The shuffle is a uniform random permutation.
    pub fn rebuild(&mut self) {
        let mut cards = Vec::with_capacity(self.num_decks as usize * DECK_SIZE);

        for _ in 0..self.num_decks {
            for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(&mut self.rng);
        self.cards = cards;
    }

    /// Draws one card, rebuilding the shoe first if it has run low.
    ///
    /// This never fails: a shoe below [`RESHUFFLE_THRESHOLD`] (or somehow
    /// empty) is replaced before the draw.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a rebuilt shoe is never empty, so the expect cannot fire"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < RESHUFFLE_THRESHOLD {
            self.rebuild();
        }

        if let Some(card) = self.cards.pop() {
            card
        } else {
            self.rebuild();
            self.cards
                .pop()
                .expect("a rebuilt shoe holds at least one full deck")
        }
    }
}
