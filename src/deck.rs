//! The 52-card deck and where fresh decks come from.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered pile of cards. Cards are drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the standard 52-card deck in canonical order.
    ///
    /// Suit-major (clubs, diamonds, hearts, spades), rank-minor (ace to king).
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// `draws[0]` is the first card drawn.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Returns a uniformly shuffled copy of this deck.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Cards left, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Supplies a fresh deck at the start of every round.
pub trait DeckSource {
    /// Returns the deck for the next round.
    fn fresh_deck(&mut self) -> Deck;
}

impl<D: DeckSource + ?Sized> DeckSource for &mut D {
    fn fresh_deck(&mut self) -> Deck {
        (**self).fresh_deck()
    }
}

/// Shuffles a new standard deck for every round using `R`.
#[derive(Debug, Clone)]
pub struct Shuffler<R> {
    rng: R,
}

impl<R: Rng> Shuffler<R> {
    /// Wraps a random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Shuffler<ChaCha8Rng> {
    /// Creates a deterministic shuffler from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DeckSource for Shuffler<R> {
    fn fresh_deck(&mut self) -> Deck {
        Deck::standard().shuffled(&mut self.rng)
    }
}
