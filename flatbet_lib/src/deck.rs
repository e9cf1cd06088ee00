use crate::card::{Card, Rank, Suit};
use crate::error::GameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A single shuffled 52-card deck. The deck owns its rng so that `reset` can
/// reshuffle in place without the caller threading randomness through every call.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// Associated function for creating a freshly shuffled deck seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Associated function for creating a deck with a fixed seed. Two decks built
    /// from the same seed draw identical card sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Associated function for creating a deck that shuffles with the given rng.
    pub fn with_rng(rng: StdRng) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(52),
            rng,
        };
        deck.reset();
        deck
    }

    /// Method that discards whatever cards remain and rebuilds a full, freshly
    /// shuffled 52-card deck in place.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Method that removes and returns the top card of the deck.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Method that returns the number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}
