use crate::card::{Card, Rank};
use serde::{Deserialize, Serialize};

/// Computes the blackjack value of a set of cards. Aces count eleven
/// provisionally; while the total exceeds 21 and a softenable ace remains, ten
/// is knocked off per ace. The result can still exceed 21 once every ace has
/// been softened, which is a bust. An empty slice values to zero.
pub fn hand_value(cards: &[Card]) -> u32 {
    let mut total = 0;
    let mut aces = 0;
    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total += card.rank.face_value();
    }
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    total
}

/// The cards dealt to one participant during a single round. Created empty,
/// grows by appended draws and is discarded when the round ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Associated function for creating a new empty hand.
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    /// Method for appending a drawn card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Method that computes the hand's blackjack value. The value is derived on
    /// demand, never stored.
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Method that reports whether the hand has busted.
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.push(Card::new(rank, Suit::Clubs));
        }
        hand
    }

    #[test]
    fn empty_hand_values_to_zero() {
        assert_eq!(Hand::new().value(), 0);
    }

    #[test]
    fn pair_of_aces_softens_to_twelve() {
        assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
    }

    #[test]
    fn king_and_ace_is_twenty_one() {
        assert_eq!(hand_of(&[Rank::King, Rank::Ace]).value(), 21);
    }

    #[test]
    fn bust_without_aces_stays_busted() {
        let hand = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
        assert_eq!(hand.value(), 24);
        assert!(hand.is_bust());
    }

    #[test]
    fn value_only_exceeds_21_when_no_softening_remains() {
        // Four aces and an eight: 11+11+11+11+8 = 52, softened down to 12.
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight]);
        assert_eq!(hand.value(), 12);

        // Ace plus face cards: only one softening available, still a bust.
        let hand = hand_of(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert_eq!(hand.value(), 31);
        assert!(hand.is_bust());
    }
}
