//! Module that plays a single round of blackjack to completion under the fixed
//! policy: both the player and the dealer draw until reaching seventeen, then the
//! two final hands are compared.

use flatbet_lib::{Deck, GameError, Hand};

/// Both participants keep drawing while their hand is worth less than this.
pub const HIT_THRESHOLD: u32 = 17;

/// The result of a single round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win,
    Loss,
    Push,
}

/// Plays one round against the given deck and returns the final
/// (player, dealer) hands. The opening deal alternates player, dealer, player,
/// dealer; the player then draws to the threshold, the dealer after. No outcome
/// is computed here.
pub fn play(deck: &mut Deck) -> Result<(Hand, Hand), GameError> {
    let mut player_hand = Hand::new();
    let mut dealer_hand = Hand::new();

    player_hand.push(deck.draw()?);
    dealer_hand.push(deck.draw()?);
    player_hand.push(deck.draw()?);
    dealer_hand.push(deck.draw()?);

    while player_hand.value() < HIT_THRESHOLD {
        player_hand.push(deck.draw()?);
    }
    while dealer_hand.value() < HIT_THRESHOLD {
        dealer_hand.push(deck.draw()?);
    }

    Ok((player_hand, dealer_hand))
}

/// Determines the outcome of a finished round. A busted player always loses,
/// even when the dealer busts as well: the player's cards hit the table first,
/// so the dealer's hand is never consulted once the player is over 21.
pub fn determine_winner(player_hand: &Hand, dealer_hand: &Hand) -> RoundOutcome {
    let player_value = player_hand.value();
    let dealer_value = dealer_hand.value();

    if player_value > 21 {
        RoundOutcome::Loss
    } else if dealer_value > 21 || player_value > dealer_value {
        RoundOutcome::Win
    } else if player_value < dealer_value {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Push
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatbet_lib::{hand_value, Card, Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.push(Card::new(rank, Suit::Hearts));
        }
        hand
    }

    #[test]
    fn both_hands_reach_the_threshold() {
        for seed in 0..50 {
            let mut deck = Deck::from_seed(seed);
            let (player_hand, dealer_hand) = play(&mut deck).unwrap();
            assert!(player_hand.value() >= HIT_THRESHOLD);
            assert!(dealer_hand.value() >= HIT_THRESHOLD);
            assert!(player_hand.len() >= 2);
            assert!(dealer_hand.len() >= 2);
        }
    }

    #[test]
    fn drawing_stops_as_soon_as_the_threshold_is_met() {
        // Before the last drawn card each hand must still have been below 17.
        for seed in 0..50 {
            let mut deck = Deck::from_seed(seed);
            let (player_hand, dealer_hand) = play(&mut deck).unwrap();
            for hand in [&player_hand, &dealer_hand] {
                if hand.len() > 2 {
                    let before_last = &hand.cards()[..hand.len() - 1];
                    assert!(hand_value(before_last) < HIT_THRESHOLD);
                }
            }
        }
    }

    #[test]
    fn play_consumes_at_least_four_cards() {
        let mut deck = Deck::from_seed(3);
        let before = deck.remaining();
        let (player_hand, dealer_hand) = play(&mut deck).unwrap();
        let drawn = player_hand.len() + dealer_hand.len();
        assert!(drawn >= 4);
        assert_eq!(deck.remaining(), before - drawn);
    }

    #[test]
    fn busted_player_loses_even_when_dealer_busts_too() {
        // House rule: the player busts first, so 22 against 22 is a loss
        // rather than a push.
        let player_hand = hand_of(&[Rank::Ten, Rank::Nine, Rank::Three]);
        let dealer_hand = hand_of(&[Rank::Ten, Rank::Nine, Rank::Three]);
        assert_eq!(player_hand.value(), 22);
        assert_eq!(dealer_hand.value(), 22);
        assert_eq!(
            determine_winner(&player_hand, &dealer_hand),
            RoundOutcome::Loss
        );
    }

    #[test]
    fn standing_player_wins_when_dealer_busts() {
        let player_hand = hand_of(&[Rank::King, Rank::Queen]);
        let dealer_hand = hand_of(&[Rank::Ten, Rank::Nine, Rank::Three]);
        assert_eq!(
            determine_winner(&player_hand, &dealer_hand),
            RoundOutcome::Win
        );
    }

    #[test]
    fn higher_value_wins() {
        let player_hand = hand_of(&[Rank::Ten, Rank::Nine]);
        let dealer_hand = hand_of(&[Rank::King, Rank::Queen]);
        assert_eq!(
            determine_winner(&player_hand, &dealer_hand),
            RoundOutcome::Loss
        );
        assert_eq!(
            determine_winner(&dealer_hand, &player_hand),
            RoundOutcome::Win
        );
    }

    #[test]
    fn equal_values_push() {
        let player_hand = hand_of(&[Rank::Ten, Rank::Eight]);
        let dealer_hand = hand_of(&[Rank::Nine, Rank::Nine]);
        assert_eq!(
            determine_winner(&player_hand, &dealer_hand),
            RoundOutcome::Push
        );
    }
}
