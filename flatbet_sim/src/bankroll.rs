//! Module that drives repeated rounds against a persistent bankroll, applying
//! the flat-fraction stake, the deck replenishment rule and the stop conditions.

use crate::round::{self, RoundOutcome};
use flatbet_lib::{Deck, GameError};
use serde::Serialize;

/// Fraction of the current bankroll staked on every round.
pub const BET_FRACTION: f64 = 0.02;
/// A generation stops before playing a round whose stake would be at or below
/// this floor.
pub const MIN_BET: f64 = 10.0;
/// The deck is rebuilt and reshuffled before a round when fewer than this many
/// cards remain.
pub const REPLENISH_THRESHOLD: usize = 20;

/// Per-outcome round counters for one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeTally {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
}

impl OutcomeTally {
    pub fn new() -> Self {
        OutcomeTally::default()
    }

    /// Method that bumps the counter matching `outcome`.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Loss => self.losses += 1,
            RoundOutcome::Push => self.pushes += 1,
        }
    }

    /// Method that folds another tally into this one, used when aggregating
    /// across generations.
    pub fn merge(&mut self, other: &OutcomeTally) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.pushes += other.pushes;
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }
}

/// Everything one simulation run produces: the final bankroll, the bankroll
/// after every completed round (starting with the initial value), the outcome
/// tally and the number of rounds actually played. Immutable once returned.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub final_bankroll: f64,
    pub history: Vec<f64>,
    pub tally: OutcomeTally,
    pub rounds_played: u32,
}

/// Struct that simulates a single generation of play. Owns the deck for the
/// duration of the run so the replenishment rule can rebuild it in place.
pub struct BankrollSimulator {
    deck: Deck,
}

impl BankrollSimulator {
    /// Associated function for creating a simulator with an entropy-seeded deck.
    pub fn new() -> Self {
        BankrollSimulator { deck: Deck::new() }
    }

    /// Associated function for creating a simulator whose deck shuffles
    /// deterministically from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        BankrollSimulator {
            deck: Deck::from_seed(seed),
        }
    }

    /// Method that plays up to `n_rounds` rounds against `initial_bankroll`,
    /// staking 2% of the current bankroll each round. The run ends early, as a
    /// normal stop rather than an error, when the stake falls to the floor or
    /// the bankroll is exhausted.
    pub fn run(
        &mut self,
        n_rounds: u32,
        initial_bankroll: f64,
    ) -> Result<GenerationResult, GameError> {
        self.deck.reset();

        let mut bankroll = initial_bankroll;
        let mut history = vec![initial_bankroll];
        let mut tally = OutcomeTally::new();
        let mut rounds_played = 0u32;

        for _ in 0..n_rounds {
            let bet = bankroll * BET_FRACTION;
            if bet <= MIN_BET {
                break;
            }

            if self.deck.remaining() < REPLENISH_THRESHOLD {
                self.deck.reset();
            }

            let (player_hand, dealer_hand) = round::play(&mut self.deck)?;
            let outcome = round::determine_winner(&player_hand, &dealer_hand);
            tally.record(outcome);

            match outcome {
                RoundOutcome::Win => bankroll += bet,
                RoundOutcome::Loss => bankroll -= bet,
                RoundOutcome::Push => {}
            }

            history.push(bankroll);
            rounds_played += 1;

            if bankroll <= 0.0 {
                break;
            }
        }

        Ok(GenerationResult {
            final_bankroll: bankroll,
            history,
            tally,
            rounds_played,
        })
    }
}

impl Default for BankrollSimulator {
    fn default() -> Self {
        BankrollSimulator::new()
    }
}
