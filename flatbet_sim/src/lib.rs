//! Simulation engine for repeated generations of flat-bet blackjack. Each
//! generation plays rounds under a fixed policy against a 2%-of-bankroll stake
//! until the round budget, the stake floor or the bankroll runs out; the runner
//! repeats that experiment independently and picks out the best and worst
//! trajectories for the reporting layer.

pub mod bankroll;
pub mod generation;
pub mod report;
pub mod round;

use flatbet_lib::GameError;
use std::error::Error;
use std::fmt::Display;

pub mod prelude {
    pub use super::bankroll::{BankrollSimulator, GenerationResult, OutcomeTally};
    pub use super::generation::{GenerationRunner, GenerationSet};
    pub use super::round::RoundOutcome;
    pub use super::{GenerationConfig, GenerationConfigBuilder, SimulationError};
}

#[derive(Debug)]
pub enum SimulationError {
    /// A deck-level failure surfaced by the engine. Fatal; the run that hit it
    /// is abandoned.
    Game(GameError),
    /// The supplied configuration was rejected before any simulation started.
    InvalidConfiguration(String),
    /// A generation worker panicked or its result never arrived.
    Worker(String),
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::Game(e) => write!(f, "{}", e),
            SimulationError::InvalidConfiguration(s) | SimulationError::Worker(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl Error for SimulationError {}

impl From<GameError> for SimulationError {
    fn from(value: GameError) -> Self {
        SimulationError::Game(value)
    }
}

/// Struct for configuring a generation run: how many independent generations to
/// simulate, the round budget and starting bankroll of each, and an optional
/// base seed for reproducible shuffles.
#[derive(Debug, Clone, Copy)]
pub struct GenerationConfig {
    pub n_generations: u32,
    pub n_hands_per_generation: u32,
    pub initial_bankroll: f64,
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Associated method for returning a new `GenerationConfigBuilder` object.
    pub fn new() -> GenerationConfigBuilder {
        GenerationConfigBuilder {
            n_generations: None,
            n_hands_per_generation: None,
            initial_bankroll: None,
            seed: None,
        }
    }

    /// Method that rejects non-positive configuration values before any
    /// simulation starts.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.n_generations == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "n_generations must be positive".to_string(),
            ));
        }
        if self.n_hands_per_generation == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "n_hands_per_generation must be positive".to_string(),
            ));
        }
        if !(self.initial_bankroll > 0.0) {
            return Err(SimulationError::InvalidConfiguration(
                "initial_bankroll must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig::new().build()
    }
}

/// Struct to implement the builder pattern for `GenerationConfig`.
#[derive(Debug, Clone, Copy)]
pub struct GenerationConfigBuilder {
    n_generations: Option<u32>,
    n_hands_per_generation: Option<u32>,
    initial_bankroll: Option<f64>,
    seed: Option<u64>,
}

impl GenerationConfigBuilder {
    /// Method for setting the number of independent generations to run.
    pub fn n_generations(&mut self, n: u32) -> &mut Self {
        self.n_generations = Some(n);
        self
    }

    /// Method for setting the maximum number of rounds attempted per generation.
    pub fn n_hands_per_generation(&mut self, hands: u32) -> &mut Self {
        self.n_hands_per_generation = Some(hands);
        self
    }

    /// Method for setting the starting bankroll of every generation.
    pub fn initial_bankroll(&mut self, bankroll: f64) -> &mut Self {
        self.initial_bankroll = Some(bankroll);
        self
    }

    /// Method for pinning the base seed. Generation `i` shuffles with
    /// `seed + i`, so a pinned seed reproduces every trajectory exactly.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for building a `GenerationConfig` from the given builder, filling
    /// unset fields with the standard run parameters.
    pub fn build(&mut self) -> GenerationConfig {
        GenerationConfig {
            n_generations: self.n_generations.unwrap_or(100),
            n_hands_per_generation: self.n_hands_per_generation.unwrap_or(10_000),
            initial_bankroll: self.initial_bankroll.unwrap_or(1000.0),
            seed: self.seed,
        }
    }
}
