//! Module that repeats the bankroll simulation across independent generations.
//! Generations share nothing, so they are fanned out over worker threads, each
//! with its own deck and randomness stream, and reduced afterwards in the
//! controlling thread.

use crate::bankroll::{BankrollSimulator, GenerationResult, OutcomeTally};
use crate::{GenerationConfig, SimulationError};
use serde::Serialize;
use std::sync::mpsc;
use std::thread;

/// The outcome of a whole run: every generation's result in submission order,
/// plus the indices of the best and worst trajectories.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSet {
    results: Vec<GenerationResult>,
    best: usize,
    worst: usize,
}

impl GenerationSet {
    pub fn results(&self) -> &[GenerationResult] {
        &self.results
    }

    /// Method that returns the generation with the highest final bankroll.
    pub fn best(&self) -> &GenerationResult {
        &self.results[self.best]
    }

    /// Method that returns the generation with the lowest final bankroll.
    pub fn worst(&self) -> &GenerationResult {
        &self.results[self.worst]
    }

    pub fn best_index(&self) -> usize {
        self.best
    }

    pub fn worst_index(&self) -> usize {
        self.worst
    }

    /// Method that folds every generation's tally into one aggregate count.
    pub fn aggregate_tally(&self) -> OutcomeTally {
        let mut aggregate = OutcomeTally::new();
        for result in &self.results {
            aggregate.merge(&result.tally);
        }
        aggregate
    }
}

/// Pure fold that picks the best and worst generation indices. Best is the
/// highest final bankroll, ties going to the generation that played more
/// rounds; worst is the lowest final bankroll, ties going to the one that
/// played fewer. Returns `None` only for an empty slice.
pub fn select_extremes(results: &[GenerationResult]) -> Option<(usize, usize)> {
    results
        .iter()
        .enumerate()
        .fold(None, |extremes, (index, result)| {
            let (mut best, mut worst) = match extremes {
                None => return Some((index, index)),
                Some(pair) => pair,
            };
            let current_best = &results[best];
            if result.final_bankroll > current_best.final_bankroll
                || (result.final_bankroll == current_best.final_bankroll
                    && result.rounds_played > current_best.rounds_played)
            {
                best = index;
            }
            let current_worst = &results[worst];
            if result.final_bankroll < current_worst.final_bankroll
                || (result.final_bankroll == current_worst.final_bankroll
                    && result.rounds_played < current_worst.rounds_played)
            {
                worst = index;
            }
            Some((best, worst))
        })
}

/// Struct that runs the configured number of generations and reduces the
/// results. Each generation gets a fresh simulator; nothing carries over
/// between them.
pub struct GenerationRunner {
    config: GenerationConfig,
}

impl GenerationRunner {
    /// Associated function that validates `config` and wraps it in a runner.
    pub fn new(config: GenerationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(GenerationRunner { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Method that runs all generations, striped across worker threads, and
    /// collects their results through a channel into the controlling thread
    /// where the best/worst reduction happens.
    pub fn run(&self) -> Result<GenerationSet, SimulationError> {
        let n = self.config.n_generations as usize;
        let workers = thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1)
            .min(n);

        // Without a pinned seed each run still derives its per-generation seeds
        // from one random base, so generations never share a shuffle stream.
        let base_seed = self.config.seed.unwrap_or_else(rand::random);

        let (sender, receiver) = mpsc::channel();
        let mut handles = Vec::with_capacity(workers);

        for worker in 0..workers {
            let sender = sender.clone();
            let config = self.config;
            let handle = thread::spawn(move || {
                let mut index = worker;
                while index < n {
                    let mut simulator =
                        BankrollSimulator::from_seed(base_seed.wrapping_add(index as u64));
                    let outcome = simulator
                        .run(config.n_hands_per_generation, config.initial_bankroll);
                    if sender.send((index, outcome)).is_err() {
                        // Receiver is gone, the run was abandoned
                        break;
                    }
                    index += workers;
                }
            });
            handles.push(handle);
        }
        drop(sender);

        let mut slots: Vec<Option<GenerationResult>> = (0..n).map(|_| None).collect();
        for (index, outcome) in receiver {
            slots[index] = Some(outcome?);
        }

        for handle in handles {
            handle
                .join()
                .map_err(|_| SimulationError::Worker("generation worker panicked".to_string()))?;
        }

        let mut results = Vec::with_capacity(n);
        for slot in slots {
            results.push(slot.ok_or_else(|| {
                SimulationError::Worker("a generation result never arrived".to_string())
            })?);
        }

        // n >= 1 is guaranteed by config validation
        let (best, worst) = select_extremes(&results).ok_or_else(|| {
            SimulationError::InvalidConfiguration("no generations were run".to_string())
        })?;

        Ok(GenerationSet {
            results,
            best,
            worst,
        })
    }
}
