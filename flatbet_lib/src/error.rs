use std::error::Error;
use std::fmt::Display;

/// Errors produced by the card-domain primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A draw was attempted from a deck with zero cards remaining. The
    /// replenishment rule in the simulation crate keeps this from happening,
    /// so hitting it means the deck was mismanaged and the run must stop.
    EmptyDeck,
}

impl Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::EmptyDeck => write!(f, "attempted to draw from an empty deck"),
        }
    }
}

impl Error for GameError {}
