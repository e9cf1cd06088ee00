//! Card-domain library for the flat-bet blackjack simulator. Provides the deck,
//! card and hand-value primitives that the simulation crate drives.

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use hand::{hand_value, Hand};
