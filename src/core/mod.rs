//! Core types: cards, decks, players, RNG, configuration, errors.
//!
//! Everything here is engine-agnostic value machinery; the turn/war state
//! machine that drives it lives in [`crate::engine`].

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod player;
pub mod rng;

pub use card::{Card, Color, Suit, JOKER_RANK, MAX_STANDARD_RANK};
pub use config::{GameConfig, OutOfCardsPolicy, DEFAULT_MAX_TURNS};
pub use deck::{Deck, CARDS_PER_SET};
pub use error::GameError;
pub use player::{Player, PlayerId, WarPlay};
pub use rng::GameRng;
