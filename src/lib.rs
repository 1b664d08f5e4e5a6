//! # war-sim
//!
//! A simulation engine for the card game War, built for running large
//! batches of games and studying how long they take.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every source of randomness flows through a seeded
//!    RNG. A (config, seed) pair reproduces a game exactly; a
//!    (config, runs, seed) triple reproduces a whole batch.
//!
//! 2. **N-Player First**: turns, tie detection, and wars are defined over
//!    an arbitrary set of alive players. Nothing assumes 2 players.
//!
//! 3. **Errors Over Aborts**: a broken run (unresolvable war loop, draw
//!    protocol violation) returns an error value. A batch records the
//!    failure and keeps going.
//!
//! ## Architecture
//!
//! A game is one [`GameEngine`]: deal a shuffled [`Deck`] round-robin, then
//! loop turns. Each turn every alive [`Player`] flips a card; the unique
//! maximal rank takes the pot, a tied maximum starts a war among exactly
//! the tied players. Players who cannot draw are eliminated; the last one
//! standing wins, and a turn cap bounds games that never resolve.
//!
//! ## Modules
//!
//! - `core`: cards, decks, players, RNG, configuration, errors
//! - `engine`: the turn/war resolution state machine
//! - `sim`: parallel batch driver and summary statistics

pub mod core;
pub mod engine;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Deck, GameConfig, GameError, GameRng, OutOfCardsPolicy, Player, PlayerId, Suit,
    WarPlay, CARDS_PER_SET, DEFAULT_MAX_TURNS, JOKER_RANK, MAX_STANDARD_RANK,
};

pub use crate::engine::{GameEngine, GameOutcome, GameResult, TurnOutcome};

pub use crate::sim::{run_batch, run_one, BatchSummary};
