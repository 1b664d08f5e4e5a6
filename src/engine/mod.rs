//! The turn/war resolution engine.
//!
//! One [`GameEngine`] drives exactly one game:
//! deal, then turn after turn of draw → tie check → (war)* → elimination
//! check, until a single survivor remains or the turn cap calls it a tie.

pub mod game;

pub use game::{GameEngine, GameOutcome, GameResult, TurnOutcome};
