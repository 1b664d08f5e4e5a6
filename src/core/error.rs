//! Error types for game flow.
//!
//! Every anomaly a game can hit is an explicit `Err` value handed back to the
//! caller, never a process abort. A batch driver running thousands of games
//! records a failed run and keeps going.

use thiserror::Error;

use super::player::PlayerId;

/// Errors surfaced by players and the engine.
///
/// `OutOfCards` is routine game flow: the engine answers it by eliminating
/// the player. The other two indicate a broken run and terminate that game
/// with a distinguishable failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A draw found both hand and discard empty. Recoverable at the player
    /// level via recycle; terminal for the player at the engine level.
    #[error("{0} has no cards left to draw")]
    OutOfCards(PlayerId),

    /// Recycle was requested while the hand still held cards. The engine
    /// never does this; hitting it means a caller broke the draw protocol.
    #[error("recycle requested for {player} while the hand still holds {hand_size} cards")]
    ProtocolViolation { player: PlayerId, hand_size: usize },

    /// A war ran past the round cap without resolving.
    #[error("war between {contenders} players exceeded {limit} rounds without resolving")]
    UnresolvableWarLoop { contenders: usize, limit: u64 },
}
