//! Game configuration.
//!
//! All configuration is fixed at construction and holds for the game's
//! lifetime. `GameConfig` carries the table knobs (deck count, jokers) and
//! the two policies that change how a player behaves when their piles run
//! dry.

use serde::{Deserialize, Serialize};

use super::deck::Deck;

/// Turn cap used when none is configured. Bounds the rare configurations
/// that cycle without ever resolving.
pub const DEFAULT_MAX_TURNS: u64 = 1_000_000;

/// What happens when a player cannot complete a required draw mid-war.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutOfCardsPolicy {
    /// The player's last successfully played card stands in for the missing
    /// draw and they stay in the game.
    Mercy,
    /// The player is eliminated on the spot and contributes nothing.
    #[default]
    NoMercy,
}

/// Complete configuration for one game of War.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub num_players: usize,

    /// Number of 52-card sets in the deck (at least 1).
    pub num_decks: usize,

    /// Shuffle the discard pile as it is recycled back into the hand.
    pub shuffle_on_recycle: bool,

    /// Add one joker (rank 15) per deck.
    pub jokers: bool,

    /// Mid-war out-of-cards policy, applied uniformly to every player.
    pub out_of_cards: OutOfCardsPolicy,

    /// Turn count at which an unresolved game is called a tie.
    pub max_turns: u64,

    /// Emit a per-turn trace of pile sizes through the `log` facade.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 2,
            num_decks: 1,
            shuffle_on_recycle: false,
            jokers: false,
            out_of_cards: OutOfCardsPolicy::default(),
            max_turns: DEFAULT_MAX_TURNS,
            verbose: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults for the given player count.
    #[must_use]
    pub fn new(num_players: usize) -> Self {
        let config = Self {
            num_players,
            ..Self::default()
        };
        config.validate();
        config
    }

    /// Set the number of 52-card sets.
    #[must_use]
    pub fn with_decks(mut self, num_decks: usize) -> Self {
        assert!(num_decks >= 1, "Must have at least 1 deck");
        self.num_decks = num_decks;
        self
    }

    /// Shuffle the discard pile whenever it is recycled.
    #[must_use]
    pub fn with_recycle_shuffle(mut self) -> Self {
        self.shuffle_on_recycle = true;
        self
    }

    /// Add one joker per deck.
    #[must_use]
    pub fn with_jokers(mut self) -> Self {
        self.jokers = true;
        self
    }

    /// Set the mid-war out-of-cards policy.
    #[must_use]
    pub fn with_policy(mut self, policy: OutOfCardsPolicy) -> Self {
        self.out_of_cards = policy;
        self
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u64) -> Self {
        assert!(max_turns > 0, "Turn cap must be positive");
        self.max_turns = max_turns;
        self
    }

    /// Enable the per-turn trace.
    #[must_use]
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Assert the numeric bounds. Called by the engine at construction.
    pub fn validate(&self) {
        assert!(self.num_players >= 2, "Must have at least 2 players");
        assert!(self.num_players <= 255, "At most 255 players supported");
        assert!(self.num_decks >= 1, "Must have at least 1 deck");
        assert!(self.max_turns > 0, "Turn cap must be positive");
    }

    /// Total cards dealt at game start.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        Deck::size_of(self.num_decks, self.jokers)
    }

    /// Cap on consecutive war rounds before the game is declared broken.
    #[must_use]
    pub const fn war_round_limit(&self) -> u64 {
        (self.num_decks * 52 + 2) as u64
    }
}
