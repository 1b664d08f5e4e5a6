//! Card value type.
//!
//! A `Card` is an immutable (suit, rank) pair with a color derived from the
//! suit. Ranks run 1-13 for the four standard suits; jokers carry the fixed
//! rank 15 so they outrank every standard card.
//!
//! Comparisons during play are by rank only. `Card` deliberately does not
//! implement `Ord`: two cards of equal rank but different suits are unequal
//! values that still tie at the table, and the engine compares raw ranks
//! instead.

use serde::{Deserialize, Serialize};

/// Rank carried by every joker.
pub const JOKER_RANK: u8 = 15;

/// Highest standard rank (king).
pub const MAX_STANDARD_RANK: u8 = 13;

/// Card suit. `Joker` is its own suit so a joker needs no rank convention
/// beyond [`JOKER_RANK`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
    Joker,
}

impl Suit {
    /// The four standard suits, in deck build order.
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Color derived from the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Joker => Color::Colorless,
        }
    }
}

/// Card color, derived from the suit. Jokers are colorless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Colorless,
}

/// Immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Create a card from suit and rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Create a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, JOKER_RANK)
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The card's rank. This is the only field play comparisons look at.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The card's color, derived from its suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {:?} ({:?})", self.rank, self.suit, self.color())
    }
}
