//! Deck building, shuffling, and dealing.
//!
//! A `Deck` is built deterministically (suit-major, rank-ascending, one joker
//! appended per 52-card set when enabled), optionally shuffled through the
//! game's [`GameRng`], and then consumed by [`Deck::deal`]. It never outlives
//! the deal: once cards are in players' hands the deck is gone.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, MAX_STANDARD_RANK};
use super::rng::GameRng;

/// Number of cards in one standard set without jokers.
pub const CARDS_PER_SET: usize = 52;

/// An ordered sequence of cards awaiting the deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build `num_decks` standard 52-card sets, appending one joker per set
    /// when `jokers` is enabled.
    ///
    /// The enumeration order is stable: per set, hearts through clubs, each
    /// rank ascending 1-13, joker last.
    #[must_use]
    pub fn build(num_decks: usize, jokers: bool) -> Self {
        let per_set = CARDS_PER_SET + usize::from(jokers);
        let mut cards = Vec::with_capacity(num_decks * per_set);

        for _ in 0..num_decks {
            for suit in Suit::STANDARD {
                for rank in 1..=MAX_STANDARD_RANK {
                    cards.push(Card::new(suit, rank));
                }
            }
            if jokers {
                cards.push(Card::joker());
            }
        }

        Self { cards }
    }

    /// Total number of cards for a given configuration, without building.
    #[must_use]
    pub const fn size_of(num_decks: usize, jokers: bool) -> usize {
        num_decks * CARDS_PER_SET + if jokers { num_decks } else { 0 }
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal the whole deck round-robin into `num_players` hands, consuming it.
    ///
    /// Card `k` (in deck order) goes to hand `k % num_players`.
    #[must_use]
    pub fn deal(self, num_players: usize) -> Vec<Vec<Card>> {
        let mut hands: Vec<Vec<Card>> = (0..num_players)
            .map(|_| Vec::with_capacity(self.cards.len() / num_players + 1))
            .collect();

        for (k, card) in self.cards.into_iter().enumerate() {
            hands[k % num_players].push(card);
        }

        hands
    }

    /// The cards in deck order (bottom of the deal is index 0).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
