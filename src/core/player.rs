//! Players and their card piles.
//!
//! A player owns two piles: the hand, a stack drawn from the top, and the
//! discard, appended to as pots are won. When the hand runs dry the whole
//! discard is recycled back into the hand (shuffled or not, per policy) and
//! the draw retried once — if that still yields nothing, the player has no
//! cards anywhere and the draw fails with [`GameError::OutOfCards`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::config::OutOfCardsPolicy;
use super::error::GameError;
use super::rng::GameRng;

/// Player identifier supporting 2-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Result of one war-escalation draw sequence (two face-down, one face-up).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarPlay {
    /// The full sequence completed.
    Played {
        /// The face-up comparison card.
        face_up: Card,
        /// Face-down cards contributed to the pot, in draw order.
        face_down: SmallVec<[Card; 2]>,
    },
    /// A draw failed under [`OutOfCardsPolicy::Mercy`]: whatever was drawn
    /// before the failure still joins the pot, and the player's last played
    /// card stands in for the comparison.
    Fallback {
        /// Face-down cards drawn before the failure, in draw order.
        face_down: SmallVec<[Card; 2]>,
    },
    /// A draw failed under [`OutOfCardsPolicy::NoMercy`]: the player is out
    /// of the war and the game. Cards drawn earlier in this sequence leave
    /// play entirely.
    OutOfCards,
}

/// One player: two piles, elimination state, and war counters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Vec<Card>,
    discard: Vec<Card>,
    alive: bool,
    wars_won: u32,
    wars_lost: u32,
    last_card_played: Option<Card>,
    shuffle_on_recycle: bool,
    out_of_cards: OutOfCardsPolicy,
}

impl Player {
    /// Create a player with empty piles.
    #[must_use]
    pub fn new(id: PlayerId, shuffle_on_recycle: bool, out_of_cards: OutOfCardsPolicy) -> Self {
        Self {
            id,
            hand: Vec::new(),
            discard: Vec::new(),
            alive: true,
            wars_won: 0,
            wars_lost: 0,
            last_card_played: None,
            shuffle_on_recycle,
            out_of_cards,
        }
    }

    /// Set the initial hand. The last card is the top of the stack.
    #[must_use]
    pub fn with_hand(mut self, cards: Vec<Card>) -> Self {
        self.hand = cards;
        self
    }

    /// This player's ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Whether the player is still in the game.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Cards currently in hand (top of the stack is the last element).
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards currently in the discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Total cards across both piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.discard.len()
    }

    /// Wars this player has won.
    #[must_use]
    pub const fn wars_won(&self) -> u32 {
        self.wars_won
    }

    /// Wars this player has lost.
    #[must_use]
    pub const fn wars_lost(&self) -> u32 {
        self.wars_lost
    }

    /// The most recent successfully drawn card, if any.
    #[must_use]
    pub const fn last_card_played(&self) -> Option<Card> {
        self.last_card_played
    }

    /// The player's mid-war out-of-cards policy.
    #[must_use]
    pub const fn out_of_cards_policy(&self) -> OutOfCardsPolicy {
        self.out_of_cards
    }

    /// Append a card to the hand during the deal.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Draw the top card of the hand, recycling the discard once if needed.
    ///
    /// At most one recycle happens per call: a recycle only runs when the
    /// discard is non-empty, so a hand that is still empty afterwards means
    /// the player has no cards anywhere and the draw fails with
    /// [`GameError::OutOfCards`].
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.hand.is_empty() {
            if self.discard.is_empty() {
                return Err(GameError::OutOfCards(self.id));
            }
            self.recycle(rng)?;
        }

        match self.hand.pop() {
            Some(card) => {
                self.last_card_played = Some(card);
                Ok(card)
            }
            None => Err(GameError::OutOfCards(self.id)),
        }
    }

    /// Move the entire discard pile into the hand, shuffling when the
    /// recycle policy says to.
    ///
    /// Fails with [`GameError::ProtocolViolation`] if the hand is not empty.
    pub fn recycle(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        if !self.hand.is_empty() {
            return Err(GameError::ProtocolViolation {
                player: self.id,
                hand_size: self.hand.len(),
            });
        }

        if self.shuffle_on_recycle {
            rng.shuffle(&mut self.discard);
        }
        std::mem::swap(&mut self.hand, &mut self.discard);
        Ok(())
    }

    /// Append a batch of cards to the discard pile, preserving their order.
    pub fn place_cards_in_discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Perform the war-escalation draw: two face-down cards, then one
    /// face-up comparison card.
    ///
    /// A failed draw means the player has no cards anywhere, so the sequence
    /// stops at the first failure; the out-of-cards policy decides whether
    /// the player falls back to their last played card or is out.
    pub fn war_draw(&mut self, rng: &mut GameRng) -> WarPlay {
        let mut face_down: SmallVec<[Card; 2]> = SmallVec::new();

        for _ in 0..2 {
            match self.draw_card(rng) {
                Ok(card) => face_down.push(card),
                Err(_) => return self.war_draw_failed(face_down),
            }
        }

        match self.draw_card(rng) {
            Ok(face_up) => WarPlay::Played { face_up, face_down },
            Err(_) => self.war_draw_failed(face_down),
        }
    }

    fn war_draw_failed(&self, face_down: SmallVec<[Card; 2]>) -> WarPlay {
        match self.out_of_cards {
            OutOfCardsPolicy::Mercy => WarPlay::Fallback { face_down },
            OutOfCardsPolicy::NoMercy => WarPlay::OutOfCards,
        }
    }

    /// Take the player out of the game.
    pub(crate) fn mark_eliminated(&mut self) {
        self.alive = false;
    }

    pub(crate) fn record_war_won(&mut self) {
        self.wars_won += 1;
    }

    pub(crate) fn record_war_lost(&mut self) {
        self.wars_lost += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn card(rank: u8) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn player_with(hand: Vec<Card>, discard: Vec<Card>) -> Player {
        let mut player =
            Player::new(PlayerId::new(0), false, OutOfCardsPolicy::NoMercy).with_hand(hand);
        player.place_cards_in_discard(discard);
        player
    }

    #[test]
    fn test_draw_pops_top_of_hand() {
        let mut rng = GameRng::new(42);
        let mut player = player_with(vec![card(2), card(5)], vec![]);

        assert_eq!(player.draw_card(&mut rng), Ok(card(5)));
        assert_eq!(player.draw_card(&mut rng), Ok(card(2)));
        assert_eq!(player.last_card_played(), Some(card(2)));
    }

    #[test]
    fn test_draw_recycles_discard() {
        let mut rng = GameRng::new(42);
        let mut player = player_with(vec![], vec![card(3), card(9)]);

        // Discard order is preserved on recycle, so the most recently
        // discarded card comes off the top first.
        assert_eq!(player.draw_card(&mut rng), Ok(card(9)));
        assert_eq!(player.hand().len(), 1);
        assert!(player.discard().is_empty());
    }

    #[test]
    fn test_draw_fails_when_both_piles_empty() {
        let mut rng = GameRng::new(42);
        let mut player = player_with(vec![], vec![]);

        assert_eq!(
            player.draw_card(&mut rng),
            Err(GameError::OutOfCards(PlayerId::new(0)))
        );
    }

    #[test]
    fn test_recycle_shuffles_under_policy() {
        let mut rng = GameRng::new(42);
        let cards: Vec<Card> = (1..=13).map(card).collect();
        let mut player = Player::new(PlayerId::new(0), true, OutOfCardsPolicy::NoMercy);
        player.place_cards_in_discard(cards.clone());

        player.recycle(&mut rng).unwrap();

        assert_eq!(player.hand().len(), 13);
        assert_ne!(player.hand(), cards.as_slice());
        let mut sorted: Vec<Card> = player.hand().to_vec();
        sorted.sort_by_key(|c| c.rank());
        assert_eq!(sorted, cards);
    }

    #[test]
    fn test_recycle_with_nonempty_hand_is_protocol_violation() {
        let mut rng = GameRng::new(42);
        let mut player = player_with(vec![card(4)], vec![card(8)]);

        assert_eq!(
            player.recycle(&mut rng),
            Err(GameError::ProtocolViolation {
                player: PlayerId::new(0),
                hand_size: 1,
            })
        );
    }

    #[test]
    fn test_place_cards_preserves_order() {
        let mut player = player_with(vec![], vec![]);
        player.place_cards_in_discard(vec![card(1), card(2), card(3)]);
        assert_eq!(player.discard(), &[card(1), card(2), card(3)]);
    }

    #[test]
    fn test_war_draw_full_sequence() {
        let mut rng = GameRng::new(42);
        // Top of the stack is the last element: 2 and 9 go face-down,
        // then 13 face-up.
        let mut player = player_with(vec![card(7), card(13), card(9), card(2)], vec![]);

        match player.war_draw(&mut rng) {
            WarPlay::Played { face_up, face_down } => {
                assert_eq!(face_up, card(13));
                assert_eq!(face_down.as_slice(), &[card(2), card(9)]);
            }
            other => panic!("expected full war draw, got {:?}", other),
        }
        assert_eq!(player.hand().len(), 1);
    }

    #[test]
    fn test_war_draw_spans_recycle() {
        let mut rng = GameRng::new(42);
        let mut player = player_with(vec![card(2)], vec![card(5), card(11)]);

        match player.war_draw(&mut rng) {
            WarPlay::Played { face_up, face_down } => {
                assert_eq!(face_down.as_slice(), &[card(2), card(11)]);
                assert_eq!(face_up, card(5));
            }
            other => panic!("expected full war draw, got {:?}", other),
        }
    }

    #[test]
    fn test_war_draw_mercy_keeps_partial_face_down() {
        let mut rng = GameRng::new(42);
        let mut player = Player::new(PlayerId::new(1), false, OutOfCardsPolicy::Mercy)
            .with_hand(vec![card(6)]);

        // One face-down draw succeeds, the second fails: the drawn card is
        // still contributed and the player stays in.
        match player.war_draw(&mut rng) {
            WarPlay::Fallback { face_down } => {
                assert_eq!(face_down.as_slice(), &[card(6)]);
            }
            other => panic!("expected mercy fallback, got {:?}", other),
        }
        assert_eq!(player.last_card_played(), Some(card(6)));
    }

    #[test]
    fn test_war_draw_mercy_face_up_failure_keeps_both_face_down() {
        let mut rng = GameRng::new(42);
        let mut player = Player::new(PlayerId::new(1), false, OutOfCardsPolicy::Mercy)
            .with_hand(vec![card(10), card(4)]);

        match player.war_draw(&mut rng) {
            WarPlay::Fallback { face_down } => {
                assert_eq!(face_down.as_slice(), &[card(4), card(10)]);
            }
            other => panic!("expected mercy fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_war_draw_mercy_with_no_cards_at_all() {
        let mut rng = GameRng::new(42);
        let mut player = Player::new(PlayerId::new(1), false, OutOfCardsPolicy::Mercy);

        match player.war_draw(&mut rng) {
            WarPlay::Fallback { face_down } => assert!(face_down.is_empty()),
            other => panic!("expected mercy fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_war_draw_no_mercy_forfeits() {
        let mut rng = GameRng::new(42);
        let mut player = Player::new(PlayerId::new(1), false, OutOfCardsPolicy::NoMercy)
            .with_hand(vec![card(6)]);

        assert_eq!(player.war_draw(&mut rng), WarPlay::OutOfCards);
        // The card drawn before the failure has left play.
        assert_eq!(player.card_count(), 0);
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(2)), "Player 2");
    }

    #[test]
    fn test_player_id_all() {
        let ids: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(ids, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }
}
