//! Property-based tests for shuffling and card conservation.

use proptest::prelude::*;

use war_sim::{Deck, GameConfig, GameEngine, GameError, GameRng, OutOfCardsPolicy, TurnOutcome};

proptest! {
    /// Shuffle output is a permutation of its input, for every input
    /// length including empty and singleton.
    #[test]
    fn shuffle_is_a_permutation(
        cards in prop::collection::vec(any::<u8>(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut shuffled = cards.clone();
        let mut rng = GameRng::new(seed);
        rng.shuffle(&mut shuffled);

        prop_assert_eq!(shuffled.len(), cards.len());

        let mut sorted_input = cards;
        let mut sorted_output = shuffled;
        sorted_input.sort_unstable();
        sorted_output.sort_unstable();
        prop_assert_eq!(sorted_output, sorted_input);
    }

    /// The round-robin deal hands out every built card exactly once.
    #[test]
    fn deal_conserves_the_deck(
        num_decks in 1usize..4,
        jokers in any::<bool>(),
        players in 2usize..6,
    ) {
        let deck = Deck::build(num_decks, jokers);
        let expected = deck.len();
        prop_assert_eq!(expected, Deck::size_of(num_decks, jokers));

        let hands = deck.deal(players);
        prop_assert_eq!(hands.len(), players);
        prop_assert_eq!(hands.iter().map(Vec::len).sum::<usize>(), expected);
    }

    /// Mercy never forfeits a card, so the piles account for the entire
    /// deck at every turn boundary of any mercy game.
    #[test]
    fn mercy_games_conserve_cards(
        seed in any::<u64>(),
        players in 2usize..5,
        decks in 1usize..3,
        jokers in any::<bool>(),
        shuffle in any::<bool>(),
    ) {
        let mut config = GameConfig::new(players)
            .with_decks(decks)
            .with_policy(OutOfCardsPolicy::Mercy)
            .with_max_turns(300);
        if jokers {
            config = config.with_jokers();
        }
        if shuffle {
            config = config.with_recycle_shuffle();
        }

        let expected = config.deck_size();
        let mut engine = GameEngine::new(config, seed);

        loop {
            let total: usize = engine.players().iter().map(|p| p.card_count()).sum();
            prop_assert_eq!(total, expected);

            match engine.play_turn() {
                Ok(TurnOutcome::Continue) => {}
                Ok(TurnOutcome::Finished(_)) => break,
                // A drained-contender stalemate aborts the run; the pot in
                // flight is discarded with it, so there is no boundary left
                // to check.
                Err(GameError::UnresolvableWarLoop { .. }) => return Ok(()),
                Err(err) => prop_assert!(false, "game error: {}", err),
            }
        }

        let total: usize = engine.players().iter().map(|p| p.card_count()).sum();
        prop_assert_eq!(total, expected);
    }
}
