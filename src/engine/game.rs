//! Turn orchestration, tie detection, and war resolution.
//!
//! ## Turn shape
//!
//! Every alive player draws one card into the pot. Draw failures eliminate
//! immediately, before any comparison. A unique maximal rank takes the pot;
//! a tied maximum starts a war among exactly the tied players, which repeats
//! on further ties until one winner takes everything or the round cap trips.
//!
//! ## Elimination bookkeeping
//!
//! The draw pass walks a copy of the alive list and installs the surviving
//! subset afterwards; war-round eliminations `retain` on the list directly
//! since nothing is iterating it at that point. Eliminated players stay
//! addressable for post-game inspection.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::config::GameConfig;
use crate::core::deck::Deck;
use crate::core::error::GameError;
use crate::core::player::{Player, PlayerId, WarPlay};
use crate::core::rng::GameRng;

/// Terminal result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single survivor.
    Winner(PlayerId),
    /// The turn cap was reached without resolution, or nobody survived.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Check if the game ended unresolved.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        matches!(self, GameResult::Tie)
    }
}

/// Observable outcome of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Who won, or [`GameResult::Tie`].
    pub result: GameResult,
    /// Completed turns.
    pub turns: u64,
    /// War rounds played.
    pub wars: u64,
}

/// What a single call to [`GameEngine::play_turn`] produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game goes on.
    Continue,
    /// The game just ended (or had already ended) with this outcome.
    Finished(GameOutcome),
}

/// State machine for one game of War.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    players: Vec<Player>,
    alive: Vec<PlayerId>,
    eliminated: Vec<PlayerId>,
    starting_hands: Vec<Vec<Card>>,
    turn_count: u64,
    war_count: u64,
    result: Option<GameResult>,
}

impl GameEngine {
    /// Create a game: build the deck, shuffle once, deal round-robin.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        config.validate();

        let mut rng = GameRng::new(seed);
        let mut deck = Deck::build(config.num_decks, config.jokers);
        deck.shuffle(&mut rng);
        let hands = deck.deal(config.num_players);

        Self::assemble(config, hands, rng)
    }

    /// Create a game from pre-dealt hands, skipping shuffle-and-deal.
    ///
    /// Hand `i` belongs to player `i`; the last card of each hand is the top
    /// of that player's stack.
    #[must_use]
    pub fn from_hands(config: GameConfig, hands: Vec<Vec<Card>>, seed: u64) -> Self {
        config.validate();
        assert_eq!(
            hands.len(),
            config.num_players,
            "One hand per configured player required"
        );

        Self::assemble(config, hands, GameRng::new(seed))
    }

    /// Create a game from pre-built players, e.g. with per-player policies.
    ///
    /// Player `i` must carry `PlayerId(i)`.
    #[must_use]
    pub fn from_players(config: GameConfig, players: Vec<Player>, seed: u64) -> Self {
        config.validate();
        assert_eq!(
            players.len(),
            config.num_players,
            "One player per configured seat required"
        );
        assert!(
            players.iter().enumerate().all(|(i, p)| p.id().index() == i),
            "Player ids must match their seat positions"
        );

        let starting_hands = players.iter().map(|p| p.hand().to_vec()).collect();
        Self {
            alive: PlayerId::all(config.num_players).collect(),
            eliminated: Vec::new(),
            starting_hands,
            turn_count: 0,
            war_count: 0,
            result: None,
            rng: GameRng::new(seed),
            players,
            config,
        }
    }

    fn assemble(config: GameConfig, hands: Vec<Vec<Card>>, rng: GameRng) -> Self {
        // Independent deep copy: the live hands mutate from turn one.
        let starting_hands = hands.clone();

        let players = PlayerId::all(config.num_players)
            .zip(hands)
            .map(|(id, hand)| {
                Player::new(id, config.shuffle_on_recycle, config.out_of_cards).with_hand(hand)
            })
            .collect();

        Self {
            alive: PlayerId::all(config.num_players).collect(),
            eliminated: Vec::new(),
            starting_hands,
            turn_count: 0,
            war_count: 0,
            result: None,
            rng,
            players,
            config,
        }
    }

    /// Play turns until the game ends.
    ///
    /// A finished game returns its outcome again without replaying.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            if let TurnOutcome::Finished(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }

    /// Play a single turn.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if let Some(result) = self.result {
            return Ok(TurnOutcome::Finished(self.outcome(result)));
        }

        // Draw phase: every alive player flips one card into the pot.
        let drawing = self.alive.clone();
        let mut pot: Vec<Card> = Vec::new();
        let mut plays: Vec<(PlayerId, u8)> = Vec::with_capacity(drawing.len());
        let mut survivors: Vec<PlayerId> = Vec::with_capacity(drawing.len());

        for id in drawing {
            match self.players[id.index()].draw_card(&mut self.rng) {
                Ok(card) => {
                    pot.push(card);
                    plays.push((id, card.rank()));
                    survivors.push(id);
                }
                Err(GameError::OutOfCards(_)) => self.mark_eliminated(id),
                Err(err) => return Err(err),
            }
        }
        self.alive = survivors;

        if self.alive.len() <= 1 {
            return Ok(TurnOutcome::Finished(self.finish(pot)));
        }

        // Tie detection: the war set is exactly the players holding the
        // maximal rank, however many there are.
        let top = plays.iter().map(|&(_, rank)| rank).max().unwrap_or(0);
        let tied: Vec<PlayerId> = plays
            .iter()
            .filter(|&&(_, rank)| rank == top)
            .map(|&(id, _)| id)
            .collect();

        if tied.len() == 1 {
            self.award_pot(tied[0], pot);
        } else {
            self.resolve_war(tied, pot)?;
        }

        self.turn_count += 1;
        if self.config.verbose {
            self.trace_turn();
        }

        if self.turn_count >= self.config.max_turns {
            self.result = Some(GameResult::Tie);
            return Ok(TurnOutcome::Finished(self.outcome(GameResult::Tie)));
        }

        Ok(TurnOutcome::Continue)
    }

    /// Run one war to resolution among `first_round`, growing `pot` with
    /// every round's cards.
    fn resolve_war(&mut self, first_round: Vec<PlayerId>, mut pot: Vec<Card>) -> Result<(), GameError> {
        let limit = self.config.war_round_limit();
        let entrants = first_round.clone();
        let mut contenders = first_round;
        let mut rounds: u64 = 0;

        loop {
            rounds += 1;
            if rounds > limit {
                return Err(GameError::UnresolvableWarLoop {
                    contenders: contenders.len(),
                    limit,
                });
            }
            self.war_count += 1;
            trace!("war round {} between {} players", rounds, contenders.len());

            let mut plays: Vec<(PlayerId, u8)> = Vec::with_capacity(contenders.len());
            for id in contenders {
                let player = &mut self.players[id.index()];
                match player.war_draw(&mut self.rng) {
                    WarPlay::Played { face_up, face_down } => {
                        pot.extend(face_down);
                        pot.push(face_up);
                        plays.push((id, face_up.rank()));
                    }
                    WarPlay::Fallback { face_down } => {
                        pot.extend(face_down);
                        let rank = player.last_card_played().map_or(0, |card| card.rank());
                        plays.push((id, rank));
                    }
                    WarPlay::OutOfCards => {
                        self.mark_eliminated(id);
                        self.alive.retain(|&p| p != id);
                    }
                }
            }

            if plays.is_empty() {
                // Every contender ran dry mid-round; the pot leaves play.
                debug!("war ended with no survivors, {} cards forfeited", pot.len());
                for id in entrants {
                    self.players[id.index()].record_war_lost();
                }
                return Ok(());
            }

            let top = plays.iter().map(|&(_, rank)| rank).max().unwrap_or(0);
            let tied: Vec<PlayerId> = plays
                .iter()
                .filter(|&&(_, rank)| rank == top)
                .map(|&(id, _)| id)
                .collect();

            if tied.len() == 1 {
                let winner = tied[0];
                self.players[winner.index()].record_war_won();
                for &id in &entrants {
                    if id != winner {
                        self.players[id.index()].record_war_lost();
                    }
                }
                self.award_pot(winner, pot);
                return Ok(());
            }

            contenders = tied;
        }
    }

    /// Terminal path for a curtailed draw pass (one or zero players left).
    fn finish(&mut self, pot: Vec<Card>) -> GameOutcome {
        let result = if self.alive.len() == 1 {
            let winner = self.alive[0];
            // Cards drawn in the curtailed pass stay in play.
            self.players[winner.index()].place_cards_in_discard(pot);
            GameResult::Winner(winner)
        } else {
            GameResult::Tie
        };

        debug!(
            "game over after {} turns and {} war rounds: {:?}",
            self.turn_count, self.war_count, result
        );
        self.result = Some(result);
        self.outcome(result)
    }

    fn award_pot(&mut self, winner: PlayerId, pot: Vec<Card>) {
        trace!("{} takes a pot of {} cards", winner, pot.len());
        self.players[winner.index()].place_cards_in_discard(pot);
    }

    fn mark_eliminated(&mut self, id: PlayerId) {
        trace!("{} is out of cards and eliminated", id);
        self.players[id.index()].mark_eliminated();
        self.eliminated.push(id);
    }

    fn outcome(&self, result: GameResult) -> GameOutcome {
        GameOutcome {
            result,
            turns: self.turn_count,
            wars: self.war_count,
        }
    }

    fn trace_turn(&self) {
        let piles: Vec<(usize, usize)> = self
            .alive
            .iter()
            .map(|&id| {
                let player = &self.players[id.index()];
                (player.hand().len(), player.discard().len())
            })
            .collect();
        debug!("turn {}: (hand, discard) sizes {:?}", self.turn_count, piles);
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All players, in seat order, alive or not.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// IDs of players still in the game, in seat order.
    #[must_use]
    pub fn alive(&self) -> &[PlayerId] {
        &self.alive
    }

    /// IDs of eliminated players, in elimination order.
    #[must_use]
    pub fn eliminated(&self) -> &[PlayerId] {
        &self.eliminated
    }

    /// Deep-copied hands as dealt, untouched by play.
    #[must_use]
    pub fn starting_hands(&self) -> &[Vec<Card>] {
        &self.starting_hands
    }

    /// Completed turns so far.
    #[must_use]
    pub const fn turn_count(&self) -> u64 {
        self.turn_count
    }

    /// War rounds played so far.
    #[must_use]
    pub const fn war_count(&self) -> u64 {
        self.war_count
    }

    /// The terminal result, once the game has ended.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        self.result
    }
}
