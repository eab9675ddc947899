//! Game engine and round flow.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{OptionsError, RoundError};
use crate::event::Event;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::result::{GameResult, RoundResult};
use crate::strategy::{Strategy, TableView};

mod seven;
pub mod state;
mod turn;

pub use state::{GameState, SevenChain};

/// An Agonia game between a human and a CPU seat.
///
/// The game owns the deck, both players, and the strategy deciding for each
/// seat. Drive it one step at a time with [`Game::start_round`],
/// [`Game::play_first_card`], [`Game::play_turn`], and
/// [`Game::finish_round`], or let [`Game::play_round`] and [`Game::run`] do
/// it.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// The draw pile and face-up card of the current round.
    deck: Deck,
    /// Players indexed by [`PlayerId`].
    players: [Player; 2],
    /// Strategies indexed by [`PlayerId`].
    strategies: [Box<dyn Strategy>; 2],
    /// Current game state.
    state: GameState,
    /// Number of rounds dealt so far.
    round: u32,
    /// Whose turn it is.
    current: PlayerId,
    /// Winner of the current round, once decided.
    winner: Option<PlayerId>,
    /// Events not yet taken by the presentation layer.
    events: Vec<Event>,
    /// Source of per-round deck seeds.
    rng: ChaCha8Rng,
}

impl core::fmt::Debug for Game {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Game")
            .field("options", &self.options)
            .field("deck", &self.deck)
            .field("players", &self.players)
            .field("state", &self.state)
            .field("round", &self.round)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

pub(crate) fn split_players(players: &mut [Player; 2], id: PlayerId) -> (&mut Player, &Player) {
    let [human, cpu] = players;
    match id {
        PlayerId::Human => (human, &*cpu),
        PlayerId::Cpu => (cpu, &*human),
    }
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::{Cpu, Game, GameOptions};
    ///
    /// let options = GameOptions::default().with_points_limit(50);
    /// let mut game = Game::new(options, 42, Box::new(Cpu), Box::new(Cpu)).unwrap();
    /// let result = game.run().unwrap();
    /// assert!(result.human_score >= 50 || result.cpu_score >= 50);
    /// ```
    pub fn new(
        options: GameOptions,
        seed: u64,
        human: Box<dyn Strategy>,
        cpu: Box<dyn Strategy>,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            deck: Deck::stacked(Vec::new(), seed),
            players: [Player::new(), Player::new()],
            strategies: [human, cpu],
            state: GameState::WaitingForRound,
            round: 0,
            current: options.first_player,
            winner: None,
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// Returns the first face-up card.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the game is over.
    pub fn start_round(&mut self) -> Result<Card, RoundError> {
        let mut deck = Deck::new(self.rng.next_u64());
        deck.shuffle();
        self.start_round_with(deck)
    }

    /// Deals a new round from the given deck.
    ///
    /// The human receives the first dealt card after the face-up card.
    /// Returns the first face-up card.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the game is over.
    pub fn start_round_with(&mut self, deck: Deck) -> Result<Card, RoundError> {
        match self.state {
            GameState::WaitingForRound => {}
            GameState::GameOver => return Err(RoundError::GameOver),
            _ => return Err(RoundError::InvalidState),
        }

        self.round += 1;
        self.deck = deck;
        let [human, cpu] = &mut self.players;
        self.deck.deal_initial(&mut human.hand, &mut cpu.hand);
        let down_card = self.deck.down_card().ok_or(RoundError::InvalidState)?;

        let starter = if self.round % 2 == 1 {
            self.options.first_player
        } else {
            self.options.first_player.other()
        };
        self.current = starter;
        self.winner = None;
        self.state = GameState::FirstCard;

        log::info!(
            "round {} dealt, {starter} starts on {down_card}",
            self.round
        );
        self.events.push(Event::RoundStarted {
            round: self.round,
            starter,
            down_card,
        });
        Ok(down_card)
    }

    /// Charges the round's loser and checks the points limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn finish_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != GameState::RoundOver {
            return Err(RoundError::InvalidState);
        }
        let winner = self.winner.ok_or(RoundError::InvalidState)?;
        let loser = winner.other();
        let points = self.players[loser.index()].add_points();

        let human_score = self.player(PlayerId::Human).points();
        let cpu_score = self.player(PlayerId::Cpu).points();
        let limit = self.options.points_limit;
        let game_over = human_score >= limit || cpu_score >= limit;

        log::info!(
            "round {} won by {winner}, {points} points to {loser} (human {human_score}, cpu {cpu_score})",
            self.round
        );
        self.events.push(Event::RoundWon {
            player: winner,
            points,
        });

        self.state = if game_over {
            log::info!("points limit {limit} reached after {} rounds", self.round);
            GameState::GameOver
        } else {
            GameState::WaitingForRound
        };

        Ok(RoundResult {
            round: self.round,
            winner,
            loser,
            points,
            human_score,
            cpu_score,
            game_over,
        })
    }

    /// Plays one whole round: deal, first card, turns, and scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the game is
    /// over, or a strategy's input closes.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.start_round()?;
        self.play_first_card()?;
        while self.state == GameState::Playing {
            self.play_turn()?;
        }
        self.finish_round()
    }

    /// Plays rounds until the points limit is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or a strategy's input
    /// closes.
    pub fn run(&mut self) -> Result<GameResult, RoundError> {
        while self.state != GameState::GameOver {
            self.play_round()?;
        }
        self.result().ok_or(RoundError::InvalidState)
    }

    /// Returns the final result once the game is over.
    ///
    /// The lower score wins; a tie goes to the human.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state != GameState::GameOver {
            return None;
        }
        let human_score = self.player(PlayerId::Human).points();
        let cpu_score = self.player(PlayerId::Cpu).points();
        let winner = if human_score > cpu_score {
            PlayerId::Cpu
        } else {
            PlayerId::Human
        };
        Some(GameResult {
            winner,
            human_score,
            cpu_score,
            rounds: self.round,
        })
    }

    /// Returns the table as seen from `viewer`'s seat.
    #[must_use]
    pub fn table(&self, viewer: PlayerId) -> TableView {
        TableView {
            down: self.deck.down(),
            hand: self.player(viewer).hand.sorted(),
            opponent_cards: self.player(viewer.other()).hand.len(),
            deck_cards: self.deck.len(),
            pulled: false,
        }
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds dealt so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Returns the winner of the current round, once decided.
    #[must_use]
    pub const fn round_winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Returns a player.
    #[must_use]
    pub const fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Returns a player mutably, for setting up custom positions.
    pub const fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck mutably, for setting up custom positions.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Ends the round if either hand is empty, checking `first` before the
    /// other player.
    fn settle(&mut self, first: PlayerId) -> Option<PlayerId> {
        let winner = [first, first.other()]
            .into_iter()
            .find(|id| self.player(*id).has_won())?;
        self.winner = Some(winner);
        self.state = GameState::RoundOver;
        Some(winner)
    }
}
