//! A strategy driven by an external source of text commands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::deck::DownState;
use crate::error::{InputError, MoveError};
use crate::player::{OpponentView, Player};

use super::{Choice, Strategy, TurnContext};

/// A read-only snapshot of the table from one player's seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The face-up card and active suit.
    pub down: Option<DownState>,
    /// The viewer's cards, sorted by suit then rank.
    pub hand: Vec<Card>,
    /// Number of cards the opponent holds.
    pub opponent_cards: usize,
    /// Number of cards left in the deck.
    pub deck_cards: usize,
    /// Whether the viewer has already pulled this turn.
    pub pulled: bool,
}

/// What the human is being asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Choose a card to play, pull, or fold.
    Card(TableView),
    /// Choose the suit to set after an Ace.
    Suit {
        /// The human's cards, sorted.
        hand: Vec<Card>,
    },
    /// Decide whether to answer a Seven with a Seven.
    CounterSeven {
        /// The Sevens held.
        sevens: Vec<Card>,
    },
    /// Choose which Seven to play.
    Seven {
        /// The Sevens held.
        sevens: Vec<Card>,
    },
}

/// A source of text commands, such as a terminal.
pub trait Input {
    /// Returns the next command for `prompt`, or `None` once the source is
    /// exhausted.
    fn read(&mut self, prompt: &Prompt) -> Option<String>;

    /// Reports why the last command was rejected. The prompt is then
    /// repeated.
    fn reject(&mut self, _error: MoveError) {}
}

/// A normalized command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pull a card from the deck.
    Pull,
    /// End the turn without playing.
    Fold,
    /// Affirmative answer.
    Yes,
    /// Negative answer.
    No,
    /// Anything else: a card or suit name, kept normalized.
    Name(String),
}

impl Command {
    /// Normalizes raw input: trims, lowercases, and collapses whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::Command;
    ///
    /// assert_eq!(Command::parse(" P "), Command::Pull);
    /// assert_eq!(Command::parse("fold"), Command::Fold);
    /// assert_eq!(
    ///     Command::parse("King   of Spades"),
    ///     Command::Name("king of spades".into())
    /// );
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let normalized = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        match normalized.as_str() {
            "p" | "pull" => Self::Pull,
            "f" | "fold" => Self::Fold,
            "y" | "yes" => Self::Yes,
            "n" | "no" => Self::No,
            _ => Self::Name(normalized),
        }
    }
}

/// The human strategy: every decision comes from an [`Input`], and every
/// command is validated before it takes effect.
#[derive(Debug, Clone, Default)]
pub struct Human<I> {
    input: I,
}

impl<I: Input> Human<I> {
    /// Creates a human strategy reading from `input`.
    #[must_use]
    pub const fn new(input: I) -> Self {
        Self { input }
    }

    /// Returns the input source.
    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// Returns the input source mutably.
    pub const fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    fn read(&mut self, prompt: &Prompt) -> Result<Command, InputError> {
        self.input
            .read(prompt)
            .map(|line| Command::parse(&line))
            .ok_or(InputError::Closed)
    }
}

impl<I: Input> Strategy for Human<I> {
    fn choose_card(&mut self, turn: &mut TurnContext<'_>) -> Result<Choice, InputError> {
        loop {
            let view = TableView {
                down: turn.deck().down(),
                hand: turn.me().hand.sorted(),
                opponent_cards: turn.opponent().hand_len(),
                deck_cards: turn.deck().len(),
                pulled: turn.has_pulled(),
            };
            let command = self.read(&Prompt::Card(view))?;

            let outcome = match command {
                Command::Pull => match turn.pull() {
                    Ok(card) => {
                        log::debug!("human pulled {card}");
                        continue;
                    }
                    Err(err) => Err(err),
                },
                Command::Fold => turn.fold(),
                Command::Name(name) => turn
                    .me()
                    .hand
                    .find(&name)
                    .ok_or(MoveError::NoSuchCard)
                    .and_then(|card| turn.play(card)),
                Command::Yes | Command::No => Err(MoveError::UnknownCommand),
            };

            match outcome {
                Ok(choice) => return Ok(choice),
                Err(err) => self.input.reject(err),
            }
        }
    }

    fn choose_suit(
        &mut self,
        me: &Player,
        _opponent: OpponentView<'_>,
        _previous: Option<Suit>,
    ) -> Result<Suit, InputError> {
        let prompt = Prompt::Suit {
            hand: me.hand.sorted(),
        };
        loop {
            match self.read(&prompt)? {
                Command::Name(name) => match name.parse::<Suit>() {
                    Ok(suit) => return Ok(suit),
                    Err(err) => self.input.reject(err.into()),
                },
                _ => self.input.reject(MoveError::UnknownCommand),
            }
        }
    }

    fn choose_seven(&mut self, me: &Player) -> Result<Option<Card>, InputError> {
        let sevens = me.hand.sevens();
        if sevens.is_empty() {
            return Ok(None);
        }

        let ask = Prompt::CounterSeven {
            sevens: sevens.clone(),
        };
        loop {
            match self.read(&ask)? {
                Command::Yes => break,
                Command::No => return Ok(None),
                _ => self.input.reject(MoveError::UnknownCommand),
            }
        }

        let choose = Prompt::Seven { sevens };
        loop {
            let Command::Name(name) = self.read(&choose)? else {
                self.input.reject(MoveError::UnknownCommand);
                continue;
            };
            match me.hand.find(&name) {
                None => self.input.reject(MoveError::NoSuchCard),
                Some(card) if !card.is_seven() => self.input.reject(MoveError::NotASeven),
                Some(card) => return Ok(Some(card)),
            }
        }
    }
}
