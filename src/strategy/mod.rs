//! Turn-taking strategies and the per-turn pull/fold state machine.

extern crate alloc;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::{InputError, MoveError};
use crate::player::{OpponentView, Player};

pub mod cpu;
pub mod human;

pub use cpu::Cpu;
pub use human::{Command, Human, Input, Prompt, TableView};

/// Outcome of choosing a card to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Play this card. It is still in the hand; the game removes it.
    Play(Card),
    /// End the turn without playing.
    Fold,
}

/// A single turn in progress.
///
/// Enforces the turn rules independently of who decides: a card may be
/// pulled at most once, folding is only allowed after pulling, and only
/// held cards accepted by the down state may be played.
#[derive(Debug)]
pub struct TurnContext<'a> {
    me: &'a mut Player,
    opponent: OpponentView<'a>,
    deck: &'a mut Deck,
    pulled: Option<Card>,
    pull_attempted: bool,
}

impl<'a> TurnContext<'a> {
    /// Starts a turn for `me`.
    pub const fn new(me: &'a mut Player, opponent: &'a Player, deck: &'a mut Deck) -> Self {
        Self {
            me,
            opponent: OpponentView::new(opponent),
            deck,
            pulled: None,
            pull_attempted: false,
        }
    }

    /// Returns the acting player.
    #[must_use]
    pub const fn me(&self) -> &Player {
        &*self.me
    }

    /// Sorts the acting player's hand by suit, then rank.
    pub fn sort_hand(&mut self) {
        self.me.hand.sort();
    }

    /// Returns the opponent's observable state.
    #[must_use]
    pub const fn opponent(&self) -> OpponentView<'a> {
        self.opponent
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &*self.deck
    }

    /// Returns whether `card` may be played on the current down state.
    #[must_use]
    pub fn is_legal(&self, card: &Card) -> bool {
        self.deck.accepts(card)
    }

    /// Returns the card pulled this turn, if any.
    #[must_use]
    pub const fn pulled(&self) -> Option<Card> {
        self.pulled
    }

    /// Returns whether a pull has been used up this turn.
    #[must_use]
    pub const fn has_pulled(&self) -> bool {
        self.pull_attempted
    }

    /// Pulls one card from the deck into the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if a card was already pulled this turn, or if every
    /// card is held or face up. The pull counts as used in the latter case,
    /// so the player may fold.
    pub fn pull(&mut self) -> Result<Card, MoveError> {
        if self.pull_attempted {
            return Err(MoveError::AlreadyPulled);
        }
        self.pull_attempted = true;

        let card = self
            .deck
            .deal_one(&self.me.hand, self.opponent.hand())
            .ok_or(MoveError::DeckExhausted)?;
        self.me.hand.add_card(card);
        self.pulled = Some(card);
        Ok(card)
    }

    /// Ends the turn without playing.
    ///
    /// # Errors
    ///
    /// Returns an error if no card has been pulled yet.
    pub const fn fold(&self) -> Result<Choice, MoveError> {
        if self.pull_attempted {
            Ok(Choice::Fold)
        } else {
            Err(MoveError::MustPullFirst)
        }
    }

    /// Selects `card` for play.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not held or cannot be played on the
    /// current down state.
    pub fn play(&self, card: Card) -> Result<Choice, MoveError> {
        if !self.me.hand.contains(&card) {
            return Err(MoveError::NoSuchCard);
        }
        if !self.is_legal(&card) {
            return Err(MoveError::IllegalCard);
        }
        Ok(Choice::Play(card))
    }
}

/// A decision procedure for one player.
///
/// The game asks the active player's strategy for every decision; the
/// strategy never mutates anything except through [`TurnContext`].
pub trait Strategy {
    /// Chooses a card to play, pulling at most once, or folds.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's input source is exhausted.
    fn choose_card(&mut self, turn: &mut TurnContext<'_>) -> Result<Choice, InputError>;

    /// Chooses the suit to set after playing an Ace.
    ///
    /// `previous` is the suit that was active before the Ace, or `None` for
    /// an Ace turned up as the first card.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's input source is exhausted.
    fn choose_suit(
        &mut self,
        me: &Player,
        opponent: OpponentView<'_>,
        previous: Option<Suit>,
    ) -> Result<Suit, InputError>;

    /// Chooses a Seven to answer a Seven, or `None` to take the penalty.
    ///
    /// The returned card must be a Seven held by `me`.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's input source is exhausted.
    fn choose_seven(&mut self, me: &Player) -> Result<Option<Card>, InputError>;
}

impl<S: Strategy + ?Sized> Strategy for alloc::boxed::Box<S> {
    fn choose_card(&mut self, turn: &mut TurnContext<'_>) -> Result<Choice, InputError> {
        (**self).choose_card(turn)
    }

    fn choose_suit(
        &mut self,
        me: &Player,
        opponent: OpponentView<'_>,
        previous: Option<Suit>,
    ) -> Result<Suit, InputError> {
        (**self).choose_suit(me, opponent, previous)
    }

    fn choose_seven(&mut self, me: &Player) -> Result<Option<Card>, InputError> {
        (**self).choose_seven(me)
    }
}
