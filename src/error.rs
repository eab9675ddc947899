//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while parsing cards and suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Rank code or name not recognized.
    #[error("unknown rank")]
    InvalidRank,
    /// Suit code or name not recognized.
    #[error("unknown suit")]
    InvalidSuit,
    /// Input is not shaped like a card.
    #[error("not a card name")]
    InvalidCard,
}

/// Illegal or malformed moves. The human strategy reports these to its
/// input source and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The named card is not in the player's hand.
    #[error("you have no such card")]
    NoSuchCard,
    /// The card matches neither the down-card's rank nor the active suit.
    #[error("you can't play this card")]
    IllegalCard,
    /// A card was already pulled this turn.
    #[error("you already pulled a card")]
    AlreadyPulled,
    /// Folding requires pulling a card first.
    #[error("you can't fold before pulling a card")]
    MustPullFirst,
    /// Only a Seven can answer a Seven.
    #[error("you should play a 7")]
    NotASeven,
    /// Every card is held or face up, nothing left to pull.
    #[error("no cards left to pull")]
    DeckExhausted,
    /// The input is not a command understood here.
    #[error("unknown command")]
    UnknownCommand,
    /// The input looked like a card or suit but could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input source has no more tokens.
    #[error("input closed")]
    Closed,
}

/// Errors that can occur when validating options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The points limit must be positive.
    #[error("points limit must be positive")]
    ZeroPointsLimit,
}

/// Errors that can occur while driving rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// The points limit has been reached.
    #[error("the game is over")]
    GameOver,
    /// A strategy's input closed mid-turn.
    #[error("input closed")]
    InputClosed,
}

impl From<InputError> for RoundError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Closed => Self::InputClosed,
        }
    }
}
