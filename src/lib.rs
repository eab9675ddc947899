//! An Agonia card game engine with optional `no_std` support.
//!
//! Agonia is a two-player shedding game in the Crazy Eights family: match
//! the face-up card by rank or suit, Aces set the suit, Sevens make the
//! opponent pull two cards (answerable with another Seven), and Eights
//! skip the opponent. The first player to empty their hand wins the round
//! and the other is charged with the value of their remaining cards.
//!
//! The crate provides a [`Game`] type that manages the round flow, a
//! heuristic [`Cpu`] opponent, and a [`Human`] strategy fed by any
//! [`Input`] source.
//!
//! # Example
//!
//! ```
//! use agonia::{Cpu, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42, Box::new(Cpu), Box::new(Cpu)).unwrap();
//! let result = game.play_round().unwrap();
//! assert_eq!(result.round, 1);
//! assert_ne!(game.state(), GameState::Playing);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, DownState, STARTING_CARDS};
pub use error::{InputError, MoveError, OptionsError, ParseError, RoundError};
pub use event::Event;
pub use game::{Game, GameState, SevenChain};
pub use hand::{Hand, PlayHistory};
pub use options::GameOptions;
pub use player::{OpponentView, Player, PlayerId};
pub use result::{GameResult, RoundResult};
pub use strategy::{Choice, Command, Cpu, Human, Input, Prompt, Strategy, TableView, TurnContext};
