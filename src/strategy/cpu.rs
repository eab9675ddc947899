//! The computer opponent.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit, dominant_suit};
use crate::error::InputError;
use crate::player::{OpponentView, Player};

use super::{Choice, Strategy, TurnContext};

/// A deterministic heuristic opponent.
///
/// In normal play it sheds the highest card of the suit it holds most of
/// among its playable non-Ace cards, and keeps Aces for when nothing else
/// fits. When the opponent is down to one card after a recent Ace, it plays
/// a Seven of the active suit or an Ace first, to stop the opponent going
/// out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cpu;

impl Cpu {
    /// Creates the CPU strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Picks a card from the hand without pulling.
    ///
    /// Sorts the hand first; `None` means nothing in hand is playable.
    #[must_use]
    pub fn pick(turn: &mut TurnContext<'_>) -> Option<Card> {
        turn.sort_hand();

        let mut aces = Vec::new();
        let mut playable = Vec::new();
        for card in turn.me().hand.cards() {
            if card.is_ace() {
                aces.push(*card);
            } else if turn.is_legal(card) {
                playable.push(*card);
            }
        }
        // Higher cards of a suit come first.
        playable.reverse();

        if playable.is_empty() {
            return aces.first().copied();
        }

        if turn.opponent().threatens_to_win() {
            let active = turn.deck().active_suit();
            if let Some(seven) = playable
                .iter()
                .find(|card| card.is_seven() && card.suit == active)
            {
                log::trace!("cpu blocks with {seven}");
                return Some(*seven);
            }
            if let Some(ace) = aces.first() {
                log::trace!("cpu blocks with {ace}");
                return Some(*ace);
            }
        }

        let suit = dominant_suit(&playable);
        log::trace!("cpu dominant playable suit: {suit}");
        playable.into_iter().find(|card| card.suit == suit)
    }
}

impl Strategy for Cpu {
    fn choose_card(&mut self, turn: &mut TurnContext<'_>) -> Result<Choice, InputError> {
        if let Some(card) = Self::pick(turn) {
            return Ok(Choice::Play(card));
        }

        match turn.pull() {
            Ok(card) if turn.is_legal(&card) => Ok(Choice::Play(card)),
            _ => Ok(Choice::Fold),
        }
    }

    fn choose_suit(
        &mut self,
        me: &Player,
        opponent: OpponentView<'_>,
        previous: Option<Suit>,
    ) -> Result<Suit, InputError> {
        let cards = me.hand.cards();
        let suit = if opponent.threatens_to_win() {
            dominant_suit(
                cards
                    .iter()
                    .filter(|card| previous.is_none_or(|suit| card.suit != suit)),
            )
        } else {
            dominant_suit(cards)
        };
        Ok(suit)
    }

    fn choose_seven(&mut self, me: &Player) -> Result<Option<Card>, InputError> {
        let sevens = me.hand.sevens();
        if sevens.is_empty() {
            return Ok(None);
        }
        let suit = dominant_suit(&sevens);
        Ok(sevens.into_iter().find(|card| card.suit == suit))
    }
}
