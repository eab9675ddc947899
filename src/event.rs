//! Table events for presentation layers.

use crate::card::{Card, Suit};
use crate::player::PlayerId;

/// Something that happened at the table, in order of occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A round was dealt.
    RoundStarted {
        /// The round number, starting at 1.
        round: u32,
        /// Who moves first.
        starter: PlayerId,
        /// The first face-up card.
        down_card: Card,
    },
    /// A card was played (including Sevens played in a chain).
    Played {
        /// Who played.
        player: PlayerId,
        /// The card played.
        card: Card,
    },
    /// A player pulled a card during their turn.
    Pulled {
        /// Who pulled.
        player: PlayerId,
        /// The card pulled.
        card: Card,
    },
    /// A player ended their turn without playing.
    Folded {
        /// Who folded.
        player: PlayerId,
    },
    /// A suit was set after an Ace.
    SuitChosen {
        /// Who chose.
        player: PlayerId,
        /// The new active suit.
        suit: Suit,
    },
    /// A Seven chain ended and its penalty was drawn.
    SevenPenalty {
        /// Who drew the penalty.
        player: PlayerId,
        /// Number of cards drawn.
        cards: usize,
    },
    /// A player lost their turn to an Eight or a Seven chain.
    TurnLost {
        /// Who lost the turn.
        player: PlayerId,
    },
    /// A player emptied their hand.
    RoundWon {
        /// The winner of the round.
        player: PlayerId,
        /// Points charged to the loser.
        points: u32,
    },
}
