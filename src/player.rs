//! Players and the opponent view handed to strategies.

use core::fmt;

use crate::hand::{Hand, PlayHistory};

/// Identifies one of the two players at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerId {
    /// The human player.
    #[default]
    Human,
    /// The computer opponent.
    Cpu,
}

impl PlayerId {
    /// Returns the other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Cpu,
            Self::Cpu => Self::Human,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Cpu => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Cpu => "cpu",
        })
    }
}

/// A player's hand, cumulative score, and recent plays.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Cards currently held.
    pub hand: Hand,
    /// Points accumulated over all finished rounds.
    points: u32,
    /// The last two cards this player put on the table.
    history: PlayHistory,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            points: 0,
            history: PlayHistory::new(),
        }
    }

    /// Returns whether the player has emptied their hand.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// Charges the player with the value of every card still held.
    ///
    /// Returns the points added.
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::{Card, Player, Suit};
    ///
    /// let mut player = Player::new();
    /// player.hand.add_card(Card::new(1, Suit::Hearts));
    /// player.hand.add_card(Card::new(12, Suit::Clubs));
    /// player.hand.add_card(Card::new(4, Suit::Spades));
    /// assert_eq!(player.add_points(), 39);
    /// assert_eq!(player.points(), 39);
    /// ```
    pub fn add_points(&mut self) -> u32 {
        let points = self.hand.points();
        self.points += points;
        points
    }

    /// Returns the cumulative score.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns the recent play history.
    #[must_use]
    pub const fn history(&self) -> &PlayHistory {
        &self.history
    }

    /// Records a card this player put on the table.
    pub const fn record_play(&mut self, card: crate::Card) {
        self.history.push(card);
    }
}

/// What a strategy may see of its opponent.
#[derive(Debug, Clone, Copy)]
pub struct OpponentView<'a> {
    player: &'a Player,
}

impl<'a> OpponentView<'a> {
    /// Wraps the opponent.
    #[must_use]
    pub const fn new(player: &'a Player) -> Self {
        Self { player }
    }

    /// Returns how many cards the opponent holds.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.player.hand.len()
    }

    /// Returns the opponent's last two plays.
    #[must_use]
    pub const fn history(&self) -> &'a PlayHistory {
        &self.player.history
    }

    /// Returns whether the opponent is one card from winning after a recent
    /// Ace.
    #[must_use]
    pub fn threatens_to_win(&self) -> bool {
        self.hand_len() == 1 && self.history().has_ace()
    }

    pub(crate) const fn hand(&self) -> &'a Hand {
        &self.player.hand
    }
}
