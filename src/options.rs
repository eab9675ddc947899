//! Game configuration options.

use crate::error::OptionsError;
use crate::player::PlayerId;

/// Configuration options for a game of Agonia.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use agonia::{GameOptions, PlayerId};
///
/// let options = GameOptions::default()
///     .with_points_limit(150)
///     .with_first_player(PlayerId::Cpu);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The game ends once either score reaches this limit.
    pub points_limit: u32,
    /// Who plays first in the first round. Rounds alternate afterwards.
    pub first_player: PlayerId,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            points_limit: 100,
            first_player: PlayerId::Human,
        }
    }
}

impl GameOptions {
    /// Sets the points limit.
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::GameOptions;
    ///
    /// let options = GameOptions::default().with_points_limit(50);
    /// assert_eq!(options.points_limit, 50);
    /// ```
    #[must_use]
    pub const fn with_points_limit(mut self, limit: u32) -> Self {
        self.points_limit = limit;
        self
    }

    /// Sets who plays first in the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::{GameOptions, PlayerId};
    ///
    /// let options = GameOptions::default().with_first_player(PlayerId::Cpu);
    /// assert_eq!(options.first_player, PlayerId::Cpu);
    /// ```
    #[must_use]
    pub const fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the points limit is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.points_limit == 0 {
            return Err(OptionsError::ZeroPointsLimit);
        }
        Ok(())
    }
}
