//! Round and game result types.

use crate::player::PlayerId;

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number, starting at 1.
    pub round: u32,
    /// The player who emptied their hand.
    pub winner: PlayerId,
    /// The player charged with their remaining cards.
    pub loser: PlayerId,
    /// Points charged to the loser this round.
    pub points: u32,
    /// The human's cumulative score.
    pub human_score: u32,
    /// The CPU's cumulative score.
    pub cpu_score: u32,
    /// Whether this round ended the game.
    pub game_over: bool,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The player with the lower score.
    pub winner: PlayerId,
    /// The human's final score.
    pub human_score: u32,
    /// The CPU's final score.
    pub cpu_score: u32,
    /// Number of rounds played.
    pub rounds: u32,
}
