//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next round to be dealt.
    WaitingForRound,
    /// The first card is face up and its effect has not been applied yet.
    FirstCard,
    /// Players are taking turns.
    Playing,
    /// A hand has been emptied and the loser has not been charged yet.
    RoundOver,
    /// A score has reached the points limit.
    GameOver,
}

/// Outcome of a resolved Seven chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SevenChain {
    /// Number of Sevens in the chain, including the one that started it.
    pub sevens: usize,
    /// The player who could not or would not answer and drew the penalty.
    pub drawer: crate::PlayerId,
    /// Cards drawn by the drawer: two per Seven.
    pub drawn: usize,
}
