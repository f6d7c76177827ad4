//! Game state types.

/// Game state.
///
/// A round moves strictly forward: `NotStarted` to the turn states to
/// `Finished`. `Finished` is terminal; the game is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The game has been created but not started.
    NotStarted,
    /// Players are taking their turns.
    PlayerTurn,
    /// All players are done; the dealer plays out its hand.
    DealerTurn,
    /// The dealer has played and the winner can be determined.
    RoundOver,
    /// The winner has been determined.
    Finished,
}

impl GameState {
    /// Returns whether the round is underway.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn | Self::RoundOver)
    }
}
