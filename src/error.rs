//! Error types for game operations.

use thiserror::Error;

/// Error returned when a card is requested from an exhausted deck.
///
/// This is an expected edge condition in small-deck or long games, not a
/// fatal one: the game responds by ending the round with no further deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Error returned when a game is started more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the game has already been started")]
pub struct AlreadyStartedError;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The deck ran out of cards and the round has ended.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for dealer play.
    #[error("invalid game state for dealer play")]
    InvalidState,
}

/// Errors that can occur when determining the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// Invalid game state for determining a winner.
    #[error("invalid game state for determining a winner")]
    InvalidState,
}
