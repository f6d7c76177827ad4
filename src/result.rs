//! Round outcome types.

use alloc::string::String;
use alloc::vec::Vec;

/// Who took the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    /// A single player finished with the highest score.
    Player(String),
    /// The dealer finished with the highest score.
    Dealer,
    /// Two or more participants tied for the highest score.
    Push,
    /// Every participant went bust.
    Nobody,
}

/// Outcome of a single player's hand against the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player finished with the single highest score.
    Win,
    /// Player busted or was outscored.
    Lose,
    /// Player tied for the highest score.
    Push,
}

/// Final standing for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player's name.
    pub name: String,
    /// The player's final score.
    pub score: u8,
    /// Whether the player busted.
    pub busted: bool,
    /// The outcome of the player's hand.
    pub outcome: HandOutcome,
}

/// Result of the round once the dealer has played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Who won the round.
    pub winner: Winner,
    /// Standings for each player, in turn order.
    pub standings: Vec<PlayerStanding>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_busted: bool,
}
