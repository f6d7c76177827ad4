//! Player identity and actions.

use alloc::string::String;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::Hand;

/// A named participant holding exactly one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player's name.
    name: String,
    /// The player's hand.
    hand: Hand,
}

impl Player {
    /// Creates a new player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Draws one card from the deck into the hand.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyDeckError`] when the deck is exhausted.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, EmptyDeckError> {
        let card = deck.deal_one()?;
        self.hand.add_card(card);
        Ok(card)
    }

    /// Ends the player's turn without drawing.
    ///
    /// Idempotent. That no further hits are permitted afterwards is enforced
    /// by the game's turn state, not here.
    pub const fn stick(&mut self) {
        self.hand.stick();
    }
}
