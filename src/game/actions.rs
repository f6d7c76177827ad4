use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, name: &str) -> Result<usize, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let index = self
            .players
            .iter()
            .position(|p| p.name() == name)
            .ok_or(ActionError::PlayerNotFound)?;

        if index != self.current {
            return Err(ActionError::NotYourTurn);
        }

        Ok(index)
    }

    /// Moves the turn to the next player, or to the dealer once every player
    /// has finished.
    fn advance_turn(&mut self) {
        self.current += 1;
        if self.current >= self.players.len() {
            self.state = GameState::DealerTurn;
        }
    }

    /// Player action: hit (draw a card).
    ///
    /// Draws one card into the named player's hand. A hand that busts is out
    /// of the running and the turn moves on; the round continues for the
    /// remaining players.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not currently taking turns, the player
    /// cannot be found, it is not the player's turn, or the deck is empty. An
    /// empty deck also ends the round on the spot: no participant, the dealer
    /// included, draws again.
    pub fn hit(&mut self, name: &str) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn(name)?;

        let deck = self.dealer.deck_mut();
        let card = match self.players[index].hit(deck) {
            Ok(card) => card,
            Err(err) => {
                self.end_round_exhausted();
                return Err(err.into());
            }
        };

        if self.players[index].hand().status() == HandStatus::Bust {
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: stick (end the turn without drawing).
    ///
    /// # Errors
    ///
    /// Returns an error if players are not currently taking turns, the player
    /// cannot be found, or it is not the player's turn.
    pub fn stick(&mut self, name: &str) -> Result<(), ActionError> {
        let index = self.ensure_player_turn(name)?;

        self.players[index].stick();
        self.advance_turn();

        Ok(())
    }
}
