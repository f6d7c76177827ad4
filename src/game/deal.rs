use crate::error::AlreadyStartedError;

use super::{Game, GameState};

impl Game {
    /// Starts the game: shuffles the deck, then deals the opening hands.
    ///
    /// Each player receives two cards in turn order, then the dealer takes
    /// two. The game moves to [`GameState::PlayerTurn`], or straight to
    /// [`GameState::DealerTurn`] when there are no players. If the deck runs
    /// out during the opening deal the round ends immediately with the cards
    /// already dealt.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyStartedError`] unless the game is in
    /// [`GameState::NotStarted`].
    pub fn start(&mut self) -> Result<(), AlreadyStartedError> {
        if self.state != GameState::NotStarted {
            return Err(AlreadyStartedError);
        }

        if self.options.shuffle {
            self.dealer.shuffle(&mut self.rng);
        }

        let dealt = self.dealer.deal_initial(&mut self.players);

        self.current = 0;
        if dealt.is_err() {
            self.end_round_exhausted();
        } else if self.players.is_empty() {
            self.state = GameState::DealerTurn;
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(())
    }
}
