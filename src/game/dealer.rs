use alloc::string::ToString;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, OutcomeError};
use crate::result::{HandOutcome, PlayerStanding, RoundOutcome, Winner};

use super::{Game, GameState};

impl Game {
    /// Plays out the dealer's hand according to the house rules.
    ///
    /// Valid once every player has stuck or busted. The dealer reveals the
    /// hole card and draws until reaching 17 or higher, or busting; whether a
    /// soft 17 stands is governed by the game options. If the deck runs out
    /// the dealer stands on what it has.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in [`GameState::DealerTurn`].
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let drawn = self.dealer.auto_play(self.options.stand_on_soft_17);
        self.state = GameState::RoundOver;

        Ok(drawn)
    }

    /// Determines the winner and finishes the game.
    ///
    /// Among the non-bust players and the dealer if not bust, the single
    /// highest score wins. A tie for the highest score is a push; if every
    /// participant busts, nobody wins. A busted player loses outright.
    ///
    /// The first call computes the outcome and transitions the game to
    /// [`GameState::Finished`]; further calls return the cached outcome
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    pub fn determine_winner(&mut self) -> Result<RoundOutcome, OutcomeError> {
        match self.state {
            GameState::RoundOver => {}
            GameState::Finished => {
                if let Some(outcome) = &self.outcome {
                    return Ok(outcome.clone());
                }
                return Err(OutcomeError::InvalidState);
            }
            _ => return Err(OutcomeError::InvalidState),
        }

        let dealer_score = self.dealer.hand().score();
        let dealer_busted = self.dealer.hand().is_bust();

        // Highest score still standing, dealer included.
        let mut top = if dealer_busted {
            None
        } else {
            Some(dealer_score)
        };
        for player in &self.players {
            if player.hand().is_bust() {
                continue;
            }
            let score = player.hand().score();
            if top.is_none_or(|t| score > t) {
                top = Some(score);
            }
        }

        let mut contenders = 0usize;
        let mut winner = Winner::Nobody;
        if let Some(top) = top {
            if !dealer_busted && dealer_score == top {
                contenders += 1;
                winner = Winner::Dealer;
            }
            for player in &self.players {
                if !player.hand().is_bust() && player.hand().score() == top {
                    contenders += 1;
                    if contenders == 1 {
                        winner = Winner::Player(player.name().to_string());
                    }
                }
            }
            if contenders > 1 {
                winner = Winner::Push;
            }
        }

        let standings = self
            .players
            .iter()
            .map(|player| {
                let busted = player.hand().is_bust();
                let score = player.hand().score();
                let outcome = if !busted && Some(score) == top {
                    if contenders == 1 {
                        HandOutcome::Win
                    } else {
                        HandOutcome::Push
                    }
                } else {
                    HandOutcome::Lose
                };
                PlayerStanding {
                    name: player.name().to_string(),
                    score,
                    busted,
                    outcome,
                }
            })
            .collect();

        let outcome = RoundOutcome {
            winner,
            standings,
            dealer_score,
            dealer_busted,
        };

        self.outcome = Some(outcome.clone());
        self.state = GameState::Finished;

        Ok(outcome)
    }
}
