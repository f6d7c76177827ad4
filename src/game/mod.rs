//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundOutcome;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single round of the game: players, dealer, deck, and turn flow.
///
/// The hosting layer constructs a game from player names and a deck, calls
/// [`Game::start`], relays hit/stick actions, runs the dealer with
/// [`Game::play_dealer`], and reads the result from
/// [`Game::determine_winner`]. All methods take `&mut self`; serializing
/// access to a game instance is the hosting layer's responsibility.
#[derive(Debug, Clone)]
pub struct Game {
    /// Players in turn order.
    players: Vec<Player>,
    /// The dealer, holding the deck.
    dealer: Dealer,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Index of the player whose turn it is.
    current: usize,
    /// Cached outcome once the winner has been determined.
    outcome: Option<RoundOutcome>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game from player names, a deck, and a shuffle seed.
    ///
    /// Players take their turns in the order given. The deck is typically
    /// [`Deck::standard`], handed over unshuffled; shuffling happens in
    /// [`Game::start`].
    #[must_use]
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        deck: Deck,
        options: GameOptions,
        seed: u64,
    ) -> Self {
        Self {
            players: names.into_iter().map(Player::new).collect(),
            dealer: Dealer::new(deck),
            options,
            state: GameState::NotStarted,
            current: 0,
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the named player.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player whose turn it is, if players are still acting.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.state == GameState::PlayerTurn {
            self.players.get(self.current)
        } else {
            None
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.dealer.deck().len()
    }

    /// Returns the round outcome, once the winner has been determined.
    #[must_use]
    pub const fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Ends the round when the deck runs dry: no further deals are possible,
    /// so remaining active players count as stuck and the dealer stands on
    /// its current cards.
    pub(crate) fn end_round_exhausted(&mut self) {
        for player in &mut self.players {
            player.stick();
        }
        self.dealer.reveal_hole();
        self.state = GameState::RoundOver;
    }
}
