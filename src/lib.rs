//! A blackjack (pontoon) domain engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages a single round: the
//! opening deal, hit/stick player turns, dealer auto-play, and winner
//! determination. There is no betting, no I/O, and no presentation layer;
//! a hosting layer drives the game and maps its types onto its own views.
//!
//! # Example
//!
//! ```
//! use pontoon::{Deck, Game, GameOptions, Winner};
//!
//! let mut game = Game::new(["alice"], Deck::standard(), GameOptions::default(), 42);
//! game.start().unwrap();
//! game.stick("alice").unwrap();
//! game.play_dealer().unwrap();
//!
//! let outcome = game.determine_winner().unwrap();
//! assert!(matches!(
//!     outcome.winner,
//!     Winner::Player(_) | Winner::Dealer | Winner::Push | Winner::Nobody
//! ));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::{ActionError, AlreadyStartedError, DealerError, EmptyDeckError, OutcomeError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::GameOptions;
pub use player::Player;
pub use result::{HandOutcome, PlayerStanding, RoundOutcome, Winner};
