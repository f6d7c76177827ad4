//! Deck construction and dealing.

use alloc::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of cards, dealt from the front.
///
/// Dealing removes the card from the deck, so a card that has been dealt into
/// a hand can never be dealt again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, front of the deque first out.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates the standard 52-card deck, one card per face and suit pair.
    ///
    /// The deck is unshuffled: Ace through King of hearts, then diamonds,
    /// spades, and clubs.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for face in Face::ALL {
                cards.push_back(Card::new(face, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The first card in the sequence is the first card dealt. Intended for
    /// fixtures and simulations; no uniqueness check is performed.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Reorders the remaining cards into a pseudo-random permutation.
    ///
    /// No card is lost or duplicated; only the order changes.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn deal_one(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop_front().ok_or(EmptyDeckError)
    }

    /// Returns the remaining cards in deal order.
    #[must_use]
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
