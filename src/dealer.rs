//! Dealer role: deck ownership, the opening deal, and house-rules play.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::DealerHand;
use crate::player::Player;

/// Score at which the dealer stands.
const STAND_MIN: u8 = 17;

/// The dealer: a hand plus ownership of the deck and the house-rules
/// auto-play policy.
///
/// Composition rather than inheritance: the dealer is not a special kind of
/// [`Player`], it is the participant the deck and the drawing rules are
/// attached to.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// The dealer's own hand.
    hand: DealerHand,
    /// The deck all cards are dealt from.
    deck: Deck,
}

impl Dealer {
    /// Creates a dealer holding the given deck and an empty hand.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            hand: DealerHand::new(),
            deck,
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &DealerHand {
        &self.hand
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Shuffles the owned deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
    }

    /// Hands out the deck for a hitting player to draw from.
    pub(crate) const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Reveals the hole card without playing the hand out.
    pub(crate) const fn reveal_hole(&mut self) {
        self.hand.reveal_hole();
    }

    /// Deals the opening two cards to each player, then to the dealer.
    ///
    /// Each participant receives both cards at once, players in turn order
    /// first and the dealer last. The order is fixed so that fixture decks
    /// map predictably onto hands.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] at the first draw from an exhausted deck;
    /// cards dealt up to that point stay where they landed.
    pub fn deal_initial(&mut self, players: &mut [Player]) -> Result<(), EmptyDeckError> {
        for player in &mut *players {
            for _ in 0..2 {
                player.hit(&mut self.deck)?;
            }
        }

        for _ in 0..2 {
            let card = self.deck.deal_one()?;
            self.hand.add_card(card);
        }

        Ok(())
    }

    /// Plays out the dealer's hand according to the house rules.
    ///
    /// Reveals the hole card, then draws while the score is below 17. On a
    /// soft 17 the dealer stands or keeps drawing per `stand_on_soft_17`.
    /// Drawing stops on a stand, a bust, or an exhausted deck (the dealer
    /// then stands on what it has).
    ///
    /// Returns the cards drawn.
    pub fn auto_play(&mut self, stand_on_soft_17: bool) -> Vec<Card> {
        self.hand.reveal_hole();

        let mut drawn = Vec::new();

        loop {
            let value = self.hand.score();
            let is_soft = self.hand.is_soft();

            // Busts also land here: anything over 17 ends the turn.
            if value > STAND_MIN {
                break;
            }
            if value == STAND_MIN && (!is_soft || stand_on_soft_17) {
                break;
            }

            let Ok(card) = self.deck.deal_one() else {
                break;
            };
            self.hand.add_card(card);
            drawn.push(card);
        }

        drawn
    }
}
