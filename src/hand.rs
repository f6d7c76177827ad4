//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Scores a set of cards with the soft/hard Ace rule.
///
/// Every Ace is counted as 11 first, then Aces are downgraded to 1 one at a
/// time while the total exceeds 21. Returns the score and whether the hand is
/// soft (an Ace still counted as 11).
pub(crate) fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.face.is_ace() {
            aces += 1;
        }
        // Highest candidate value first; Aces enter at 11.
        let high = card.face.values().last().copied().unwrap_or(0);
        value = value.saturating_add(high);
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Turn status of a player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and may still hit.
    Active,
    /// Player has stuck.
    Stuck,
    /// Hand has busted (over 21).
    Bust,
}

/// A player's hand.
///
/// Hands only grow during a round; there is no removal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current turn status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand.
    ///
    /// A hand whose score exceeds 21 becomes [`HandStatus::Bust`].
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let (value, _) = evaluate_cards(&self.cards);
        if value > 21 {
            self.status = HandStatus::Bust;
        }
    }

    /// Marks the hand as stuck, ending its turn.
    ///
    /// Idempotent; a busted hand stays busted.
    pub const fn stick(&mut self) {
        if matches!(self.status, HandStatus::Active) {
            self.status = HandStatus::Stuck;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current turn status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Calculates the score of the hand.
    ///
    /// Recomputed from the cards on every call. Aces are counted as 11 if
    /// possible without busting, otherwise as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is bust (score strictly over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards scoring 21.
    ///
    /// Informational only; a natural carries no scoring bonus.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
///
/// Identical scoring to a player hand, plus hole-card visibility: the second
/// card stays face down until the dealer starts playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible score (only the up card until the hole card is
    /// revealed).
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        if self.hole_revealed {
            self.score()
        } else {
            self.cards
                .first()
                .map_or(0, |c| evaluate_cards(core::slice::from_ref(c)).0)
        }
    }

    /// Calculates the full score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is bust (score strictly over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards scoring 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
