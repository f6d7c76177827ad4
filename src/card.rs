//! Card types.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack, worth 10.
    Jack,
    /// Queen, worth 10.
    Queen,
    /// King, worth 10.
    King,
}

impl Face {
    /// All thirteen faces, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// The candidate scoring values for this face.
    ///
    /// Every face maps to a single value except the Ace, which is worth
    /// either 1 or 11. The choice between the two is made by the hand
    /// scoring algorithm, not by the card.
    #[must_use]
    pub const fn values(self) -> &'static [u8] {
        match self {
            Self::Ace => &[1, 11],
            Self::Two => &[2],
            Self::Three => &[3],
            Self::Four => &[4],
            Self::Five => &[5],
            Self::Six => &[6],
            Self::Seven => &[7],
            Self::Eight => &[8],
            Self::Nine => &[9],
            Self::Ten | Self::Jack | Self::Queen | Self::King => &[10],
        }
    }

    /// Returns whether this face is the Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

/// A playing card.
///
/// Cards are immutable values; two cards are equal iff both the face and the
/// suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face of the card.
    pub face: Face,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
