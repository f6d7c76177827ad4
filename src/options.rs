//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pontoon::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle(false)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the deck is shuffled when the game starts. Disable for
    /// deterministic fixture decks.
    pub shuffle: bool,
    /// Whether the dealer stands on a soft 17 or keeps drawing.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets whether the deck is shuffled on start.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether the dealer stands on a soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
