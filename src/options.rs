//! Betting round configuration options.

/// Configuration options for a single betting round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pkrs::RoundOptions;
///
/// // Preflop with a big blind of 2: the price to call and the raise
/// // increment both start at 2.
/// let options = RoundOptions::default().with_bet_size(2);
/// assert_eq!(options.opening_raise(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoundOptions {
    /// Price to call when the round opens (the big blind preflop, 0 after).
    pub bet_size: usize,
    /// Raise increment when the round opens. Falls back to `bet_size`.
    pub raise: Option<usize>,
}

impl RoundOptions {
    /// Sets the opening price to call.
    ///
    /// This also becomes the opening raise increment unless
    /// [`with_raise`](Self::with_raise) overrides it.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_bet_size(50);
    /// assert_eq!(options.bet_size, 50);
    /// assert_eq!(options.opening_raise(), 50);
    /// ```
    #[must_use]
    pub const fn with_bet_size(mut self, bet: usize) -> Self {
        self.bet_size = bet;
        self
    }

    /// Sets the opening raise increment.
    ///
    /// After the flop nothing is owed, but the first bet must still be at
    /// least a big blind.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_raise(2);
    /// assert_eq!(options.bet_size, 0);
    /// assert_eq!(options.opening_raise(), 2);
    /// ```
    #[must_use]
    pub const fn with_raise(mut self, raise: usize) -> Self {
        self.raise = Some(raise);
        self
    }

    /// Returns the raise increment the round opens with.
    #[must_use]
    pub const fn opening_raise(&self) -> usize {
        match self.raise {
            Some(raise) => raise,
            None => self.bet_size,
        }
    }
}
