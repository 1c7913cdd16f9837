//! Session configuration options.

/// Bankroll a new or restarted session starts with.
pub const INITIAL_BANKROLL: usize = 500;

/// Default wager, restored after every round.
pub const BASE_BET: usize = 25;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack session.
///
/// The defaults are the house rules: 500 starting bankroll, 25 base bet and a
/// blackjack profit of two and a half times the bet, rounded down.
///
/// ```
/// use birdjack::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_initial_bankroll(1_000)
///     .with_base_bet(50);
/// assert_eq!(options.initial_bankroll, 1_000);
/// assert_eq!(options.base_bet, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Bankroll on first run and after a restart.
    pub initial_bankroll: usize,
    /// Default bet placed on every deal.
    pub base_bet: usize,
    /// Blackjack profit as a multiple of the bet.
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            initial_bankroll: INITIAL_BANKROLL,
            base_bet: BASE_BET,
            blackjack_pays: 2.5,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl SessionOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use birdjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_initial_bankroll(200);
    /// assert_eq!(options.initial_bankroll, 200);
    /// ```
    #[must_use]
    pub const fn with_initial_bankroll(mut self, bankroll: usize) -> Self {
        self.initial_bankroll = bankroll;
        self
    }

    /// Sets the base bet.
    ///
    /// # Example
    ///
    /// ```
    /// use birdjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_base_bet(10);
    /// assert_eq!(options.base_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_base_bet(mut self, bet: usize) -> Self {
        self.base_bet = bet;
        self
    }

    /// Sets the blackjack profit multiple.
    ///
    /// # Example
    ///
    /// ```
    /// use birdjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_blackjack_pays(1.5);
    /// assert_eq!(options.blackjack_pays, 1.5);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use birdjack::{RoundingMode, SessionOptions};
    ///
    /// let options = SessionOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
