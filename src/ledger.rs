//! Bankroll and bet accounting.

use crate::error::LedgerError;
use crate::options::{RoundingMode, SessionOptions};
use crate::result::Outcome;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Amount credited back for a settled bet, stake included.
///
/// ```
/// use birdjack::{Outcome, SessionOptions, ledger::payout};
///
/// let options = SessionOptions::default();
/// assert_eq!(payout(Outcome::Blackjack, 25, &options), 87);
/// assert_eq!(payout(Outcome::Win, 25, &options), 50);
/// assert_eq!(payout(Outcome::Push, 25, &options), 25);
/// assert_eq!(payout(Outcome::Lose, 25, &options), 0);
/// ```
#[must_use]
pub fn payout(outcome: Outcome, bet: usize, options: &SessionOptions) -> usize {
    match outcome {
        Outcome::Blackjack => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * options.blackjack_pays;
            bet + round_amount(winnings, options.rounding_blackjack)
        }
        Outcome::Win => bet * 2,
        Outcome::Push => bet,
        Outcome::Lose => 0,
    }
}

/// Tracks the bankroll and the bet riding on the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    bankroll: usize,
    current_bet: usize,
    base_bet: usize,
    doubled: bool,
}

impl Ledger {
    /// Creates a ledger with the given bankroll and base bet.
    #[must_use]
    pub const fn new(bankroll: usize, base_bet: usize) -> Self {
        Self {
            bankroll,
            current_bet: base_bet,
            base_bet,
            doubled: false,
        }
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet for the current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the base bet.
    #[must_use]
    pub const fn base_bet(&self) -> usize {
        self.base_bet
    }

    /// Returns whether the bet was doubled this round.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the bankroll can cover the current bet once more.
    #[must_use]
    pub const fn can_cover_bet(&self) -> bool {
        self.bankroll >= self.current_bet
    }

    /// Returns whether the bankroll can no longer cover the base bet.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.bankroll < self.base_bet
    }

    /// Takes the current bet out of the bankroll and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll cannot cover the bet.
    pub const fn place_bet(&mut self) -> Result<usize, LedgerError> {
        if !self.can_cover_bet() {
            return Err(LedgerError::InsufficientFunds);
        }
        self.bankroll -= self.current_bet;
        Ok(self.current_bet)
    }

    /// Takes the current bet out again and doubles it. Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet was already doubled or the bankroll cannot
    /// cover it.
    pub const fn double(&mut self) -> Result<usize, LedgerError> {
        if self.doubled {
            return Err(LedgerError::AlreadyDoubled);
        }
        if !self.can_cover_bet() {
            return Err(LedgerError::InsufficientFunds);
        }
        self.bankroll -= self.current_bet;
        self.current_bet *= 2;
        self.doubled = true;
        Ok(self.current_bet)
    }

    /// Adds `amount` to the bankroll.
    pub const fn credit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    /// Restores the base bet for the next round.
    pub const fn reset_bet(&mut self) {
        self.current_bet = self.base_bet;
        self.doubled = false;
    }

    /// Resets to a fresh bankroll with the base bet.
    pub const fn restart(&mut self, bankroll: usize) {
        self.bankroll = bankroll;
        self.reset_bet();
    }
}
