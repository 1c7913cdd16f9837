use crate::deck::DeckSource;
use crate::error::{DeckError, RoundError};
use crate::event::{Event, Seat};
use crate::ledger::payout;
use crate::result::{Outcome, RoundResult};
use crate::store::BankrollStore;

use super::{RoundState, Session};

/// The dealer stands on this total or higher, soft totals included.
pub const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer must draw on `value`.
#[must_use]
pub const fn dealer_should_draw(value: u8) -> bool {
    value < DEALER_STANDS_ON
}

impl<S: BankrollStore, D: DeckSource> Session<S, D> {
    /// Dealer draws one card at a time until reaching 17 or higher.
    ///
    /// Soft 17 stands.
    pub(super) fn dealer_play(&mut self) -> Result<(), DeckError> {
        while dealer_should_draw(self.dealer_hand.value()) {
            self.draw_to(Seat::Dealer, false)?;
        }
        Ok(())
    }

    /// Compares the final hands after the dealer has played.
    pub(super) fn compare_hands(&self) -> Outcome {
        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        if self.dealer_hand.is_bust() || player_value > dealer_value {
            Outcome::Win
        } else if player_value < dealer_value {
            Outcome::Lose
        } else {
            Outcome::Push
        }
    }

    /// Settles the round: credits the payout and restores the base bet.
    pub(super) fn resolve(&mut self, outcome: Outcome) {
        self.set_state(RoundState::Resolution);

        let bet = self.ledger.current_bet();
        let paid = payout(outcome, bet, &self.options);
        self.ledger.credit(paid);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = paid as isize - bet as isize;
        let result = RoundResult {
            outcome,
            bet,
            payout: paid,
            net,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            dealer_bust: self.dealer_hand.is_bust(),
        };
        log::info!(
            "round settled: {outcome:?}, bet {bet}, payout {paid}, bankroll {}",
            self.ledger.bankroll()
        );

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let delta = paid as isize;
        self.bankroll_changed(delta);
        self.result = Some(result);
        self.emit(Event::RoundResolved { result });

        self.ledger.reset_bet();
        if self.ledger.current_bet() != bet {
            self.emit(Event::BetChanged {
                bet: self.ledger.current_bet(),
            });
        }
    }

    /// Leaves the result display and opens the next round.
    ///
    /// Call this once the result has been shown for as long as the front-end
    /// wants. Returns the new state: betting, or broke if the bankroll can no
    /// longer cover the base bet.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round has been resolved.
    pub fn next_round(&mut self) -> Result<RoundState, RoundError> {
        if self.state != RoundState::Resolution {
            return Err(RoundError::InvalidState);
        }
        let next = self.idle_state();
        if next == RoundState::Broke {
            log::info!("bankroll {} is below the base bet", self.ledger.bankroll());
        }
        self.set_state(next);
        Ok(next)
    }

    /// Starts over with the initial bankroll after going broke.
    ///
    /// # Errors
    ///
    /// Returns an error unless the session is broke.
    pub fn restart(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Broke {
            return Err(RoundError::InvalidState);
        }

        let before = self.ledger.bankroll();
        self.ledger.restart(self.options.initial_bankroll);
        #[expect(clippy::cast_possible_wrap, reason = "bankroll values fit in isize")]
        let delta = self.ledger.bankroll() as isize - before as isize;
        self.bankroll_changed(delta);

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.result = None;
        log::info!("session restarted with bankroll {}", self.ledger.bankroll());

        let next = self.idle_state();
        self.set_state(next);
        Ok(())
    }
}
