use crate::deck::DeckSource;
use crate::error::{DealError, DeckError};
use crate::event::Seat;
use crate::result::Outcome;
use crate::store::BankrollStore;

use super::{RoundState, Session};

impl<S: BankrollStore, D: DeckSource> Session<S, D> {
    /// Places the bet and deals a new round.
    ///
    /// A fresh deck is shuffled, both hands are cleared and the bet is taken
    /// from the bankroll. Cards go player, dealer, player, dealer, with the
    /// dealer's second card face down. A player blackjack settles the round
    /// at once: push against a dealer blackjack, blackjack otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not betting or the bankroll cannot
    /// cover the bet. If the deck runs out the round is aborted and
    /// [`DealError::Deck`] is returned.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }

        let bet = self.ledger.place_bet()?;
        #[expect(clippy::cast_possible_wrap, reason = "bet values fit in isize")]
        let delta = -(bet as isize);
        self.bankroll_changed(delta);

        self.deck = self.source.fresh_deck();
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.result = None;
        self.set_state(RoundState::Dealing);

        if let Err(err) = self.deal_initial_cards() {
            return Err(self.abort_round(err).into());
        }

        if self.player_hand.is_blackjack() {
            self.reveal_hole();
            let outcome = if self.dealer_hand.is_blackjack() {
                Outcome::Push
            } else {
                Outcome::Blackjack
            };
            self.resolve(outcome);
        } else {
            self.set_state(RoundState::PlayerTurn);
        }

        Ok(())
    }

    fn deal_initial_cards(&mut self) -> Result<(), DeckError> {
        self.draw_to(Seat::Player, false)?;
        self.draw_to(Seat::Dealer, false)?;
        self.draw_to(Seat::Player, false)?;
        self.draw_to(Seat::Dealer, true)?;
        Ok(())
    }
}
