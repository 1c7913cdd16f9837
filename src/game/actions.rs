use crate::card::Card;
use crate::deck::DeckSource;
use crate::error::ActionError;
use crate::event::{Event, Seat};
use crate::result::Outcome;
use crate::store::BankrollStore;

use super::{RoundState, Session};

impl<S: BankrollStore, D: DeckSource> Session<S, D> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Returns whether doubling down is allowed right now.
    ///
    /// Only as the first action of the turn, and only if the bankroll covers
    /// the bet a second time.
    pub fn can_double(&self) -> bool {
        self.state == RoundState::PlayerTurn
            && self.player_hand.len() == 2
            && !self.ledger.is_doubled()
            && self.ledger.can_cover_bet()
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting reveals the hole card and loses the round. Any other total,
    /// 21 included, keeps the turn with the player.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn. If the deck runs out
    /// the round is aborted and [`ActionError::Deck`] is returned.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self
            .draw_to(Seat::Player, false)
            .map_err(|err| self.abort_round(err))?;

        if self.player_hand.is_bust() {
            self.reveal_hole();
            self.resolve(Outcome::Lose);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer reveals the hole card, plays out and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn. If the deck runs out
    /// during dealer play the round is aborted and [`ActionError::Deck`] is
    /// returned.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.finish_with_dealer()
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player already
    /// acted this turn, or the bankroll cannot cover the extra bet. If the
    /// deck runs out the round is aborted and [`ActionError::Deck`] is
    /// returned.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        // Can only double on first two cards
        if self.player_hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let extra = self.ledger.current_bet();
        let bet = self.ledger.double()?;
        #[expect(clippy::cast_possible_wrap, reason = "bet values fit in isize")]
        let delta = -(extra as isize);
        self.bankroll_changed(delta);
        self.emit(Event::BetChanged { bet });

        let card = self
            .draw_to(Seat::Player, false)
            .map_err(|err| self.abort_round(err))?;

        if self.player_hand.is_bust() {
            self.reveal_hole();
            self.resolve(Outcome::Lose);
        } else {
            self.finish_with_dealer()?;
        }

        Ok(card)
    }

    /// Ends the player's turn: reveal, dealer play-out, settlement.
    fn finish_with_dealer(&mut self) -> Result<(), ActionError> {
        self.set_state(RoundState::DealerTurn);
        self.reveal_hole();
        self.dealer_play().map_err(|err| self.abort_round(err))?;
        let outcome = self.compare_hands();
        self.resolve(outcome);
        Ok(())
    }
}
