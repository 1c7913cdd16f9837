//! Session engine and state management.

use alloc::vec::Vec;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::{Deck, DeckSource, Shuffler};
use crate::error::DeckError;
use crate::event::{Event, Seat};
use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::options::SessionOptions;
use crate::result::{Outcome, RoundResult};
use crate::store::{BankrollStore, MemoryStore};

mod actions;
mod deal;
mod dealer;
pub mod state;
mod view;

pub use dealer::{DEALER_STANDS_ON, dealer_should_draw};
pub use state::RoundState;
pub use view::{Actions, CardView, Snapshot};

/// A single-player blackjack session against an automated dealer.
///
/// The session owns the deck, both hands and the bankroll ledger. Every
/// action runs to completion before returning, dealer play-out included, so
/// no action can interleave with another. Rejected actions return an error
/// and leave the session untouched.
///
/// State changes are queued as [`Event`]s in the order they happen; drain
/// them with [`Session::drain_events`].
pub struct Session<S = MemoryStore, D = Shuffler<ChaCha8Rng>> {
    options: SessionOptions,
    state: RoundState,
    ledger: Ledger,
    deck: Deck,
    player_hand: Hand,
    dealer_hand: DealerHand,
    result: Option<RoundResult>,
    events: Vec<Event>,
    store: S,
    source: D,
}

impl Session {
    /// Creates a session with an in-memory store and a seeded shuffler.
    ///
    /// # Example
    ///
    /// ```
    /// use birdjack::{RoundState, Session, SessionOptions};
    ///
    /// let session = Session::new(SessionOptions::default(), 42);
    /// assert_eq!(session.state(), RoundState::Betting);
    /// assert_eq!(session.bankroll(), 500);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self::with_parts(options, MemoryStore::new(), Shuffler::seeded(seed))
    }
}

impl<S: BankrollStore, D: DeckSource> Session<S, D> {
    /// Creates a session from a bankroll store and a deck source.
    ///
    /// The bankroll is loaded from `store`, falling back to the initial
    /// bankroll. A loaded bankroll below the base bet starts out broke.
    pub fn with_parts(options: SessionOptions, mut store: S, source: D) -> Self {
        let bankroll = store
            .load_bankroll()
            .unwrap_or(options.initial_bankroll);
        let ledger = Ledger::new(bankroll, options.base_bet);
        let state = if ledger.is_broke() {
            RoundState::Broke
        } else {
            RoundState::Betting
        };
        log::debug!("session loaded with bankroll {bankroll}, state {state:?}");

        Self {
            options,
            state,
            ledger,
            deck: Deck::default(),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            result: None,
            events: Vec::new(),
            store,
            source,
        }
    }

    /// Returns the session options.
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the bankroll.
    pub const fn bankroll(&self) -> usize {
        self.ledger.bankroll()
    }

    /// Returns the bet for the current round.
    pub const fn current_bet(&self) -> usize {
        self.ledger.current_bet()
    }

    /// Returns whether the session is broke.
    pub fn is_broke(&self) -> bool {
        self.state == RoundState::Broke
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the last round's settlement, until the next deal.
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the last round's outcome, until the next deal.
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|r| r.outcome)
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the bankroll store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Takes every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    fn set_state(&mut self, state: RoundState) {
        log::debug!("{:?} -> {state:?}", self.state);
        self.state = state;
        self.emit(Event::StateChanged { state });
    }

    /// Saves the bankroll and reports the change.
    fn bankroll_changed(&mut self, delta: isize) {
        let bankroll = self.ledger.bankroll();
        self.store.save_bankroll(bankroll);
        self.emit(Event::BankrollChanged { bankroll, delta });
    }

    /// Draws the top card into `seat`'s hand.
    fn draw_to(&mut self, seat: Seat, face_down: bool) -> Result<Card, DeckError> {
        let card = self.deck.draw()?;
        log::trace!("{seat:?} draws {card}");
        match seat {
            Seat::Player => self.player_hand.add_card(card),
            Seat::Dealer => self.dealer_hand.add_card(card),
        }
        self.emit(Event::CardDealt {
            seat,
            card,
            face_down,
        });
        Ok(card)
    }

    fn reveal_hole(&mut self) {
        if self.dealer_hand.is_hole_revealed() {
            return;
        }
        self.dealer_hand.reveal_hole();
        if let Some(&card) = self.dealer_hand.hole_card() {
            self.emit(Event::HoleRevealed { card });
        }
    }

    /// Returns the state to enter between rounds.
    const fn idle_state(&self) -> RoundState {
        if self.ledger.is_broke() {
            RoundState::Broke
        } else {
            RoundState::Betting
        }
    }

    /// Abandons the round in progress after the deck ran dry.
    ///
    /// The stake goes back to the bankroll and the session returns to
    /// betting; nothing about the round is settled.
    fn abort_round(&mut self, err: DeckError) -> DeckError {
        log::error!("aborting round: {err}");
        let stake = self.ledger.current_bet();
        self.ledger.credit(stake);
        self.ledger.reset_bet();
        #[expect(clippy::cast_possible_wrap, reason = "bet values fit in isize")]
        let delta = stake as isize;
        self.bankroll_changed(delta);
        self.emit(Event::BetChanged {
            bet: self.ledger.current_bet(),
        });
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.deck = Deck::default();
        self.emit(Event::RoundAborted);
        let next = self.idle_state();
        self.set_state(next);
        err
    }
}
