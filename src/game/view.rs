//! Read-only snapshot of a session for rendering.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::DeckSource;
use crate::result::{Outcome, RoundResult};
use crate::store::BankrollStore;

use super::{RoundState, Session};

const BROKE_MESSAGE: &str = "Broke!";

/// A card as the player may see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "face", rename_all = "snake_case"))]
pub enum CardView {
    /// Face up.
    Up {
        /// The card.
        card: Card,
    },
    /// Face down; the card is not disclosed.
    Down,
}

/// Which actions the session accepts right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Actions {
    /// `deal` is accepted.
    pub deal: bool,
    /// `hit` is accepted.
    pub hit: bool,
    /// `stand` is accepted.
    pub stand: bool,
    /// `double_down` is accepted.
    pub double_down: bool,
    /// `next_round` is accepted.
    pub next_round: bool,
    /// `restart` is accepted.
    pub restart: bool,
}

/// Everything a front-end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// Current state.
    pub state: RoundState,
    /// Player's cards.
    pub player_cards: Vec<Card>,
    /// Dealer's cards, hole card hidden until revealed.
    pub dealer_cards: Vec<CardView>,
    /// Player total, if the player holds cards.
    pub player_value: Option<u8>,
    /// Dealer total as far as it is visible.
    pub dealer_value: Option<u8>,
    /// Bankroll.
    pub bankroll: usize,
    /// Bet for the current round.
    pub current_bet: usize,
    /// Last round's outcome, until the next deal.
    pub outcome: Option<Outcome>,
    /// Last round's settlement, until the next deal.
    pub result: Option<RoundResult>,
    /// Message for the player.
    pub message: Option<&'static str>,
    /// Whether the session is broke.
    pub broke: bool,
    /// Accepted actions.
    pub actions: Actions,
}

impl<S: BankrollStore, D: DeckSource> Session<S, D> {
    /// Returns the actions accepted in the current state.
    pub fn actions(&self) -> Actions {
        let player_turn = self.state == RoundState::PlayerTurn;
        Actions {
            deal: self.state == RoundState::Betting && self.ledger.can_cover_bet(),
            hit: player_turn,
            stand: player_turn,
            double_down: self.can_double(),
            next_round: self.state == RoundState::Resolution,
            restart: self.state == RoundState::Broke,
        }
    }

    /// Takes a snapshot of everything visible at the table.
    pub fn snapshot(&self) -> Snapshot {
        let revealed = self.dealer_hand.is_hole_revealed();
        let dealer_cards = self
            .dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| {
                if index == 1 && !revealed {
                    CardView::Down
                } else {
                    CardView::Up { card }
                }
            })
            .collect();

        let broke = self.is_broke();
        let message = if broke {
            Some(BROKE_MESSAGE)
        } else {
            self.result.as_ref().map(RoundResult::message)
        };

        Snapshot {
            state: self.state,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards,
            player_value: (!self.player_hand.is_empty()).then(|| self.player_hand.value()),
            dealer_value: (!self.dealer_hand.is_empty()).then(|| self.dealer_hand.visible_value()),
            bankroll: self.ledger.bankroll(),
            current_bet: self.ledger.current_bet(),
            outcome: self.outcome(),
            result: self.result,
            message,
            broke,
            actions: self.actions(),
        }
    }
}
