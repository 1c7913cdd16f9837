//! Events emitted by the session, in the order the state changed.
//!
//! A front-end drains these after each action and plays them back at its own
//! pace (dealing animations, hole card flip, bankroll flashes).

use crate::card::Card;
use crate::game::RoundState;
use crate::result::RoundResult;

/// Who a card was dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A single observable state change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Event {
    /// The session moved to a new state.
    StateChanged {
        /// The new state.
        state: RoundState,
    },
    /// A card was dealt.
    CardDealt {
        /// Receiving hand.
        seat: Seat,
        /// The card.
        card: Card,
        /// Whether it was dealt face down.
        face_down: bool,
    },
    /// The dealer's hole card was turned over.
    HoleRevealed {
        /// The hole card.
        card: Card,
    },
    /// The bankroll changed and was saved.
    BankrollChanged {
        /// New bankroll.
        bankroll: usize,
        /// Signed change.
        delta: isize,
    },
    /// The bet riding on the round changed.
    BetChanged {
        /// New bet.
        bet: usize,
    },
    /// The round was settled.
    RoundResolved {
        /// Settlement details.
        result: RoundResult,
    },
    /// The round was abandoned and the stake returned.
    RoundAborted,
}
