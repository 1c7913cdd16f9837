//! A single-player blackjack session engine with optional `no_std` support.
//!
//! The crate provides a [`Session`] type that runs the round flow against an
//! automated dealer: betting, dealing, player actions, dealer play and
//! settlement, with the bankroll kept in a [`BankrollStore`].
//!
//! # Example
//!
//! ```
//! use birdjack::{RoundState, Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default(), 42);
//! session.deal().unwrap();
//! if session.state() == RoundState::PlayerTurn {
//!     session.stand().unwrap();
//! }
//! assert_eq!(session.state(), RoundState::Resolution);
//! assert_eq!(session.current_bet(), 25);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod store;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckSource, Shuffler};
pub use error::{ActionError, DealError, DeckError, LedgerError, RoundError};
pub use event::{Event, Seat};
pub use game::{Actions, CardView, RoundState, Session, Snapshot};
pub use hand::{DealerHand, Hand};
pub use ledger::Ledger;
pub use options::{BASE_BET, INITIAL_BANKROLL, RoundingMode, SessionOptions};
pub use result::{Outcome, RoundResult, Trend};
pub use store::{BankrollStore, MemoryStore};
