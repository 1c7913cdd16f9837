//! Error types for session operations.
//!
//! Every error returned by a [`Session`](crate::Session) action means the
//! action was rejected and the session is exactly as it was before the call,
//! except for [`DeckError`], which aborts the round in progress.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Tried to draw from an empty deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors raised by the bankroll ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The bankroll cannot cover the current bet.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The bet was already doubled this round.
    #[error("bet already doubled this round")]
    AlreadyDoubled,
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid session state for dealing.
    #[error("invalid session state for dealing")]
    InvalidState,
    /// The bankroll cannot cover the bet.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The deck ran out mid-deal; the round was aborted.
    #[error("round aborted: {0}")]
    Deck(#[from] DeckError),
}

impl From<LedgerError> for DealError {
    fn from(_: LedgerError) -> Self {
        Self::InsufficientFunds
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid session state for this action.
    #[error("invalid session state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The deck ran out mid-action; the round was aborted.
    #[error("round aborted: {0}")]
    Deck(#[from] DeckError),
}

impl From<LedgerError> for ActionError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds => Self::InsufficientFunds,
            LedgerError::AlreadyDoubled => Self::CannotDouble,
        }
    }
}

/// Errors that can occur when moving between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid session state for this transition.
    #[error("invalid session state for this transition")]
    InvalidState,
}
