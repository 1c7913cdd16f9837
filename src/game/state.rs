//! Round state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundState {
    /// Waiting for the player to deal.
    Betting,
    /// Initial cards are going out.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is settled and the result is on display.
    Resolution,
    /// Bankroll cannot cover the base bet; only a restart is possible.
    Broke,
}

impl RoundState {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_in_round(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn | Self::DealerTurn)
    }
}
