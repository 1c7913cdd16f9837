//! Round outcome types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// Player has a natural and the dealer does not.
    Blackjack,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Message shown to the player for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack!",
            Self::Win => "You Win!",
            Self::Lose => "Dealer Wins",
            Self::Push => "Push",
        }
    }
}

/// Direction the bankroll moved when a round was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Trend {
    /// Paid back more than the stake.
    Up,
    /// Nothing paid back.
    Down,
    /// Stake returned exactly.
    Flat,
}

/// Settlement of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// Total wagered this round, doubled if the player doubled down.
    pub bet: usize,
    /// Amount credited back to the bankroll.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Message shown to the player.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.outcome.message()
    }

    /// Bankroll movement, for win/lose animation.
    #[must_use]
    pub const fn trend(&self) -> Trend {
        if self.payout > self.bet {
            Trend::Up
        } else if self.payout == 0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}
