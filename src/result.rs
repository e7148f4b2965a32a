//! Round result types for showdown.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Result of a single hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl HandOutcome {
    /// Compares a finished hand against the dealer's finished hand.
    ///
    /// A bust player always loses, even when the dealer also busts.
    #[must_use]
    pub const fn resolve(player_value: u8, dealer_value: u8) -> Self {
        if player_value > 21 {
            Self::Lose
        } else if dealer_value > 21 || player_value > dealer_value {
            Self::Win
        } else if player_value < dealer_value {
            Self::Lose
        } else {
            Self::Push
        }
    }
}

/// Result for a single seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    /// The seat index.
    pub seat: usize,
    /// The seated participant's name.
    pub name: String,
    /// For split hands, the seat the hand was split from.
    pub split_of: Option<usize>,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The player's final cards.
    pub cards: Vec<Card>,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each seat, split hands included.
    pub seats: Vec<SeatResult>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
