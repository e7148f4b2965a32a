//! Error types for table operations.

use thiserror::Error;

/// A draw was attempted on an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

/// Errors that can occur when joining or leaving the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// A round is in progress.
    #[error("invalid game state for seating players")]
    InvalidState,
    /// Player name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// Every seat is taken.
    #[error("the table is full")]
    TableFull,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Nobody is seated.
    #[error("no players at the table")]
    NoPlayers,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("maximum splits reached")]
    MaxSplitsReached,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DeckExhausted> for ActionError {
    fn from(_: DeckExhausted) -> Self {
        Self::NoCards
    }
}

/// Errors that can occur during the dealer's turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DeckExhausted> for ShowdownError {
    fn from(_: DeckExhausted) -> Self {
        Self::NoCards
    }
}

/// Errors that can occur while playing a full round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// The action source gave no decision for the seat.
    #[error("no action chosen for seat {0}")]
    Abandoned(usize),
}

/// A persisted statistics record that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record has no name.
    #[error("record has an empty name")]
    EmptyName,
    /// A counter field is missing.
    #[error("record is missing the `{0}` field")]
    MissingField(&'static str),
    /// A counter field is not a non-negative integer.
    #[error("record has an invalid `{0}` field")]
    InvalidNumber(&'static str),
    /// Won, lost and pushed do not add up to played.
    #[error("record totals do not add up to games played")]
    InconsistentTotals,
}

/// Errors that can occur while loading or saving statistics.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the statistics file failed.
    #[error("statistics file i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
