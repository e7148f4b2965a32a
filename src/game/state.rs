//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds: players may join or leave.
    WaitingForPlayers,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Every hand is finished and results can be settled.
    RoundOver,
    /// Results have been recorded; the round can be cleared.
    Settled,
}
