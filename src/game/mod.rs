//! Round engine and table state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::dealer::{Dealer, DealerStrategy};
use crate::deck::Deck;
use crate::error::JoinError;
use crate::hand::HandStatus;
use crate::options::TableOptions;
use crate::participant::Participant;
use crate::stats::Ledger;

mod actions;
mod deal;
mod dealer;
mod round;
pub mod state;

pub use state::GameState;

/// A blackjack table: seated players, the dealer, and the deck for the
/// current round.
///
/// Seats are indexed from 0 in joining order. During a round, splitting a
/// hand seats a new participant at the end of the list; those extra seats
/// get their own turn in the same round and are removed by
/// [`clear_round`](Self::clear_round), which folds their statistics back into
/// the seat they came from.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Cards left for the current round.
    deck: Deck,
    /// The dealer.
    dealer: Dealer,
    /// Seated players followed by any split seats of this round.
    seats: Vec<Participant>,
    /// Number of players who keep their seat between rounds.
    roster_len: usize,
    /// Current game state.
    state: GameState,
    /// Seat whose turn it is.
    turn: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.player_count(), 0);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::new(),
            dealer: Dealer::new(options.strategy),
            seats: Vec::new(),
            roster_len: 0,
            state: GameState::WaitingForPlayers,
            turn: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seats a new player and returns their seat index.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the name is blank, or the
    /// table is full.
    pub fn join(&mut self, name: &str) -> Result<usize, JoinError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(JoinError::EmptyName);
        }

        if self.roster_len >= usize::from(self.options.max_players) {
            return Err(JoinError::TableFull);
        }

        self.seats.push(Participant::new(name));
        self.roster_len += 1;
        log::debug!("{name} joined at seat {}", self.roster_len - 1);

        Ok(self.roster_len - 1)
    }

    /// Removes a player between rounds and returns them.
    ///
    /// Players seated after them move down one seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the seat is empty.
    pub fn leave(&mut self, seat: usize) -> Result<Participant, JoinError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }
        if seat >= self.roster_len {
            return Err(JoinError::SeatNotFound);
        }

        self.roster_len -= 1;
        Ok(self.seats.remove(seat))
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Changes the dealer strategy.
    pub const fn set_strategy(&mut self, strategy: DealerStrategy) {
        self.options.strategy = strategy;
        self.dealer.set_strategy(strategy);
    }

    /// Returns the number of seated players, split seats excluded.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.roster_len
    }

    /// Returns the seated players, split seats excluded.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.seats[..self.roster_len]
    }

    /// Returns every seat of the current round, split seats included.
    #[must_use]
    pub fn seats(&self) -> &[Participant] {
        &self.seats
    }

    /// Returns the participant at `seat`.
    #[must_use]
    pub fn seat(&self, seat: usize) -> Option<&Participant> {
        self.seats.get(seat)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside the player turn phase.
    #[must_use]
    pub fn current_seat(&self) -> Option<usize> {
        if matches!(self.state, GameState::PlayerTurn) && self.turn < self.seats.len() {
            Some(self.turn)
        } else {
            None
        }
    }

    /// Returns the seated players' statistics as a ledger.
    #[must_use]
    pub fn ledger(&self) -> Ledger {
        Ledger::from_participants(self.players())
    }

    /// Restores seated players' statistics from a ledger by name.
    ///
    /// Returns how many players were restored.
    pub fn restore_statistics(&mut self, ledger: &Ledger) -> usize {
        let restored = ledger.restore(&mut self.seats[..self.roster_len]);
        log::info!("restored statistics for {restored} players");
        restored
    }

    fn current_hand_inactive(&self) -> bool {
        self.seats
            .get(self.turn)
            .is_some_and(|p| p.hand().status() != HandStatus::Active)
    }

    fn advance_if_current_inactive(&mut self) {
        if self.current_hand_inactive() {
            self.advance_to_next_active_hand();
        } else if self.turn >= self.seats.len() {
            self.state = GameState::DealerTurn;
        }
    }

    /// Clears all hands and split seats (called at the end of a round).
    ///
    /// Statistics earned by split seats are added to the player they were
    /// split from. The table returns to the `WaitingForPlayers` state.
    pub fn clear_round(&mut self) {
        let split_seats = self.seats.split_off(self.roster_len);
        for split in &split_seats {
            if let Some(origin) = split.split_of().and_then(|i| self.seats.get_mut(i)) {
                origin.absorb_statistics(split.statistics());
            }
        }

        for participant in &mut self.seats {
            participant.clear_hand();
        }
        self.dealer.clear();
        self.turn = 0;
        self.state = GameState::WaitingForPlayers;
    }
}
