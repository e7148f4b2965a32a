use crate::deck::Deck;
use crate::error::DealError;

use super::{GameState, Table};

impl Table {
    fn deal_one_card_to_players(&mut self) -> Result<(), DealError> {
        for participant in &mut self.seats {
            participant
                .draw(&mut self.deck)
                .map_err(|_| DealError::NotEnoughCards)?;
        }
        Ok(())
    }

    /// Starts a round with a freshly built and shuffled deck.
    ///
    /// Any hands left from the previous round are cleared first.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or nobody is seated.
    pub fn deal(&mut self) -> Result<(), DealError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.deal_with(deck)
    }

    /// Starts a round dealing from the given deck as-is.
    ///
    /// Each player gets one card, then the dealer its up card, then each
    /// player a second card, then the dealer its hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, nobody is seated, or the
    /// deck cannot cover the initial deal.
    pub fn deal_with(&mut self, deck: Deck) -> Result<(), DealError> {
        match self.state {
            GameState::WaitingForPlayers => {}
            GameState::Settled => self.clear_round(),
            _ => return Err(DealError::InvalidState),
        }

        if self.roster_len == 0 {
            return Err(DealError::NoPlayers);
        }

        let cards_needed = (self.roster_len + 1) * 2;
        if deck.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        self.deck = deck;

        // First card to each player, then the dealer's up card
        self.deal_one_card_to_players()?;
        self.dealer
            .draw(&mut self.deck)
            .map_err(|_| DealError::NotEnoughCards)?;

        // Second card to each player, then the dealer's hole card
        self.deal_one_card_to_players()?;
        self.dealer
            .draw(&mut self.deck)
            .map_err(|_| DealError::NotEnoughCards)?;

        log::debug!(
            "dealt {} players, {} cards left",
            self.roster_len,
            self.deck.len()
        );

        self.turn = 0;
        self.state = GameState::PlayerTurn;
        self.advance_if_current_inactive();

        Ok(())
    }
}
