use alloc::vec::Vec;

use crate::card::Card;
use crate::dealer::DealerOutcome;
use crate::error::ShowdownError;
use crate::result::{HandOutcome, RoundResult, SeatResult};

use super::{GameState, Table};

impl Table {
    /// Turns the dealer's hole card face up.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn reveal_dealer_hole(&mut self) -> Result<(), ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();
        Ok(())
    }

    /// Reveals the hole card if needed, then draws one card for the dealer
    /// if the strategy requires it.
    ///
    /// Returns `None` once the dealer is done drawing; finish the turn with
    /// [`dealer_play`](Self::dealer_play).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_draw(&mut self) -> Result<Option<Card>, ShowdownError> {
        self.reveal_dealer_hole()?;
        Ok(self.dealer.draw_if_needed(&mut self.deck)?)
    }

    /// Dealer plays their hand according to the table strategy.
    ///
    /// The dealer reveals their hole card and draws until reaching the
    /// strategy threshold or busting. The dealer plays even when every
    /// player has busted.
    ///
    /// Returns the cards drawn by this call and how the turn ended; cards
    /// already taken through [`dealer_draw`](Self::dealer_draw) are not
    /// repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<(Vec<Card>, DealerOutcome), ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let (drawn, outcome) = self.dealer.play_turn(&mut self.deck)?;
        log::debug!("dealer finished with {outcome:?}");

        self.state = GameState::RoundOver;

        Ok((drawn, outcome))
    }

    /// Performs the showdown and records every seat's outcome.
    ///
    /// This function:
    /// 1. Compares each seat's hand to the dealer's hand
    /// 2. Raises each non-bust seat's best score
    /// 3. Records a win, loss or push for each seat
    /// 4. Returns detailed results for each seat
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();
        if !dealer_bust {
            self.dealer.participant_mut().update_max_score(dealer_value);
        }

        let mut seat_results = Vec::with_capacity(self.seats.len());

        for (seat, participant) in self.seats.iter_mut().enumerate() {
            let player_value = participant.score();
            let outcome = HandOutcome::resolve(player_value, dealer_value);

            if !participant.is_busted() {
                participant.update_max_score(player_value);
            }

            match outcome {
                HandOutcome::Win => participant.record_win(),
                HandOutcome::Lose => participant.record_loss(),
                HandOutcome::Push => participant.record_push(),
            }

            log::info!(
                "{}: {outcome:?} ({player_value} vs {dealer_value})",
                participant.name()
            );

            seat_results.push(SeatResult {
                seat,
                name: participant.name().into(),
                split_of: participant.split_of(),
                outcome,
                cards: participant.hand().cards().to_vec(),
                player_value,
                dealer_value,
            });
        }

        self.state = GameState::Settled;

        Ok(RoundResult {
            seats: seat_results,
            dealer_cards: self.dealer.hand().cards().to_vec(),
            dealer_value,
            dealer_bust,
        })
    }
}
