use crate::deck::Deck;
use crate::error::RoundError;
use crate::result::RoundResult;
use crate::turn::{Action, ActionSource, Choice, TableEvent, TableObserver};

use super::{GameState, Table};

impl Table {
    /// Plays one full round with a freshly shuffled deck.
    ///
    /// Seats act in order, asking `source` for each decision; seats created
    /// by splits act after the seats already at the table. The dealer then
    /// plays, every seat is settled, and the table is cleared for the next
    /// round. `observer` is notified after every change.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be dealt, the deck runs out, or
    /// `source` gives no decision. No outcome is recorded for an abandoned
    /// round, and the table is cleared either way so the next round can start.
    pub fn play_round<S, O>(
        &mut self,
        source: &mut S,
        observer: &mut O,
    ) -> Result<RoundResult, RoundError>
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        self.deal()?;
        self.finish_round(source, observer)
    }

    /// Plays one full round dealing from the given deck as-is.
    ///
    /// See [`play_round`](Self::play_round).
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be dealt or the deck runs out.
    pub fn play_round_with<S, O>(
        &mut self,
        deck: Deck,
        source: &mut S,
        observer: &mut O,
    ) -> Result<RoundResult, RoundError>
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        self.deal_with(deck)?;
        self.finish_round(source, observer)
    }

    fn finish_round<S, O>(
        &mut self,
        source: &mut S,
        observer: &mut O,
    ) -> Result<RoundResult, RoundError>
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        let result = self.run_round(source, observer);
        if let Err(err) = &result {
            log::warn!("round abandoned: {err}");
        }
        self.clear_round();
        result
    }

    fn run_round<S, O>(
        &mut self,
        source: &mut S,
        observer: &mut O,
    ) -> Result<RoundResult, RoundError>
    where
        S: ActionSource + ?Sized,
        O: TableObserver + ?Sized,
    {
        observer.notify(self, &TableEvent::Dealt);

        while self.state == GameState::PlayerTurn {
            let (Some(seat), Some(legal)) = (self.current_seat(), self.legal_actions()) else {
                break;
            };
            let choice = source
                .choose(self, seat, &legal)
                .ok_or(RoundError::Abandoned(seat))?;
            self.apply_choice(seat, choice, observer)?;
        }

        self.reveal_dealer_hole()?;
        observer.notify(self, &TableEvent::HoleRevealed);

        while let Some(card) = self.dealer_draw()? {
            observer.notify(self, &TableEvent::DealerDrew { card });
        }

        let (_, outcome) = self.dealer_play()?;
        observer.notify(self, &TableEvent::DealerFinished(outcome));

        let result = self.showdown()?;
        observer.notify(self, &TableEvent::Resolved(&result));

        Ok(result)
    }

    fn apply_choice<O>(
        &mut self,
        seat: usize,
        choice: Choice,
        observer: &mut O,
    ) -> Result<(), RoundError>
    where
        O: TableObserver + ?Sized,
    {
        match choice.action() {
            Action::Hit => {
                let card = self.hit(seat)?;
                observer.notify(self, &TableEvent::Hit { seat, card });
            }
            Action::Stand => {
                self.stand(seat)?;
                observer.notify(self, &TableEvent::Stood { seat });
            }
            Action::DoubleDown => {
                let card = self.double_down(seat)?;
                observer.notify(self, &TableEvent::DoubledDown { seat, card });
            }
            Action::Split => {
                let new_seat = self.split(seat)?;
                observer.notify(self, &TableEvent::Split { seat, new_seat });
            }
        }

        if self.seats[seat].is_busted() {
            observer.notify(self, &TableEvent::Busted { seat });
        }

        Ok(())
    }
}
