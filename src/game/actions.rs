use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::turn::{Action, Choice, LegalActions};

use super::{GameState, Table};

impl Table {
    fn ensure_player_turn(&self, seat: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let participant = self.seats.get(seat).ok_or(ActionError::SeatNotFound)?;

        if seat != self.turn {
            return Err(ActionError::NotYourTurn);
        }

        if participant.hand().status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        Ok(())
    }

    /// Returns the seat a split at `seat` is counted against.
    fn split_origin(&self, seat: usize) -> usize {
        self.seats
            .get(seat)
            .and_then(|p| p.split_of())
            .unwrap_or(seat)
    }

    fn splits_used(&self, origin: usize) -> usize {
        self.seats[self.roster_len..]
            .iter()
            .filter(|p| p.split_of() == Some(origin))
            .count()
    }

    fn can_split_more(&self, seat: usize) -> bool {
        self.splits_used(self.split_origin(seat)) < usize::from(self.options.max_splits)
    }

    /// Returns the actions open to the seat whose turn it is.
    ///
    /// Returns `None` outside the player turn phase.
    #[must_use]
    pub fn legal_actions(&self) -> Option<LegalActions> {
        let seat = self.current_seat()?;
        let participant = &self.seats[seat];

        Some(LegalActions::new(
            participant.can_double_down(),
            participant.can_split() && self.can_split_more(seat),
        ))
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that goes over 21 is finished and the turn moves on.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// seat's turn, the hand is not active, or the deck is empty.
    pub fn hit(&mut self, seat: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(seat)?;

        let participant = &mut self.seats[seat];
        let card = participant.draw(&mut self.deck)?;
        log::debug!(
            "{} hits {card}, value {}",
            participant.name(),
            participant.score()
        );

        if participant.hand().status() != HandStatus::Active {
            self.advance_to_next_active_hand();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// seat's turn, or the hand is not active.
    pub fn stand(&mut self, seat: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(seat)?;

        self.seats[seat].hand_mut().set_status(HandStatus::Stand);
        self.advance_to_next_active_hand();

        Ok(())
    }

    /// Player action: Double down (receive exactly one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// seat's turn, the hand is not active, the hand does not hold exactly two
    /// cards, or the deck is empty.
    pub fn double_down(&mut self, seat: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(seat)?;

        let participant = &mut self.seats[seat];
        if !participant.can_double_down() {
            return Err(ActionError::CannotDouble);
        }

        let card = participant.draw(&mut self.deck)?;
        let hand = participant.hand_mut();

        // If not bust, the hand is finished anyway
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Doubled);
        }
        log::debug!(
            "{} doubles down on {card}, value {}",
            participant.name(),
            participant.score()
        );

        self.advance_to_next_active_hand();

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new seat at the end of the table named
    /// after the player. Each hand then receives one card, the original hand
    /// first. The splitting seat keeps the turn; the new seat plays when its
    /// turn comes up later in the same round.
    ///
    /// Returns the new seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// seat's turn, the hand is not active, the hand cannot be split, the
    /// maximum splits are reached, or the deck cannot supply both cards.
    pub fn split(&mut self, seat: usize) -> Result<usize, ActionError> {
        self.ensure_player_turn(seat)?;

        if !self.seats[seat].can_split() {
            return Err(ActionError::CannotSplit);
        }

        if !self.can_split_more(seat) {
            return Err(ActionError::MaxSplitsReached);
        }

        if self.deck.len() < 2 {
            return Err(ActionError::NoCards);
        }

        let mut new_participant = self.seats[seat].split(seat)?;
        self.seats[seat].draw(&mut self.deck)?;
        new_participant.draw(&mut self.deck)?;

        let new_seat = self.seats.len();
        log::debug!(
            "{} splits into seat {new_seat}",
            self.seats[seat].name()
        );
        self.seats.push(new_participant);

        Ok(new_seat)
    }

    /// Applies a chosen action to the seat whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn act(&mut self, seat: usize, choice: Choice) -> Result<(), ActionError> {
        match choice.action() {
            Action::Hit => self.hit(seat).map(|_| ()),
            Action::Stand => self.stand(seat),
            Action::DoubleDown => self.double_down(seat).map(|_| ()),
            Action::Split => self.split(seat).map(|_| ()),
        }
    }

    /// Advances to the next active hand, skipping finished ones.
    ///
    /// Seats added by splits sit at the end of the table, so they are reached
    /// before the dealer plays.
    pub(super) fn advance_to_next_active_hand(&mut self) {
        self.turn += 1;
        while self
            .seats
            .get(self.turn)
            .is_some_and(|p| p.hand().status() != HandStatus::Active)
        {
            self.turn += 1;
        }

        if self.turn >= self.seats.len() {
            log::debug!("all hands finished, dealer's turn");
            self.state = GameState::DealerTurn;
        }
    }
}
