//! Table participants.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DeckExhausted};
use crate::hand::Hand;
use crate::stats::Statistics;

/// Suffix appended to the name of a participant created by a split.
pub const SPLIT_SUFFIX: &str = " (Split)";

/// A named seat at the table: one hand plus lifetime statistics.
///
/// Players and the dealer share this type; the dealer adds a strategy on top
/// (see [`Dealer`](crate::Dealer)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    hand: Hand,
    stats: Statistics,
    split_of: Option<usize>,
}

impl Participant {
    /// Creates a participant with an empty hand and zeroed statistics.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            stats: Statistics::default(),
            split_of: None,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current hand mutably.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Replaces the current hand.
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    /// Clears the current hand.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// For a participant created by a split, the seat of the player it came
    /// from.
    #[must_use]
    pub const fn split_of(&self) -> Option<usize> {
        self.split_of
    }

    /// Draws one card from the deck into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the deck is empty; the hand is unchanged.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<Card, DeckExhausted> {
        let card = deck.draw()?;
        self.hand.add_card(card);
        Ok(card)
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the hand holds two cards of equal value.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.hand.can_split()
    }

    /// Returns whether the hand holds exactly two cards.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.hand.can_double_down()
    }

    /// Splits off the second card into a new participant seated at the end
    /// of the roster.
    ///
    /// The new participant is named after this one with [`SPLIT_SUFFIX`] and
    /// remembers `origin` as the seat it came from. Neither hand receives a
    /// card here; the caller deals one to each.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] if the hand is not a splittable
    /// pair.
    pub fn split(&mut self, origin: usize) -> Result<Self, ActionError> {
        let card = self
            .hand
            .take_split_card()
            .ok_or(ActionError::CannotSplit)?;

        Ok(Self {
            name: format!("{}{SPLIT_SUFFIX}", self.name),
            hand: Hand::from_cards(&[card]),
            stats: Statistics::default(),
            split_of: Some(self.split_of.unwrap_or(origin)),
        })
    }

    /// Returns the lifetime statistics.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Replaces the lifetime statistics.
    pub const fn set_statistics(&mut self, stats: Statistics) {
        self.stats = stats;
    }

    /// Adds counters earned elsewhere, such as by a split hand.
    pub fn absorb_statistics(&mut self, other: &Statistics) {
        self.stats.absorb(other);
    }

    /// Records a win.
    pub const fn record_win(&mut self) {
        self.stats.record_win();
    }

    /// Records a loss.
    pub const fn record_loss(&mut self) {
        self.stats.record_loss();
    }

    /// Records a push.
    pub const fn record_push(&mut self) {
        self.stats.record_push();
    }

    /// Raises the best score if `score` beats it.
    pub fn update_max_score(&mut self, score: u8) {
        self.stats.update_max_score(score);
    }

    /// Returns the win rate in percent.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.stats.win_rate()
    }
}
