//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores a sequence of cards.
///
/// Every Ace first counts as 1. Each Ace is then promoted to 11 while doing
/// so keeps the total at or below 21. Returns the score and whether any Ace
/// was promoted.
#[must_use]
pub fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.base_value());
    }

    let mut soft = false;
    for _ in 0..aces {
        if total <= 21 - 10 {
            total += 10;
            soft = true;
        }
    }

    (total, soft)
}

/// Scores a sequence of cards. See [`evaluate_cards`].
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is awaiting an action.
    Active,
    /// Player has stood.
    Stand,
    /// Player doubled down and received their one card.
    Doubled,
    /// Hand has busted (over 21).
    Bust,
}

impl HandStatus {
    /// Returns whether the hand can no longer act.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Adds a card to the hand, marking it bust when it goes over 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if self.is_bust() {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand can be split.
    ///
    /// Two cards of equal base value qualify, so a King and a Queen can be
    /// split just like a pair of eights.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].base_value() == self.cards[1].base_value()
    }

    /// Returns whether the hand can double down.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.cards.len() == 2
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.can_split() {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
