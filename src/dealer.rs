//! The dealer and its drawing strategies.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckExhausted;
use crate::hand::{Hand, HandStatus};
use crate::participant::Participant;

/// When the dealer stops drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealerStrategy {
    /// Stops at 17 or more.
    #[default]
    Standard,
    /// Stops at 18 or more.
    Aggressive,
    /// Stops at 16 or more.
    Cautious,
}

impl DealerStrategy {
    /// Returns the lowest score at which the dealer stands.
    #[must_use]
    pub const fn threshold(self) -> u8 {
        match self {
            Self::Standard => 17,
            Self::Aggressive => 18,
            Self::Cautious => 16,
        }
    }

    /// Maps a menu choice to a strategy.
    ///
    /// Accepts `1`/`standard`, `2`/`aggressive` and `3`/`cautious` in any
    /// case. Anything else falls back to [`DealerStrategy::Standard`].
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        let choice = choice.trim();
        if choice == "1" || choice.eq_ignore_ascii_case("standard") {
            Self::Standard
        } else if choice == "2" || choice.eq_ignore_ascii_case("aggressive") {
            Self::Aggressive
        } else if choice == "3" || choice.eq_ignore_ascii_case("cautious") {
            Self::Cautious
        } else {
            log::warn!("unknown dealer strategy {choice:?}, using standard");
            Self::Standard
        }
    }
}

impl fmt::Display for DealerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "standard",
            Self::Aggressive => "aggressive",
            Self::Cautious => "cautious",
        };
        write!(f, "{name} ({}+ stop)", self.threshold())
    }
}

/// How the dealer's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerOutcome {
    /// The dealer reached the strategy threshold without busting.
    Stood(u8),
    /// The dealer went over 21.
    Busted(u8),
}

/// The dealer: a participant that plays by a fixed strategy and keeps its
/// second card face down until its turn.
#[derive(Debug, Clone)]
pub struct Dealer {
    participant: Participant,
    strategy: DealerStrategy,
    hole_revealed: bool,
}

impl Dealer {
    /// Name the dealer plays under.
    pub const NAME: &'static str = "Dealer";

    /// Creates a dealer using the given strategy.
    #[must_use]
    pub fn new(strategy: DealerStrategy) -> Self {
        Self {
            participant: Participant::new(Self::NAME),
            strategy,
            hole_revealed: false,
        }
    }

    /// Returns the strategy.
    #[must_use]
    pub const fn strategy(&self) -> DealerStrategy {
        self.strategy
    }

    /// Changes the strategy.
    pub const fn set_strategy(&mut self, strategy: DealerStrategy) {
        self.strategy = strategy;
    }

    /// Returns the underlying participant.
    #[must_use]
    pub const fn participant(&self) -> &Participant {
        &self.participant
    }

    /// Returns the underlying participant mutably.
    pub const fn participant_mut(&mut self) -> &mut Participant {
        &mut self.participant
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        self.participant.hand()
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand().cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card()
                .map_or(0, |card| crate::hand::score(core::slice::from_ref(card)))
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.participant.score()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.participant.is_busted()
    }

    /// Returns whether the strategy requires another card.
    #[must_use]
    pub fn must_draw_card(&self) -> bool {
        !self.is_bust() && self.value() < self.strategy.threshold()
    }

    /// Draws one card into the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the deck is empty.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<Card, DeckExhausted> {
        self.participant.draw(deck)
    }

    /// Draws one card if the strategy requires it.
    ///
    /// Returns `None` once the dealer stands or has busted.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the dealer must draw from an empty deck.
    pub fn draw_if_needed(&mut self, deck: &mut Deck) -> Result<Option<Card>, DeckExhausted> {
        if !self.must_draw_card() {
            return Ok(None);
        }

        let card = self.draw(deck)?;
        log::debug!("dealer draws {card}, value {}", self.value());
        Ok(Some(card))
    }

    /// Ends the dealer's turn, standing unless the hand is bust.
    pub fn finish(&mut self) -> DealerOutcome {
        let value = self.value();
        if self.is_bust() {
            DealerOutcome::Busted(value)
        } else {
            self.participant.hand_mut().set_status(HandStatus::Stand);
            DealerOutcome::Stood(value)
        }
    }

    /// Reveals the hole card and draws until the strategy says stop.
    ///
    /// Returns the cards drawn, in order, with the final outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the dealer must draw from an empty deck.
    pub fn play_turn(
        &mut self,
        deck: &mut Deck,
    ) -> Result<(Vec<Card>, DealerOutcome), DeckExhausted> {
        self.reveal_hole();

        let mut drawn = Vec::new();
        while let Some(card) = self.draw_if_needed(deck)? {
            drawn.push(card);
        }

        Ok((drawn, self.finish()))
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.participant.clear_hand();
        self.hole_revealed = false;
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(DealerStrategy::default())
    }
}
