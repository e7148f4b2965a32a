//! Player decisions and table notifications.
//!
//! An [`ActionSource`] is asked for a [`Choice`] whenever a seat is awaiting
//! an action. A `Choice` can only be taken from the [`LegalActions`] offered
//! for that turn, so the source never hands the engine a move the hand does
//! not allow.

use core::fmt;

use crate::card::Card;
use crate::dealer::DealerOutcome;
use crate::game::Table;
use crate::result::RoundResult;

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Draw exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Self; 4] = [Self::Hit, Self::Stand, Self::DoubleDown, Self::Split];

    /// Returns a short label for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
            Self::Split => "Split",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The actions a seat may take right now. Hit and Stand are always offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalActions {
    double_down: bool,
    split: bool,
}

impl LegalActions {
    pub(crate) const fn new(double_down: bool, split: bool) -> Self {
        Self { double_down, split }
    }

    /// Returns whether `action` is allowed.
    #[must_use]
    pub const fn contains(&self, action: Action) -> bool {
        match action {
            Action::Hit | Action::Stand => true,
            Action::DoubleDown => self.double_down,
            Action::Split => self.split,
        }
    }

    /// Iterates over the allowed actions in menu order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL
            .into_iter()
            .filter(move |&action| self.contains(action))
    }

    /// Returns how many actions are allowed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always `false`: Hit and Stand are always allowed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Picks `action` if it is allowed.
    #[must_use]
    pub const fn pick(&self, action: Action) -> Option<Choice> {
        if self.contains(action) {
            Some(Choice(action))
        } else {
            None
        }
    }

    /// Picks the `index`-th allowed action in menu order.
    #[must_use]
    pub fn pick_nth(&self, index: usize) -> Option<Choice> {
        self.iter().nth(index).map(Choice)
    }

    /// Picks Hit.
    #[must_use]
    pub const fn hit(&self) -> Choice {
        Choice(Action::Hit)
    }

    /// Picks Stand.
    #[must_use]
    pub const fn stand(&self) -> Choice {
        Choice(Action::Stand)
    }
}

/// An action taken from a [`LegalActions`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice(Action);

impl Choice {
    /// Returns the chosen action.
    #[must_use]
    pub const fn action(self) -> Action {
        self.0
    }
}

/// Supplies a decision for a seat that is awaiting an action.
pub trait ActionSource {
    /// Chooses one of the `legal` actions for `seat`.
    ///
    /// `table` is a read-only view; the dealer's hole card stays hidden
    /// behind [`Dealer::visible_value`](crate::Dealer::visible_value).
    /// Returning `None` abandons the round.
    fn choose(&mut self, table: &Table, seat: usize, legal: &LegalActions) -> Option<Choice>;
}

impl<F> ActionSource for F
where
    F: FnMut(&Table, usize, &LegalActions) -> Option<Choice>,
{
    fn choose(&mut self, table: &Table, seat: usize, legal: &LegalActions) -> Option<Choice> {
        self(table, seat, legal)
    }
}

/// Something that happened at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent<'a> {
    /// Fresh deck shuffled and two cards dealt to every seat and the dealer.
    Dealt,
    /// A seat drew a card.
    Hit {
        /// The seat.
        seat: usize,
        /// The card drawn.
        card: Card,
    },
    /// A seat stood.
    Stood {
        /// The seat.
        seat: usize,
    },
    /// A seat doubled down.
    DoubledDown {
        /// The seat.
        seat: usize,
        /// The one card received.
        card: Card,
    },
    /// A seat split its pair into a new seat.
    Split {
        /// The seat that split.
        seat: usize,
        /// The seat created for the second hand.
        new_seat: usize,
    },
    /// A seat went over 21.
    Busted {
        /// The seat.
        seat: usize,
    },
    /// The dealer turned its hole card face up.
    HoleRevealed,
    /// The dealer drew a card.
    DealerDrew {
        /// The card drawn.
        card: Card,
    },
    /// The dealer finished its turn.
    DealerFinished(DealerOutcome),
    /// Every seat has been resolved against the dealer.
    Resolved(&'a RoundResult),
}

/// Observes the table after each state change. Every method defaults to
/// doing nothing.
pub trait TableObserver {
    /// Called after `event` has been applied to `table`.
    fn notify(&mut self, table: &Table, event: &TableEvent<'_>) {
        let _ = (table, event);
    }
}

impl TableObserver for () {}
