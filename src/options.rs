//! Table configuration options.

use crate::dealer::DealerStrategy;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{DealerStrategy, TableOptions};
///
/// let options = TableOptions::default()
///     .with_strategy(DealerStrategy::Cautious)
///     .with_max_players(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Dealer drawing strategy.
    pub strategy: DealerStrategy,
    /// Maximum number of seated players.
    pub max_players: u8,
    /// Maximum number of splits per seated player.
    pub max_splits: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            strategy: DealerStrategy::Standard,
            max_players: 4,
            max_splits: 3,
        }
    }
}

impl TableOptions {
    /// Sets the dealer strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DealerStrategy, TableOptions};
    ///
    /// let options = TableOptions::default().with_strategy(DealerStrategy::Aggressive);
    /// assert_eq!(options.strategy, DealerStrategy::Aggressive);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: DealerStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the maximum number of seated players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_players(2);
    /// assert_eq!(options.max_players, 2);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the maximum number of splits per seated player.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_splits(1);
    /// assert_eq!(options.max_splits, 1);
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: u8) -> Self {
        self.max_splits = max_splits;
        self
    }
}
