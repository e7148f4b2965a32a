//! A multiplayer blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs one round at a time: dealing
//! from a fresh 52-card [`Deck`], each seat's turn (hit, stand, double down,
//! split), the dealer's fixed-strategy turn, and the showdown that records
//! every seat's win, loss or push in its [`Statistics`].
//!
//! # Example
//!
//! ```
//! use bjtable::{LegalActions, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.join("Alice").unwrap();
//!
//! let mut always_stand = |_: &Table, _: usize, legal: &LegalActions| Some(legal.stand());
//! let result = table.play_round(&mut always_stand, &mut ()).unwrap();
//! assert_eq!(result.seats.len(), 1);
//! assert_eq!(table.players()[0].statistics().games_played, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod stats;
pub mod turn;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{Dealer, DealerOutcome, DealerStrategy};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::StoreError;
pub use error::{
    ActionError, DealError, DeckExhausted, JoinError, RecordError, RoundError, ShowdownError,
};
pub use game::{GameState, Table};
pub use hand::{Hand, HandStatus, score};
pub use options::TableOptions;
pub use participant::{Participant, SPLIT_SUFFIX};
pub use result::{HandOutcome, RoundResult, SeatResult};
#[cfg(feature = "std")]
pub use stats::FileStore;
pub use stats::{Ledger, Statistics, StatsRecord, StatsStore};
pub use turn::{Action, ActionSource, Choice, LegalActions, TableEvent, TableObserver};
