//! Bounded, ordered playing card piles with optional `no_std` support.
//!
//! A [`Pile`] is a sequence of cards with a fixed capacity. Decks and hands
//! are both piles ([`Deck`] and [`Hand`] are aliases), and support removing
//! cards by index ([`Pile::pick`]), inserting at index ([`Pile::place`]),
//! reading without removing ([`Pile::peek`]), shuffling, and dealing into
//! smaller piles.
//!
//! # Example
//!
//! ```
//! use cardpile::{Deck, PileOptions};
//!
//! let mut deck = Deck::standard_deck_with_options(false, PileOptions::default().with_seed(42));
//! deck.shuffle();
//! let hands = deck.deal(4, 5).unwrap();
//! assert_eq!(hands.len(), 4);
//! assert_eq!(deck.card_count(), 32);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod options;
pub mod pile;
pub mod shared;
mod sync;
pub mod traits;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, DECK_SIZE_WITH_JOKERS, Rank, Suit, SuitName};
pub use error::PileError;
pub use options::{PileOptions, ShufflePolicy};
pub use pile::{Deck, Hand, Pile};
pub use shared::SharedPile;
