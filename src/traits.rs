//! Single-operation traits, for code that only needs part of a pile.
//!
//! ```
//! use cardpile::{Deck, PileOptions};
//! use cardpile::traits::Peeker;
//!
//! fn top_two(source: &impl Peeker) -> usize {
//!     source.peek(&[0, 1]).map_or(0, |cards| cards.len())
//! }
//!
//! let deck = Deck::standard_deck_with_options(false, PileOptions::default().with_seed(1));
//! assert_eq!(top_two(&deck), 2);
//! ```

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PileError;
use crate::pile::{Hand, Pile};

/// Removes cards at given indices.
pub trait Picker {
    /// Removes and returns the cards at `indices`, which refer to the state
    /// before any card is removed.
    ///
    /// # Errors
    ///
    /// Fails if an index is out of range or repeated.
    fn pick(&mut self, indices: &[usize]) -> Result<Vec<Card>, PileError>;
}

/// Inserts cards at given indices.
pub trait Placer {
    /// Inserts `cards` at `indices`, which refer to the state after every
    /// card is inserted.
    ///
    /// # Errors
    ///
    /// Fails if the inputs differ in length, the cards don't fit, or an index
    /// is out of range or repeated.
    fn place(&mut self, cards: &[Card], indices: &[usize]) -> Result<(), PileError>;
}

/// Reads cards at given indices without removing them.
pub trait Peeker {
    /// Returns copies of the cards at `indices`.
    ///
    /// # Errors
    ///
    /// Fails if an index is out of range.
    fn peek(&self, indices: &[usize]) -> Result<Vec<Card>, PileError>;
}

/// Randomizes card order.
pub trait Shuffler {
    /// Shuffles in place.
    fn shuffle(&mut self);
}

/// Splits cards off into hands.
pub trait Dealer {
    /// Removes `n * size` cards and returns them as `n` hands of `size`.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than `n * size` cards.
    fn deal(&mut self, n: usize, size: usize) -> Result<Vec<Hand>, PileError>;
}

impl Picker for Pile {
    fn pick(&mut self, indices: &[usize]) -> Result<Vec<Card>, PileError> {
        Self::pick(self, indices)
    }
}

impl Placer for Pile {
    fn place(&mut self, cards: &[Card], indices: &[usize]) -> Result<(), PileError> {
        Self::place(self, cards, indices)
    }
}

impl Peeker for Pile {
    fn peek(&self, indices: &[usize]) -> Result<Vec<Card>, PileError> {
        Self::peek(self, indices)
    }
}

impl Shuffler for Pile {
    fn shuffle(&mut self) {
        Self::shuffle(self);
    }
}

impl Dealer for Pile {
    fn deal(&mut self, n: usize, size: usize) -> Result<Vec<Hand>, PileError> {
        Self::deal(self, n, size)
    }
}
