use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PileError;

use super::Pile;
use super::indices::check_in_range;

impl Pile {
    /// Returns copies of the cards at `indices` without removing them.
    ///
    /// Repeated indices are allowed and yield the same card again.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if the pile is empty or any index is
    /// past the end.
    pub fn peek(&self, indices: &[usize]) -> Result<Vec<Card>, PileError> {
        if self.cards.is_empty() {
            return Err(PileError::OutOfRange {
                indices: indices.to_vec(),
            });
        }
        check_in_range(indices, self.cards.len())?;
        Ok(indices.iter().map(|&index| self.cards[index]).collect())
    }

    /// Returns a copy of the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is empty.
    pub fn peek_top(&self) -> Result<Card, PileError> {
        self.cards
            .first()
            .copied()
            .ok_or_else(PileError::none_available)
    }

    /// Returns a copy of the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is empty.
    pub fn peek_bottom(&self) -> Result<Card, PileError> {
        self.cards
            .last()
            .copied()
            .ok_or_else(PileError::none_available)
    }
}
