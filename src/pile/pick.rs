use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::PileError;

use super::Pile;
use super::indices::{check_distinct, removal_offsets};

impl Pile {
    /// Removes and returns the cards at `indices`.
    ///
    /// Indices refer to the pile before anything is removed, and the cards
    /// come back in the order the indices were given.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if the pile is empty or any index is
    /// past the end, and [`PileError::RepeatedIndex`] if an index is given
    /// more than once. The pile is unchanged on error.
    pub fn pick(&mut self, indices: &[usize]) -> Result<Vec<Card>, PileError> {
        if self.cards.is_empty() {
            return Err(PileError::OutOfRange {
                indices: indices.to_vec(),
            });
        }

        if let [index] = *indices {
            if index >= self.cards.len() {
                return Err(PileError::OutOfRange {
                    indices: alloc::vec![index],
                });
            }
            log::debug!("picking card at {index}");
            return Ok(alloc::vec![self.cards.remove(index)]);
        }

        check_distinct(indices, self.cards.len())?;
        let offsets = removal_offsets(indices);

        log::debug!("picking {} cards at {indices:?}", indices.len());
        let picked = indices
            .iter()
            .zip(offsets)
            .map(|(&index, offset)| self.cards.remove(index - offset))
            .collect();
        Ok(picked)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is empty.
    pub fn pick_top(&mut self) -> Result<Card, PileError> {
        if self.cards.is_empty() {
            return Err(PileError::none_available());
        }
        Ok(self.cards.remove(0))
    }

    /// Removes and returns the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is empty.
    pub fn pick_bottom(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or_else(PileError::none_available)
    }

    /// Removes and returns a card chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is empty.
    pub fn pick_random(&mut self) -> Result<Card, PileError> {
        match self.cards.len() {
            0 => Err(PileError::none_available()),
            1 => self.pick_top(),
            len => {
                let index = self.rng.random_range(0..len);
                self.pick(&[index])?
                    .pop()
                    .ok_or_else(PileError::none_available)
            }
        }
    }
}
