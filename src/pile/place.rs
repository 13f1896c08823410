use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::PileError;

use super::Pile;
use super::indices::check_distinct;

impl Pile {
    /// Inserts `cards` at `indices`.
    ///
    /// Indices refer to the pile after every card is inserted, so each must
    /// be below `card_count() + cards.len()`. Existing cards keep their
    /// relative order and fill the slots not named by `indices`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::MismatchedInputs`] if `cards` and `indices`
    /// differ in length, [`PileError::NotEnough`] if the cards don't fit,
    /// [`PileError::OutOfRange`] if an index is past the end of the new
    /// pile, and [`PileError::RepeatedIndex`] if an index is given more than
    /// once. The pile is unchanged on error.
    pub fn place(&mut self, cards: &[Card], indices: &[usize]) -> Result<(), PileError> {
        if cards.len() != indices.len() {
            return Err(PileError::MismatchedInputs {
                inputs: alloc::vec!["cards", "indices"],
            });
        }
        let new_len = self.cards.len() + cards.len();
        if new_len > self.max_size {
            return Err(PileError::NotEnough {
                requested: cards.len(),
                available: self.remaining_capacity(),
            });
        }
        check_distinct(indices, new_len)?;

        let mut slots: Vec<Option<Card>> = alloc::vec![None; new_len];
        for (&index, &card) in indices.iter().zip(cards) {
            slots[index] = Some(card);
        }

        let mut existing = self.cards.drain(..);
        let rebuilt: Vec<Card> = slots
            .into_iter()
            .filter_map(|slot| slot.or_else(|| existing.next()))
            .collect();
        drop(existing);

        log::debug!("placed {} cards at {indices:?}", cards.len());
        self.cards = rebuilt;
        Ok(())
    }

    /// Places a card on top of the pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is full.
    pub fn place_top(&mut self, card: Card) -> Result<(), PileError> {
        self.insert_one(0, card)
    }

    /// Places a card at the bottom of the pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is full.
    pub fn place_bottom(&mut self, card: Card) -> Result<(), PileError> {
        self.insert_one(self.cards.len(), card)
    }

    /// Places a card at a position chosen uniformly among the
    /// `card_count() + 1` positions of the grown pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile is full.
    pub fn place_random(&mut self, card: Card) -> Result<(), PileError> {
        if self.is_full() {
            return Err(PileError::none_available());
        }
        let spot = self.rng.random_range(0..=self.cards.len());
        log::debug!("placing card at random position {spot}");
        self.insert_one(spot, card)
    }

    fn insert_one(&mut self, index: usize, card: Card) -> Result<(), PileError> {
        if self.is_full() {
            return Err(PileError::none_available());
        }
        self.cards.insert(index, card);
        Ok(())
    }
}
