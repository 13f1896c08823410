use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::PileError;

use super::Pile;

impl Pile {
    /// Deals `n` hands of `size` cards from the top of the pile.
    ///
    /// Hand `i` receives the cards at positions `i * size .. (i + 1) * size`,
    /// in order. Each hand is full, with `max_size == size`, and keeps this
    /// pile's shuffle policy with its own random stream.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if the pile holds fewer than
    /// `n * size` cards. The pile is unchanged on error.
    pub fn deal(&mut self, n: usize, size: usize) -> Result<Vec<Self>, PileError> {
        let available = self.cards.len();
        let total = n.checked_mul(size).ok_or(PileError::NotEnough {
            requested: usize::MAX,
            available,
        })?;
        if total > available {
            return Err(PileError::NotEnough {
                requested: total,
                available,
            });
        }
        if total == 0 {
            return Ok((0..n).map(|_| self.spawn(Vec::new(), size)).collect());
        }

        let indices: Vec<usize> = (0..total).collect();
        let mut picked = self.pick(&indices)?.into_iter();
        log::debug!("dealt {n} hands of {size} cards, {} left", self.cards.len());

        Ok((0..n)
            .map(|_| {
                let cards = picked.by_ref().take(size).collect();
                self.spawn(cards, size)
            })
            .collect())
    }

    fn spawn(&mut self, cards: Vec<Card>, max_size: usize) -> Self {
        let rng = ChaCha8Rng::from_rng(&mut self.rng);
        Self::from_parts(cards, max_size, self.shuffle, rng)
    }
}
