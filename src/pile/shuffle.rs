use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use rand::Rng;

use crate::options::ShufflePolicy;

use super::Pile;

impl Pile {
    /// Randomizes the order of the cards according to the pile's
    /// [`ShufflePolicy`].
    ///
    /// Piles with fewer than two cards are left alone.
    pub fn shuffle(&mut self) {
        if self.cards.len() < 2 {
            return;
        }

        match self.shuffle {
            ShufflePolicy::FisherYates => {
                self.cards.shuffle(&mut self.rng);
                log::debug!("shuffled {} cards", self.cards.len());
            }
            #[cfg(feature = "std")]
            ShufflePolicy::TimeBoxed {
                window,
                check_every,
            } => {
                let swaps = self.swap_until(std::time::Instant::now() + window, check_every.max(1));
                log::debug!("shuffled {} cards with {swaps} swaps", self.cards.len());
            }
        }
    }

    /// Swaps a random card with the bottom card until `deadline`, reading the
    /// clock every `check_every` swaps. Returns the number of swaps.
    #[cfg(feature = "std")]
    fn swap_until(&mut self, deadline: std::time::Instant, check_every: usize) -> usize {
        let last = self.cards.len() - 1;
        let mut swaps: usize = 0;
        loop {
            if swaps % check_every == 0 && std::time::Instant::now() >= deadline {
                return swaps;
            }
            let index = self.rng.random_range(0..=last);
            self.cards.swap(index, last);
            swaps += 1;
        }
    }
}
