//! A pile behind a lock, for callers that share one pile across threads.

use crate::pile::Pile;
use crate::sync::{Mutex, MutexGuard};

/// A [`Pile`] guarded by a mutex.
///
/// Every operation on the pile runs while holding the lock, so a
/// multi-index [`Pile::pick`] or [`Pile::place`] is never interleaved with
/// another caller's.
///
/// ```
/// use cardpile::{Deck, PileOptions, SharedPile};
///
/// let shared = SharedPile::new(Deck::standard_deck_with_options(false, PileOptions::default()));
/// let top = shared.with(|deck| deck.pick_top());
/// assert!(top.is_ok());
/// assert_eq!(shared.lock().card_count(), 51);
/// ```
pub struct SharedPile {
    pile: Mutex<Pile>,
}

impl SharedPile {
    /// Wraps a pile.
    #[must_use]
    pub const fn new(pile: Pile) -> Self {
        Self {
            pile: Mutex::new(pile),
        }
    }

    /// Locks the pile for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, Pile> {
        self.pile.lock()
    }

    /// Runs `f` with the pile locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pile) -> R) -> R {
        f(&mut self.pile.lock())
    }

    /// Unwraps the pile.
    #[must_use]
    pub fn into_inner(self) -> Pile {
        self.pile.into_inner()
    }
}

impl From<Pile> for SharedPile {
    fn from(pile: Pile) -> Self {
        Self::new(pile)
    }
}
