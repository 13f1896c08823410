//! Pile configuration options.

#[cfg(feature = "std")]
use core::time::Duration;

/// How [`Pile::shuffle`](crate::Pile::shuffle) randomizes a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShufflePolicy {
    /// One Fisher–Yates pass, a uniform permutation.
    #[default]
    FisherYates,
    /// Swap a random card with the bottom card until `window` has elapsed.
    ///
    /// The clock is read once every `check_every` swaps. This scales with the
    /// time available rather than with the size of the pile and isn't
    /// guaranteed to be uniform.
    #[cfg(feature = "std")]
    TimeBoxed {
        /// How long to keep swapping.
        window: Duration,
        /// Number of swaps between clock reads. Zero is treated as one.
        check_every: usize,
    },
}

impl ShufflePolicy {
    /// The time-boxed policy with a 100 ms window, checked every 10 swaps.
    #[cfg(feature = "std")]
    #[must_use]
    pub const fn time_boxed() -> Self {
        Self::TimeBoxed {
            window: Duration::from_millis(100),
            check_every: 10,
        }
    }
}

/// Configuration options for a pile.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardpile::{PileOptions, ShufflePolicy};
///
/// let options = PileOptions::default()
///     .with_seed(7)
///     .with_shuffle(ShufflePolicy::FisherYates);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PileOptions {
    /// Seed for the pile's random number generator.
    ///
    /// `None` seeds from the thread-local generator with `std`. Without
    /// `std` there is no entropy source and `None` behaves like `Some(0)`.
    pub seed: Option<u64>,
    /// Shuffle policy.
    pub shuffle: ShufflePolicy,
}

impl PileOptions {
    /// Sets the random seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::PileOptions;
    ///
    /// let options = PileOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the shuffle policy.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::{PileOptions, ShufflePolicy};
    ///
    /// let options = PileOptions::default().with_shuffle(ShufflePolicy::time_boxed());
    /// assert_eq!(options.shuffle, ShufflePolicy::time_boxed());
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShufflePolicy) -> Self {
        self.shuffle = shuffle;
        self
    }
}
