//! The bounded, ordered card pile shared by decks and hands.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, DECK_SIZE_WITH_JOKERS, Rank, Suit};
use crate::error::PileError;
use crate::options::{PileOptions, ShufflePolicy};

mod deal;
mod indices;
mod peek;
mod pick;
mod place;
mod shuffle;

/// A pile used as a deck.
pub type Deck = Pile;

/// A pile used as a hand.
pub type Hand = Pile;

/// A bounded, order-significant sequence of cards.
///
/// Index 0 is the top of the pile and the last index is the bottom. The
/// number of cards never exceeds [`Pile::max_size`], which is fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct Pile {
    /// Cards, top first.
    cards: Vec<Card>,
    /// Capacity.
    max_size: usize,
    /// Shuffle policy.
    shuffle: ShufflePolicy,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Pile {
    /// Creates a pile holding `cards` with room for `max_size` cards.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotEnough`] if `cards` doesn't fit in `max_size`.
    pub fn new(cards: Vec<Card>, max_size: usize, options: PileOptions) -> Result<Self, PileError> {
        if cards.len() > max_size {
            return Err(PileError::NotEnough {
                requested: cards.len(),
                available: max_size,
            });
        }
        Ok(Self::from_parts(cards, max_size, options.shuffle, seed_rng(options.seed)))
    }

    /// Creates an empty pile with room for `max_size` cards.
    #[must_use]
    pub fn empty(max_size: usize, options: PileOptions) -> Self {
        Self::from_parts(Vec::new(), max_size, options.shuffle, seed_rng(options.seed))
    }

    /// Creates a standard deck in canonical order, seeded from entropy.
    ///
    /// See [`Pile::standard_deck_with_options`].
    #[cfg(feature = "std")]
    #[must_use]
    pub fn standard_deck(include_jokers: bool) -> Self {
        Self::standard_deck_with_options(include_jokers, PileOptions::default())
    }

    /// Creates a standard deck in canonical order.
    ///
    /// Cards are laid out suit by suit (clubs, spades, diamonds, hearts),
    /// ace to king within each suit. With `include_jokers` the little black
    /// joker and then the big red joker are appended. The deck is full.
    #[must_use]
    pub fn standard_deck_with_options(include_jokers: bool, options: PileOptions) -> Self {
        let size = if include_jokers {
            DECK_SIZE_WITH_JOKERS
        } else {
            DECK_SIZE
        };
        let mut cards = Vec::with_capacity(size);

        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }
        if include_jokers {
            cards.push(Card::new(Rank::LittleJoker, Suit::BLACK_JOKER));
            cards.push(Card::new(Rank::BigJoker, Suit::RED_JOKER));
        }

        Self::from_parts(cards, size, options.shuffle, seed_rng(options.seed))
    }

    const fn from_parts(
        cards: Vec<Card>,
        max_size: usize,
        shuffle: ShufflePolicy,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            cards,
            max_size,
            shuffle,
            rng,
        }
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the maximum number of cards allowed in the pile.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns how many more cards fit in the pile.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.max_size - self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() == self.max_size
    }

    /// Returns true if the pile holds a card matching `card`.
    #[must_use]
    pub fn has_card(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.matches(card))
    }

    /// Returns the cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards, top first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the shuffle policy.
    #[must_use]
    pub const fn shuffle_policy(&self) -> ShufflePolicy {
        self.shuffle
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(feature = "std")]
fn seed_rng(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(
        || ChaCha8Rng::from_rng(&mut rand::rng()),
        ChaCha8Rng::seed_from_u64,
    )
}

#[cfg(not(feature = "std"))]
fn seed_rng(seed: Option<u64>) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.unwrap_or(0))
}
