//! Card types and deck constants.

use core::fmt;

/// Card rank, ordered from [`Rank::Ace`] to [`Rank::BigJoker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// The joker paired with the black joker suit.
    LittleJoker,
    /// The joker paired with the red joker suit.
    BigJoker,
}

impl Rank {
    /// Every rank, jokers last.
    pub const ALL: [Self; 15] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::LittleJoker,
        Self::BigJoker,
    ];

    /// The thirteen ranks of a jokerless deck.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns whether this is one of the two joker ranks.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::LittleJoker | Self::BigJoker)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::LittleJoker => "Little joker",
            Self::BigJoker => "Big joker",
        };
        f.write_str(name)
    }
}

/// Suit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitName {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Joker.
    Joker,
}

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Black.
    Black,
}

/// A suit, made of a name and a color.
///
/// Only the six values listed as associated constants exist; the fields are
/// private so a red club can't be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Suit {
    name: SuitName,
    color: Color,
}

impl Suit {
    /// Clubs (black).
    pub const CLUBS: Self = Self::new(SuitName::Clubs, Color::Black);
    /// Spades (black).
    pub const SPADES: Self = Self::new(SuitName::Spades, Color::Black);
    /// Diamonds (red).
    pub const DIAMONDS: Self = Self::new(SuitName::Diamonds, Color::Red);
    /// Hearts (red).
    pub const HEARTS: Self = Self::new(SuitName::Hearts, Color::Red);
    /// Black joker, paired with [`Rank::LittleJoker`].
    pub const BLACK_JOKER: Self = Self::new(SuitName::Joker, Color::Black);
    /// Red joker, paired with [`Rank::BigJoker`].
    pub const RED_JOKER: Self = Self::new(SuitName::Joker, Color::Red);

    /// All suits in canonical deck order.
    pub const ALL: [Self; 6] = [
        Self::CLUBS,
        Self::SPADES,
        Self::DIAMONDS,
        Self::HEARTS,
        Self::BLACK_JOKER,
        Self::RED_JOKER,
    ];

    /// The four non-joker suits in canonical deck order.
    pub const STANDARD: [Self; 4] = [Self::CLUBS, Self::SPADES, Self::DIAMONDS, Self::HEARTS];

    const fn new(name: SuitName, color: Color) -> Self {
        Self { name, color }
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> SuitName {
        self.name
    }

    /// Returns the suit color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name, self.color) {
            (SuitName::Clubs, _) => f.write_str("clubs"),
            (SuitName::Spades, _) => f.write_str("spades"),
            (SuitName::Diamonds, _) => f.write_str("diamonds"),
            (SuitName::Hearts, _) => f.write_str("hearts"),
            (SuitName::Joker, Color::Black) => f.write_str("black joker"),
            (SuitName::Joker, Color::Red) => f.write_str("red joker"),
        }
    }
}

/// A playing card.
///
/// [`Card::default`] is the empty card, which has neither rank nor suit.
/// Piles never hand it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    rank: Option<Rank>,
    suit: Option<Suit>,
}

impl Card {
    /// The empty card.
    pub const EMPTY: Self = Self {
        rank: None,
        suit: None,
    };

    /// Creates a new card.
    ///
    /// Note: This function does not check that jokers carry a joker suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank: Some(rank),
            suit: Some(suit),
        }
    }

    /// Returns the rank, or `None` for the empty card.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// Returns the suit, or `None` for the empty card.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns true if the cards match rank and suit.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.matches_rank(other) && self.matches_suit(other)
    }

    /// Returns true if the cards match rank.
    #[must_use]
    pub fn matches_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Returns true if the cards match suit.
    #[must_use]
    pub fn matches_suit(&self, other: &Self) -> bool {
        self.suit == other.suit
    }

    /// Returns true if the cards' suits share a color.
    #[must_use]
    pub fn matches_color(&self, other: &Self) -> bool {
        self.suit.map(Suit::color) == other.suit.map(Suit::color)
    }

    /// Returns true if neither rank nor suit is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rank.is_none() && self.suit.is_none()
    }

    /// Returns whether the card has a joker rank.
    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.rank.is_some_and(Rank::is_joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank, self.suit) {
            (Some(rank), _) if rank.is_joker() => write!(f, "{rank}"),
            (Some(rank), Some(suit)) => write!(f, "{rank} of {suit}"),
            (Some(rank), None) => write!(f, "{rank}"),
            (None, Some(suit)) => write!(f, "{suit}"),
            (None, None) => f.write_str("empty"),
        }
    }
}

/// Number of cards in a standard deck without jokers.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a standard deck with both jokers.
pub const DECK_SIZE_WITH_JOKERS: usize = 54;
