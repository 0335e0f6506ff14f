//! Card entity: a single playing card identified by a compact code.
//!
//! A card code is a rank token followed by a single suit character, e.g.
//! `AS` (ace of spades), `10D` (ten of diamonds), `QH` (queen of hearts).
//! Codes are case-sensitive.

use std::fmt;
use std::str::FromStr;

/// Card rank, in ascending canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in the order they appear within a suit of a fresh deck.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Token used for this rank inside a card code.
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Display name; numeric ranks map to themselves.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            numeric => numeric.token(),
        }
    }

    /// Resolves a code token to a rank. Returns `None` for anything outside
    /// the 13 recognized tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.token() == token)
    }
}

/// Card suit, in the canonical order of a fresh deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    pub fn token(self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Hearts => "H",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.token() == token)
    }
}

/// Reason a card code could not be parsed.
///
/// Each variant keeps the full offending code along with the component(s)
/// that failed to resolve, so callers can report exactly what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardCodeError {
    #[error("{rank} is not a valid rank for a custom deck")]
    InvalidRank { code: String, rank: String },

    #[error("{suit} is not a valid suit for a custom deck")]
    InvalidSuit { code: String, suit: String },

    #[error("{rank} is not a valid rank and {suit} is not a valid suit for a custom deck")]
    InvalidRankAndSuit {
        code: String,
        rank: String,
        suit: String,
    },
}

impl CardCodeError {
    /// The full card code that was rejected.
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidRank { code, .. }
            | Self::InvalidSuit { code, .. }
            | Self::InvalidRankAndSuit { code, .. } => code,
        }
    }

    /// The rank token, if it was the (or a) failing component.
    pub fn invalid_rank(&self) -> Option<&str> {
        match self {
            Self::InvalidRank { rank, .. } | Self::InvalidRankAndSuit { rank, .. } => Some(rank),
            Self::InvalidSuit { .. } => None,
        }
    }

    /// The suit token, if it was the (or a) failing component.
    pub fn invalid_suit(&self) -> Option<&str> {
        match self {
            Self::InvalidSuit { suit, .. } | Self::InvalidRankAndSuit { suit, .. } => Some(suit),
            Self::InvalidRank { .. } => None,
        }
    }
}

/// A single playing card.
///
/// Cards are immutable values and can only be built from a recognized rank
/// and suit, so `rank()` and `suit()` always resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Compact code, e.g. `10H`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.token())
    }
}

impl FromStr for Card {
    type Err = CardCodeError;

    /// Parses a card code: the last character is the suit, everything before
    /// it is the rank.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let split = code.char_indices().last().map_or(0, |(idx, _)| idx);
        let (rank_token, suit_token) = code.split_at(split);

        match (Rank::from_token(rank_token), Suit::from_token(suit_token)) {
            (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
            (None, Some(_)) => Err(CardCodeError::InvalidRank {
                code: code.to_string(),
                rank: rank_token.to_string(),
            }),
            (Some(_), None) => Err(CardCodeError::InvalidSuit {
                code: code.to_string(),
                suit: suit_token.to_string(),
            }),
            (None, None) => Err(CardCodeError::InvalidRankAndSuit {
                code: code.to_string(),
                rank: rank_token.to_string(),
                suit: suit_token.to_string(),
            }),
        }
    }
}
