//! Deck entity: an ordered pile of cards that only ever shrinks.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, Rank, Suit};

/// Codes of a fresh 52-card deck in canonical order: ranks ascending within
/// each suit, suits ordered Spades, Diamonds, Clubs, Hearts.
pub const STANDARD_DECK: &str = "AS 2S 3S 4S 5S 6S 7S 8S 9S 10S JS QS KS \
AD 2D 3D 4D 5D 6D 7D 8D 9D 10D JD QD KD \
AC 2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC KC \
AH 2H 3H 4H 5H 6H 7H 8H 9H 10H JH QH KH";

/// An ordered collection of cards.
///
/// The front of `cards` is the top of the deck. Cards are never added after
/// construction; [`Deck::draw`] is the only way the deck shrinks. Duplicate
/// cards are allowed.
///
/// `shuffled` is sticky: once a deck has been shuffled it stays marked as
/// shuffled for its whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    shuffled: bool,
}

impl Deck {
    /// Builds a deck whose order matches `cards` exactly.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            shuffled: false,
        }
    }

    /// Builds the standard 52-card deck in canonical order.
    pub fn standard() -> Self {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect()
    }

    /// Number of cards left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Remaining cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffles the remaining cards in place (Fisher-Yates) and marks the
    /// deck as shuffled.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.shuffled = true;
    }

    /// Removes and returns up to `count` cards from the top of the deck.
    ///
    /// Asking for more cards than remain yields whatever is left; drawing
    /// from an empty deck, or drawing zero cards, yields nothing.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Deck {
    /// Space-separated card codes, top first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.cards.iter();
        if let Some(first) = cards.next() {
            write!(f, "{first}")?;
            for card in cards {
                write!(f, " {card}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn deck_of(codes: &str) -> Deck {
        codes
            .split(' ')
            .map(|code| code.parse::<Card>().unwrap())
            .collect()
    }

    fn sorted(codes: &str) -> Vec<&str> {
        let mut codes: Vec<&str> = codes.split(' ').collect();
        codes.sort_unstable();
        codes
    }

    #[test]
    fn test_standard_deck_order() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);
        assert!(!deck.is_shuffled());
        assert_eq!(deck.to_string(), STANDARD_DECK);
    }

    #[test]
    fn test_custom_deck_preserves_order_and_duplicates() {
        let deck = deck_of("AS KD AC 2C KH AS");
        assert_eq!(deck.len(), 6);
        assert_eq!(deck.to_string(), "AS KD AC 2C KH AS");
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = Deck::new(Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.to_string(), "");
        assert!(deck.draw(3).is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut deck = Deck::standard();
        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        assert!(deck.is_shuffled());
        assert_eq!(deck.len(), 52);
        assert_ne!(deck.to_string(), STANDARD_DECK);
        assert_eq!(sorted(&deck.to_string()), sorted(STANDARD_DECK));
    }

    #[test]
    fn test_shuffle_with_same_seed_is_reproducible() {
        let mut first = Deck::standard();
        let mut second = Deck::standard();
        first.shuffle(&mut StdRng::seed_from_u64(42));
        second.shuffle(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffled_flag_is_sticky() {
        let mut deck = deck_of("AS KD");
        deck.shuffle(&mut StdRng::seed_from_u64(1));
        deck.draw(2);
        assert!(deck.is_empty());
        assert!(deck.is_shuffled());
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::standard();
        let drawn = deck.draw(3);

        let codes: Vec<String> = drawn.iter().map(Card::code).collect();
        assert_eq!(codes, ["AS", "2S", "3S"]);
        assert_eq!(deck.len(), 49);
        assert!(deck.to_string().starts_with("4S 5S"));
    }

    #[test]
    fn test_sequential_single_draws() {
        let mut deck = Deck::standard();
        deck.draw(15);

        assert_eq!(deck.draw(1)[0].code(), "3D");
        assert_eq!(deck.draw(1)[0].code(), "4D");
        assert_eq!(deck.draw(1)[0].code(), "5D");
        assert_eq!(deck.len(), 34);
    }

    #[test]
    fn test_draw_more_than_remaining() {
        let mut deck = deck_of("AS");
        let drawn = deck.draw(2);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].code(), "AS");
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_zero_is_noop() {
        let mut deck = deck_of("AS QH");
        assert!(deck.draw(0).is_empty());
        assert_eq!(deck.to_string(), "AS QH");
    }

    #[test]
    fn test_draw_from_exhausted_deck() {
        let mut deck = deck_of("AS QH");
        deck.draw(2);
        assert!(deck.draw(1).is_empty());
        assert_eq!(deck.len(), 0);
    }
}
