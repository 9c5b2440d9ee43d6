//! Card values.
//!
//! A card is an opaque, totally ordered byte. The sort never looks inside a
//! card beyond comparing it, so any single-byte code works (the usual input is
//! a string of ASCII digits or letters).
//!
//! ```
//! use solitaire_sort::core::Card;
//!
//! let deck = Card::cards_from_str("1525").unwrap();
//! assert_eq!(deck.len(), 4);
//! assert!(deck[0] < deck[1]);
//! assert_eq!(deck[1].to_string(), "5");
//! ```

use serde::{Deserialize, Serialize};

/// A single playing card, stored as its character code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    /// Create a card from a raw code.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Get the raw code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Create a card from an ASCII character.
    ///
    /// Returns `None` for characters outside the ASCII range.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Some(Self(c as u8))
        } else {
            None
        }
    }

    /// The card as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Build a run of cards from ASCII text, one card per character.
    ///
    /// Returns `None` if any character is not ASCII.
    #[must_use]
    pub fn cards_from_str(text: &str) -> Option<Vec<Card>> {
        text.chars().map(Self::from_char).collect()
    }
}

impl From<u8> for Card {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Card::from_char('7'), Some(Card(b'7')));
        assert_eq!(Card::from_char('é'), None);
    }

    #[test]
    fn test_ordering_follows_code() {
        assert!(Card(b'0') < Card(b'9'));
        assert!(Card(b'A') < Card(b'a'));
        assert_eq!(Card(b'3').cmp(&Card(b'3')), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_cards_from_str() {
        let cards = Card::cards_from_str("90").unwrap();
        assert_eq!(cards, vec![Card(b'9'), Card(b'0')]);

        assert!(Card::cards_from_str("").unwrap().is_empty());
        assert!(Card::cards_from_str("1♠").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card(b'K').to_string(), "K");
        assert_eq!(Card::new(b'q').as_char(), 'q');
        assert_eq!(u8::from(Card::from(42)), 42);
    }
}
