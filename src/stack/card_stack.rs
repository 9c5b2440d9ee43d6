//! Growable card stacks.
//!
//! A `CardStack` owns one buffer of cards and two counters: the number of
//! live cards and a `visible` marker. Stacks are never shared. Cards move
//! between stacks only through [`CardStack::push`], [`CardStack::pop`] and
//! [`transfer`], which composes the two.
//!
//! ## Buffer behaviour
//!
//! - `push` always reallocates to exactly `len + count` and releases the old
//!   buffer. There is no amortized growth.
//! - `pop` is a logical truncation. The buffer keeps its size and the popped
//!   cards stay in it, but nothing reads past `len()`.
//! - `destruct` releases the buffer and resets the stack to the empty state.
//!
//! ## Preconditions
//!
//! Every read range and pop count is checked before anything is modified. A
//! failed call leaves both stacks untouched and returns a [`StackError`].
//!
//! ```
//! use solitaire_sort::core::Card;
//! use solitaire_sort::stack::{transfer, CardStack};
//!
//! let cards = Card::cards_from_str("abcde").unwrap();
//! let mut deck = CardStack::construct(&cards, 5, 1).unwrap();
//! let mut pile = CardStack::new();
//!
//! // Move the top two cards onto the pile
//! transfer(3, 2, &mut deck, &mut pile).unwrap();
//!
//! assert_eq!(deck.as_slice(), &cards[..3]);
//! assert_eq!(pile.as_slice(), &cards[3..]);
//! ```

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Card, DeckRng, StackError};

/// Owned, resizable sequence of cards with a visible marker.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "StackRepr", into = "StackRepr")]
pub struct CardStack {
    /// Physical buffer. Entries at `num_cards..` are stale.
    cards: Vec<Card>,
    num_cards: usize,
    visible: usize,
}

impl CardStack {
    /// Create an empty stack with no buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack holding a copy of `src[..count]`.
    ///
    /// The buffer is exactly `count` cards long.
    ///
    /// ## Errors
    ///
    /// - `RangeOutOfBounds` if `src` holds fewer than `count` cards
    /// - `VisibleExceedsCount` if `visible > count`
    /// - `Allocation` if the buffer can't be reserved
    pub fn construct(src: &[Card], count: usize, visible: usize) -> Result<Self, StackError> {
        if count > src.len() {
            return Err(StackError::RangeOutOfBounds {
                start: 0,
                count,
                len: src.len(),
            });
        }
        if visible > count {
            return Err(StackError::VisibleExceedsCount { visible, count });
        }

        let mut cards = alloc_exact(count)?;
        cards.extend_from_slice(&src[..count]);

        Ok(Self {
            cards,
            num_cards: count,
            visible,
        })
    }

    /// Create a stack holding a copy of every card in `src`, none visible.
    pub fn from_cards(src: &[Card]) -> Result<Self, StackError> {
        Self::construct(src, src.len(), 0)
    }

    /// Append `src[start..start + count]` to the top of the stack.
    ///
    /// Reallocates to exactly `len() + count` cards, copies the live cards
    /// followed by the new range, then drops the old buffer.
    pub fn push(&mut self, src: &[Card], start: usize, count: usize) -> Result<(), StackError> {
        let end = checked_range(start, count, src.len())?;
        let new_len = self
            .num_cards
            .checked_add(count)
            .ok_or(StackError::Allocation { requested: usize::MAX })?;

        let mut grown = alloc_exact(new_len)?;
        grown.extend_from_slice(self.as_slice());
        grown.extend_from_slice(&src[start..end]);

        self.cards = grown;
        self.num_cards = new_len;
        Ok(())
    }

    /// Remove `count` cards from the top of the stack.
    ///
    /// The buffer is not shrunk and the removed cards are not cleared.
    pub fn pop(&mut self, count: usize) -> Result<(), StackError> {
        if count > self.num_cards {
            return Err(StackError::PopUnderflow {
                count,
                len: self.num_cards,
            });
        }
        self.num_cards -= count;
        Ok(())
    }

    /// Remove `count` cards starting at `start`, closing the gap.
    ///
    /// Unlike [`pop`](Self::pop) this may remove cards below the top.
    pub fn remove(&mut self, start: usize, count: usize) -> Result<(), StackError> {
        let end = checked_range(start, count, self.num_cards)?;
        self.cards.drain(start..end);
        self.num_cards -= count;
        Ok(())
    }

    /// Move `[start, start + count)` of this stack onto `destination`.
    ///
    /// See [`transfer`].
    pub fn transfer_to(
        &mut self,
        start: usize,
        count: usize,
        destination: &mut CardStack,
    ) -> Result<(), StackError> {
        transfer(start, count, self, destination)
    }

    /// Release the buffer and reset to the empty state.
    ///
    /// Safe to call more than once.
    pub fn destruct(&mut self) {
        self.cards = Vec::new();
        self.num_cards = 0;
        self.visible = 0;
    }

    /// Shuffle the live cards.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        let len = self.num_cards;
        rng.shuffle(&mut self.cards[..len]);
    }

    /// Number of live cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.num_cards
    }

    /// Check if the stack holds no live cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_cards == 0
    }

    /// The visible marker.
    ///
    /// Set at construction and by [`set_visible`](Self::set_visible) only;
    /// push and pop leave it alone, so it can exceed `len()` after a pop.
    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Set the visible marker.
    pub fn set_visible(&mut self, visible: usize) -> Result<(), StackError> {
        if visible > self.num_cards {
            return Err(StackError::VisibleExceedsCount {
                visible,
                count: self.num_cards,
            });
        }
        self.visible = visible;
        Ok(())
    }

    /// The top `min(visible, len)` cards.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let shown = self.visible.min(self.num_cards);
        &self.as_slice()[self.num_cards - shown..]
    }

    /// The live cards, bottom first.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards[..self.num_cards]
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.as_slice().last().copied()
    }

    /// Whether the stack currently owns a buffer.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.cards.capacity() > 0
    }

    /// Physical buffer length, including cards removed by `pop`.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.cards.len()
    }
}

impl PartialEq for CardStack {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice() && self.visible == other.visible
    }
}

impl Eq for CardStack {}

/// Move `[start, start + count)` of `source` onto `destination`.
///
/// Pushes the range onto `destination`, then pops `count` cards from
/// `source`. The pop always takes the top, so the stacks stay consistent
/// only when the range ends at the top of `source`
/// (`start + count == source.len()`).
///
/// Requires `start + count <= source.len()`. On error neither stack changes.
pub fn transfer(
    start: usize,
    count: usize,
    source: &mut CardStack,
    destination: &mut CardStack,
) -> Result<(), StackError> {
    checked_range(start, count, source.len())?;

    destination.push(source.as_slice(), start, count)?;
    source.pop(count)?;

    trace!(
        "Transferred {} cards from index {} ({} left, destination holds {})",
        count,
        start,
        source.len(),
        destination.len()
    );
    Ok(())
}

/// Validate `[start, start + count)` against `len`, returning the end index.
fn checked_range(start: usize, count: usize, len: usize) -> Result<usize, StackError> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(end),
        _ => Err(StackError::RangeOutOfBounds { start, count, len }),
    }
}

fn alloc_exact(count: usize) -> Result<Vec<Card>, StackError> {
    let mut cards = Vec::new();
    cards
        .try_reserve_exact(count)
        .map_err(|_| StackError::Allocation { requested: count })?;
    Ok(cards)
}

/// Serialized form: live cards only.
///
/// `visible` is written and read back unchanged, including a marker left
/// above the card count by `pop`.
#[derive(Clone, Serialize, Deserialize)]
struct StackRepr {
    cards: Vec<Card>,
    visible: usize,
}

impl From<CardStack> for StackRepr {
    fn from(mut stack: CardStack) -> Self {
        stack.cards.truncate(stack.num_cards);
        Self {
            cards: stack.cards,
            visible: stack.visible,
        }
    }
}

impl TryFrom<StackRepr> for CardStack {
    type Error = StackError;

    fn try_from(repr: StackRepr) -> Result<Self, Self::Error> {
        let mut stack = CardStack::from_cards(&repr.cards)?;
        stack.visible = repr.visible;
        Ok(stack)
    }
}
