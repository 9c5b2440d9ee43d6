//! Error types for stack and sort operations.
//!
//! Two layers:
//!
//! - [`StackError`]: a single `CardStack` operation could not be carried out,
//!   either because the allocator refused the buffer or because the caller
//!   broke an operation's precondition.
//! - [`SortError`]: anything that stops a sort, including board-level rule
//!   violations raised by a deal strategy.
//!
//! Failing to produce an ordered result is not an error. The driver reports
//! it as [`SortStatus::Failure`](crate::sort::SortStatus::Failure).

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use super::config::Pile;

/// Error raised by a `CardStack` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// The buffer for `requested` cards could not be allocated. Unrecoverable.
    Allocation {
        /// Number of cards the buffer needed to hold.
        requested: usize,
    },

    /// A read range `[start, start + count)` runs past the source length.
    RangeOutOfBounds {
        /// First index read.
        start: usize,
        /// Number of cards read.
        count: usize,
        /// Length of the source.
        len: usize,
    },

    /// A pop asked for more cards than the stack holds.
    PopUnderflow {
        /// Number of cards to pop.
        count: usize,
        /// Current number of cards.
        len: usize,
    },

    /// The visible marker would exceed the number of cards.
    VisibleExceedsCount {
        /// Requested visible count.
        visible: usize,
        /// Number of cards in the stack.
        count: usize,
    },
}

impl StackError {
    /// Whether the error is an allocation failure.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, StackError::Allocation { .. })
    }
}

impl Display for StackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            StackError::Allocation { requested } => {
                write!(f, "Allocation failed: could not reserve {} cards", requested)
            }
            StackError::RangeOutOfBounds { start, count, len } => write!(
                f,
                "Range out of bounds: {} cards from index {} exceeds length {}",
                count, start, len
            ),
            StackError::PopUnderflow { count, len } => {
                write!(f, "Pop underflow: cannot pop {} cards from {}", count, len)
            }
            StackError::VisibleExceedsCount { visible, count } => write!(
                f,
                "Invalid visible count: {} visible but only {} cards",
                visible, count
            ),
        }
    }
}

impl Error for StackError {}

/// Error that stops a sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// A stack operation failed.
    Stack(StackError),

    /// The pile does not exist on this board.
    UnknownPile(Pile),

    /// Source and destination of a move are the same pile.
    SamePile(Pile),

    /// The hand cannot hold any more cards.
    HandFull {
        /// Cards the hand would hold after the move.
        held: usize,
        /// Maximum hand size.
        max: usize,
    },

    /// Cards may only leave the hand from the top.
    HandAccessDenied,

    /// A deal strategy returned a result that is not a permutation of its deck.
    CardsNotConserved,

    /// A pile row doesn't have the length the board's rules call for.
    LayoutMismatch {
        /// Which row: `"field"` or `"ordered"`.
        row: &'static str,
        /// Pile count from the rules.
        expected: usize,
        /// Pile count actually present.
        found: usize,
    },
}

impl SortError {
    /// Whether the error is an allocation failure.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, SortError::Stack(e) if e.is_fatal())
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::Stack(e) => write!(f, "{}", e),
            SortError::UnknownPile(pile) => write!(f, "Unknown pile: {}", pile),
            SortError::SamePile(pile) => write!(f, "Cannot move cards from {} onto itself", pile),
            SortError::HandFull { held, max } => {
                write!(f, "Hand full: {} cards exceeds the limit of {}", held, max)
            }
            SortError::HandAccessDenied => {
                write!(f, "Hand access denied: cards may only be taken from the top")
            }
            SortError::CardsNotConserved => {
                write!(f, "Deal strategy lost or invented cards")
            }
            SortError::LayoutMismatch { row, expected, found } => write!(
                f,
                "Board layout mismatch: rules call for {} {} piles, found {}",
                expected, row, found
            ),
        }
    }
}

impl Error for SortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SortError::Stack(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StackError> for SortError {
    fn from(err: StackError) -> Self {
        SortError::Stack(err)
    }
}
