//! # solitaire-sort
//!
//! A sorting routine that plays a game of faux-solitaire with its input.
//! It is a joke, not production software: no deal strategy shipped here
//! actually orders cards, and the default one returns the deck untouched.
//!
//! ## Design Principles
//!
//! 1. **Owned Stacks**: Every pile is a `CardStack` that owns its buffer.
//!    Cards cross between stacks only by explicit transfer.
//!
//! 2. **Pluggable Play**: How a deck is played out is a `DealStrategy`.
//!    The driver only checks the result and retries.
//!
//! 3. **Explicit Randomness**: Shuffling takes a `DeckRng`. Same seed,
//!    same trials.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, configuration, errors
//! - `stack`: Card stacks and transfer
//! - `board`: Board layout and deal strategies
//! - `sort`: Ordering check and retry driver
//!
//! ## Example
//!
//! ```
//! use solitaire_sort::{solitaire_sort, Card, SortStatus};
//!
//! let mut data = Card::cards_from_str("15253969704").unwrap();
//! let status = solitaire_sort(&mut data).unwrap();
//!
//! assert_eq!(status, SortStatus::Failure);
//! assert_eq!(status.code(), 1);
//! ```

pub mod core;
pub mod stack;
pub mod board;
pub mod sort;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, DeckRng, DeckRngState,
    Pile, Rules, SortConfig,
    SortError, StackError,
    MAX_RETRIES,
};

pub use crate::stack::{transfer, CardStack};

pub use crate::board::{Board, DealStrategy, ScrambleDeal, VerbatimDeal};

pub use crate::sort::{is_ordered, solitaire_sort, SolitaireSorter, SortReport, SortStatus};
