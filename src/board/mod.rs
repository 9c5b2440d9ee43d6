//! Board layout and deal strategies.
//!
//! ## Key Types
//!
//! - `Board`: Deck, hand, field piles and ordered piles for one trial
//! - `Pile`: Address of a single stack on a board (from `core::config`)
//! - `DealStrategy`: Turns a deck into a result stack
//!
//! The stock strategies never sort. [`VerbatimDeal`] is what the driver uses
//! unless told otherwise.

#[allow(clippy::module_inception)]
mod board;
mod deal;

pub use board::{cards_conserved, Board};
pub use deal::{DealStrategy, ScrambleDeal, VerbatimDeal};

// Re-export pile addressing from core for convenience
pub use crate::core::config::Pile;
