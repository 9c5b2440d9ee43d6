//! Core types: cards, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::Card;
pub use config::{
    Pile, Rules, SortConfig, DEFAULT_SEED, FIELD_PILES, HAND_ALLOW_RANDOM_ACCESS, HAND_SIZE_MAX,
    MAX_RETRIES, ORDERED_PILES,
};
pub use error::{SortError, StackError};
pub use rng::{DeckRng, DeckRngState};
