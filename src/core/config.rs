//! Sort configuration types.
//!
//! Callers configure a sort by providing:
//! - `Rules`: The shape of the board (pile counts, hand limits)
//! - `SortConfig`: Rules plus retry bound and RNG seed
//!
//! `Pile` addresses a single stack on a board.

use serde::{Deserialize, Serialize};

/// Maximum number of cards the hand may hold.
pub const HAND_SIZE_MAX: usize = 3;

/// Whether cards may be taken from anywhere in the hand, not just the top.
pub const HAND_ALLOW_RANDOM_ACCESS: bool = true;

/// Number of field piles (unordered cards being worked on).
pub const FIELD_PILES: usize = 8;

/// Number of ordered piles. Real solitaire has four suit piles; a single
/// sequence only needs one.
pub const ORDERED_PILES: usize = 1;

/// Number of trials before the sort gives up.
pub const MAX_RETRIES: usize = 3;

/// Seed used when the caller doesn't pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Address of one stack on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    /// The face-down deck the board was dealt from.
    Deck,
    /// The hand (at most `hand_size_max` cards).
    Hand,
    /// A field pile, by index.
    Field(usize),
    /// An ordered pile, by index.
    Ordered(usize),
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pile::Deck => write!(f, "Deck"),
            Pile::Hand => write!(f, "Hand"),
            Pile::Field(i) => write!(f, "Field({})", i),
            Pile::Ordered(i) => write!(f, "Ordered({})", i),
        }
    }
}

/// Board rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Maximum cards in the hand.
    pub hand_size_max: usize,

    /// Allow taking cards from below the top of the hand.
    pub hand_allow_random_access: bool,

    /// Number of field piles on the board.
    pub field_piles: usize,

    /// Number of ordered piles on the board.
    pub ordered_piles: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            hand_size_max: HAND_SIZE_MAX,
            hand_allow_random_access: HAND_ALLOW_RANDOM_ACCESS,
            field_piles: FIELD_PILES,
            ordered_piles: ORDERED_PILES,
        }
    }
}

impl Rules {
    /// Set the maximum hand size.
    #[must_use]
    pub fn with_hand_size_max(mut self, max: usize) -> Self {
        self.hand_size_max = max;
        self
    }

    /// Restrict or allow random access into the hand.
    #[must_use]
    pub fn with_hand_random_access(mut self, allow: bool) -> Self {
        self.hand_allow_random_access = allow;
        self
    }

    /// Set the number of field piles.
    #[must_use]
    pub fn with_field_piles(mut self, count: usize) -> Self {
        self.field_piles = count;
        self
    }

    /// Set the number of ordered piles.
    #[must_use]
    pub fn with_ordered_piles(mut self, count: usize) -> Self {
        self.ordered_piles = count;
        self
    }
}

/// Sort configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Maximum number of trials (0 = fail without trying).
    pub max_retries: usize,

    /// Seed for the trial RNG.
    /// Same seed produces the same sequence of trials.
    pub seed: u64,

    /// Board rules handed to the deal strategy.
    pub rules: Rules,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            seed: DEFAULT_SEED,
            rules: Rules::default(),
        }
    }
}

impl SortConfig {
    /// Create a new config with a custom retry bound.
    #[must_use]
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom board rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}
