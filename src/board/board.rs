//! The board: every stack a single trial works with.
//!
//! A board owns one deck, one hand, a row of field piles and a row of
//! ordered piles. Piles are addressed by [`Pile`]. Cards move between piles
//! with [`Board::move_cards`], which enforces the hand rules on top of the
//! stack-level range checks.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, Pile, Rules, SortError, FIELD_PILES, ORDERED_PILES};
use crate::stack::{transfer, CardStack};

/// In-progress state of one trial.
///
/// ```
/// use solitaire_sort::board::{Board, Pile};
/// use solitaire_sort::core::{Card, Rules};
/// use solitaire_sort::stack::CardStack;
///
/// let cards = Card::cards_from_str("3142").unwrap();
/// let deck = CardStack::from_cards(&cards).unwrap();
/// let mut board = Board::new(deck, &Rules::default());
///
/// // Draw the top two cards into the hand
/// board.move_cards(Pile::Deck, Pile::Hand, 2, 2).unwrap();
/// assert_eq!(board.hand().as_slice(), &cards[2..]);
/// assert_eq!(board.total_cards(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    deck: CardStack,
    hand: CardStack,
    /// Unordered cards in the process of being ordered.
    field: SmallVec<[CardStack; FIELD_PILES]>,
    /// Where complete piles go.
    ordered: SmallVec<[CardStack; ORDERED_PILES]>,
    rules: Rules,
}

impl Board {
    /// Lay out a board around `deck`, with empty hand, field and ordered piles.
    #[must_use]
    pub fn new(deck: CardStack, rules: &Rules) -> Self {
        Self {
            deck,
            hand: CardStack::new(),
            field: (0..rules.field_piles).map(|_| CardStack::new()).collect(),
            ordered: (0..rules.ordered_piles).map(|_| CardStack::new()).collect(),
            rules: rules.clone(),
        }
    }

    /// The rules this board was laid out with.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The deck.
    #[must_use]
    pub fn deck(&self) -> &CardStack {
        &self.deck
    }

    /// The hand.
    #[must_use]
    pub fn hand(&self) -> &CardStack {
        &self.hand
    }

    /// All field piles, by index.
    #[must_use]
    pub fn field_piles(&self) -> &[CardStack] {
        &self.field
    }

    /// All ordered piles, by index.
    #[must_use]
    pub fn ordered_piles(&self) -> &[CardStack] {
        &self.ordered
    }

    /// Look up a pile.
    pub fn pile(&self, pile: Pile) -> Result<&CardStack, SortError> {
        match pile {
            Pile::Deck => Some(&self.deck),
            Pile::Hand => Some(&self.hand),
            Pile::Field(i) => self.field.get(i),
            Pile::Ordered(i) => self.ordered.get(i),
        }
        .ok_or(SortError::UnknownPile(pile))
    }

    /// Look up a pile for modification.
    pub fn pile_mut(&mut self, pile: Pile) -> Result<&mut CardStack, SortError> {
        match pile {
            Pile::Deck => Some(&mut self.deck),
            Pile::Hand => Some(&mut self.hand),
            Pile::Field(i) => self.field.get_mut(i),
            Pile::Ordered(i) => self.ordered.get_mut(i),
        }
        .ok_or(SortError::UnknownPile(pile))
    }

    /// Move `[start, start + count)` of `from` onto the top of `to`.
    ///
    /// A range ending at the top of `from` goes through [`transfer`]. A range
    /// below the top is copied and then cut out of `from`, closing the gap.
    ///
    /// ## Errors
    ///
    /// - `UnknownPile` / `SamePile` for bad addresses
    /// - `HandFull` if the hand would exceed `hand_size_max`
    /// - `HandAccessDenied` if random hand access is off and the range
    ///   doesn't end at the top of the hand
    /// - `Stack(RangeOutOfBounds)` if the range runs past `from`
    ///
    /// On error the board is unchanged.
    pub fn move_cards(
        &mut self,
        from: Pile,
        to: Pile,
        start: usize,
        count: usize,
    ) -> Result<(), SortError> {
        if from == to {
            return Err(SortError::SamePile(from));
        }
        let source_len = self.pile(from)?.len();
        let destination_len = self.pile(to)?.len();

        if to == Pile::Hand {
            let held = destination_len.saturating_add(count);
            if held > self.rules.hand_size_max {
                return Err(SortError::HandFull {
                    held,
                    max: self.rules.hand_size_max,
                });
            }
        }
        let from_top = start.checked_add(count) == Some(source_len);
        if from == Pile::Hand && !self.rules.hand_allow_random_access && !from_top {
            return Err(SortError::HandAccessDenied);
        }

        let mut source = std::mem::take(self.pile_mut(from)?);
        let result = self.pile_mut(to).and_then(|destination| {
            if from_top {
                transfer(start, count, &mut source, destination)?;
            } else {
                destination.push(source.as_slice(), start, count)?;
                source.remove(start, count)?;
            }
            Ok(())
        });
        *self.pile_mut(from)? = source;
        result
    }

    /// Total cards across every pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.field.iter().map(CardStack::len).sum::<usize>()
            + self.ordered.iter().map(CardStack::len).sum::<usize>()
    }

    /// Consume the board, stacking the ordered piles in index order.
    ///
    /// Cards left in the deck, hand or field are discarded.
    pub fn into_result(mut self) -> Result<CardStack, SortError> {
        let mut result = CardStack::new();
        for pile in &self.ordered {
            result.push(pile.as_slice(), 0, pile.len())?;
        }
        self.pack_up();
        Ok(result)
    }

    /// Release every stack on the board.
    pub fn pack_up(&mut self) {
        self.deck.destruct();
        self.hand.destruct();
        self.field.iter_mut().for_each(CardStack::destruct);
        self.ordered.iter_mut().for_each(CardStack::destruct);
    }
}

/// Serialized form. Rows are checked against the rules on the way in.
#[derive(Clone, Serialize, Deserialize)]
struct BoardRepr {
    deck: CardStack,
    hand: CardStack,
    field: SmallVec<[CardStack; FIELD_PILES]>,
    ordered: SmallVec<[CardStack; ORDERED_PILES]>,
    rules: Rules,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            deck: board.deck,
            hand: board.hand,
            field: board.field,
            ordered: board.ordered,
            rules: board.rules,
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = SortError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        check_row("field", repr.rules.field_piles, repr.field.len())?;
        check_row("ordered", repr.rules.ordered_piles, repr.ordered.len())?;
        Ok(Self {
            deck: repr.deck,
            hand: repr.hand,
            field: repr.field,
            ordered: repr.ordered,
            rules: repr.rules,
        })
    }
}

fn check_row(row: &'static str, expected: usize, found: usize) -> Result<(), SortError> {
    if expected == found {
        Ok(())
    } else {
        Err(SortError::LayoutMismatch { row, expected, found })
    }
}

/// Check that `output` holds exactly the cards of `input`, in any order.
#[must_use]
pub fn cards_conserved(input: &[Card], output: &[Card]) -> bool {
    if input.len() != output.len() {
        return false;
    }

    let mut counts: FxHashMap<Card, isize> = FxHashMap::default();
    for &card in input {
        *counts.entry(card).or_insert(0) += 1;
    }
    for &card in output {
        *counts.entry(card).or_insert(0) -= 1;
    }
    counts.values().all(|&n| n == 0)
}
